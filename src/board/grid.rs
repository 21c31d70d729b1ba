//! Grid storage and the actor arena.

use rustc_hash::FxHashMap;

use crate::actor::{Actor, ActorId, ActorKind, Faction};
use crate::error::EngineError;
use crate::geometry::Vec2;

/// One board square.
///
/// Holds at most one occupant (a handle into the board's actor arena) and
/// a hazard flag. The hazard flag is sticky: set once, never cleared
/// during play.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    occupant: Option<ActorId>,
    hazard: bool,
}

/// A fixed-size rectangular grid of cells plus the arena owning every
/// actor on it.
///
/// Cloning a board deep-copies the grid and the arena together, so a
/// cloned search branch can be mutated freely without touching its
/// siblings.
#[derive(Clone, Debug)]
pub struct Board {
    width: i32,
    height: i32,
    cells: Vec<Cell>,
    actors: FxHashMap<ActorId, Actor>,
    next_actor: u32,
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new(width: i32, height: i32) -> Self {
        assert!(width > 0 && height > 0, "board dimensions must be positive");
        Self {
            width,
            height,
            cells: vec![Cell::default(); (width * height) as usize],
            actors: FxHashMap::default(),
            next_actor: 0,
        }
    }

    /// Board width in cells.
    #[must_use]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Board height in cells.
    #[must_use]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// True iff both coordinates lie within [0, width) x [0, height).
    #[must_use]
    pub fn in_bounds(&self, position: Vec2) -> bool {
        position.x >= 0 && position.x < self.width && position.y >= 0 && position.y < self.height
    }

    fn index(&self, position: Vec2) -> usize {
        assert!(self.in_bounds(position), "cell access out of bounds: {position}");
        (position.y * self.width + position.x) as usize
    }

    // === Occupancy ===

    /// The occupant of a cell, if any. Must not be called out of bounds.
    #[must_use]
    pub fn occupant(&self, position: Vec2) -> Option<ActorId> {
        self.cells[self.index(position)].occupant
    }

    /// The occupying actor of a cell, if any.
    #[must_use]
    pub fn actor_at(&self, position: Vec2) -> Option<&Actor> {
        self.occupant(position).map(|id| self.actor(id))
    }

    /// Look up an actor by handle. The handle must be live.
    #[must_use]
    pub fn actor(&self, id: ActorId) -> &Actor {
        self.actors.get(&id).expect("stale actor handle")
    }

    /// Mutable actor lookup. The handle must be live.
    pub fn actor_mut(&mut self, id: ActorId) -> &mut Actor {
        self.actors.get_mut(&id).expect("stale actor handle")
    }

    /// Move an actor to a new cell, keeping cell occupancy and the
    /// actor's cached position in sync. The destination must be an empty
    /// in-bounds cell.
    ///
    /// This is the single authoritative relocation primitive; every move,
    /// push, slide, and tow funnels through it.
    pub fn relocate(&mut self, id: ActorId, to: Vec2) {
        let from = self.actor(id).position;
        let from_idx = self.index(from);
        let to_idx = self.index(to);
        assert_eq!(self.cells[from_idx].occupant, Some(id), "occupancy desync for {id}");
        assert!(self.cells[to_idx].occupant.is_none(), "relocate into occupied cell {to}");
        self.cells[from_idx].occupant = None;
        self.cells[to_idx].occupant = Some(id);
        self.actor_mut(id).position = to;
    }

    /// Delist an actor from its cell and drop it from the arena.
    pub fn remove(&mut self, id: ActorId) {
        let position = self.actor(id).position;
        let idx = self.index(position);
        assert_eq!(self.cells[idx].occupant, Some(id), "occupancy desync for {id}");
        self.cells[idx].occupant = None;
        self.actors.remove(&id);
    }

    // === Hazards ===

    /// Whether a cell is hazardous (oiled).
    #[must_use]
    pub fn is_hazard(&self, position: Vec2) -> bool {
        self.cells[self.index(position)].hazard
    }

    /// Mark a cell hazardous. Idempotent, one-way.
    pub fn set_hazard(&mut self, position: Vec2) {
        let idx = self.index(position);
        self.cells[idx].hazard = true;
    }

    // === Spawning ===

    fn spawn(
        &mut self,
        position: Vec2,
        orientation: Vec2,
        faction: Faction,
        kind: ActorKind,
    ) -> Result<ActorId, EngineError> {
        assert!(self.in_bounds(position), "spawn out of bounds: {position}");
        if let Some(existing) = self.occupant(position) {
            // A minion on the target cell is simply replaced; anything
            // else already owns the square.
            if self.actor(existing).faction == Faction::Minions {
                self.remove(existing);
            } else {
                return Err(EngineError::CellOccupied(position));
            }
        }
        let id = ActorId(self.next_actor);
        self.next_actor += 1;
        let idx = self.index(position);
        self.actors.insert(id, Actor { id, position, orientation, faction, kind });
        self.cells[idx].occupant = Some(id);
        Ok(id)
    }

    /// Spawn an enemy unit. Minions carry a filler orientation.
    pub fn spawn_minion(&mut self, position: Vec2) -> Result<ActorId, EngineError> {
        self.spawn(position, Vec2::RIGHT, Faction::Minions, ActorKind::Minion)
    }

    /// Spawn a wall. The facing orientation only matters for spiked
    /// walls and is currently inert.
    pub fn spawn_wall(
        &mut self,
        position: Vec2,
        spiked: bool,
        facing: Vec2,
    ) -> Result<ActorId, EngineError> {
        self.spawn(position, facing, Faction::Neutral, ActorKind::Wall { spiked })
    }

    /// Spawn the player-controlled unit.
    pub fn spawn_mech(&mut self, position: Vec2, facing: Vec2) -> Result<ActorId, EngineError> {
        self.spawn(position, facing, Faction::Mechs, ActorKind::Mech)
    }

    /// Spawn a bomb with the given health.
    pub fn spawn_bomb(&mut self, position: Vec2, health: i32) -> Result<ActorId, EngineError> {
        self.spawn(position, Vec2::RIGHT, Faction::Mechs, ActorKind::Bomb { health })
    }

    // === Queries ===

    /// Number of minions still on the board: the goal predicate's input.
    #[must_use]
    pub fn minion_count(&self) -> usize {
        self.actors.values().filter(|a| matches!(a.kind, ActorKind::Minion)).count()
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_in_bounds() {
        let board = Board::new(6, 4);

        assert!(board.in_bounds(Vec2::new(0, 0)));
        assert!(board.in_bounds(Vec2::new(5, 3)));
        assert!(!board.in_bounds(Vec2::new(6, 0)));
        assert!(!board.in_bounds(Vec2::new(0, 4)));
        assert!(!board.in_bounds(Vec2::new(-1, 2)));
    }

    #[test]
    fn test_spawn_and_occupancy() {
        let mut board = Board::new(6, 6);
        let id = board.spawn_minion(Vec2::new(2, 3)).unwrap();

        assert_eq!(board.occupant(Vec2::new(2, 3)), Some(id));
        assert_eq!(board.actor(id).position, Vec2::new(2, 3));
        assert_eq!(board.minion_count(), 1);
    }

    #[test]
    fn test_spawn_replaces_minion() {
        let mut board = Board::new(6, 6);
        board.spawn_minion(Vec2::new(1, 1)).unwrap();
        let mech = board.spawn_mech(Vec2::new(1, 1), Vec2::RIGHT).unwrap();

        assert_eq!(board.minion_count(), 0);
        assert_eq!(board.occupant(Vec2::new(1, 1)), Some(mech));
    }

    #[test]
    fn test_spawn_onto_friendly_is_error() {
        let mut board = Board::new(6, 6);
        board.spawn_mech(Vec2::new(1, 1), Vec2::RIGHT).unwrap();

        assert_eq!(
            board.spawn_bomb(Vec2::new(1, 1), 3),
            Err(EngineError::CellOccupied(Vec2::new(1, 1)))
        );
    }

    #[test]
    fn test_spawn_onto_wall_is_error() {
        let mut board = Board::new(6, 6);
        board.spawn_wall(Vec2::new(2, 2), false, Vec2::RIGHT).unwrap();

        assert_eq!(
            board.spawn_minion(Vec2::new(2, 2)),
            Err(EngineError::CellOccupied(Vec2::new(2, 2)))
        );
    }

    #[test]
    fn test_relocate_keeps_occupancy_consistent() {
        let mut board = Board::new(6, 6);
        let id = board.spawn_mech(Vec2::new(0, 0), Vec2::RIGHT).unwrap();

        board.relocate(id, Vec2::new(3, 4));

        assert_eq!(board.occupant(Vec2::new(0, 0)), None);
        assert_eq!(board.occupant(Vec2::new(3, 4)), Some(id));
        assert_eq!(board.actor(id).position, Vec2::new(3, 4));
    }

    #[test]
    fn test_remove_clears_cell() {
        let mut board = Board::new(6, 6);
        let id = board.spawn_minion(Vec2::new(4, 4)).unwrap();

        board.remove(id);

        assert_eq!(board.occupant(Vec2::new(4, 4)), None);
        assert_eq!(board.minion_count(), 0);
    }

    #[test]
    fn test_hazard_flag_idempotent() {
        let mut board = Board::new(6, 6);
        let p = Vec2::new(2, 2);

        assert!(!board.is_hazard(p));
        board.set_hazard(p);
        assert!(board.is_hazard(p));
        board.set_hazard(p);
        assert!(board.is_hazard(p));
    }

    #[test]
    fn test_clone_is_deep() {
        let mut board = Board::new(6, 6);
        let id = board.spawn_minion(Vec2::new(1, 1)).unwrap();

        let clone = board.clone();
        board.remove(id);

        assert_eq!(board.minion_count(), 0);
        assert_eq!(clone.minion_count(), 1);
        assert_eq!(clone.occupant(Vec2::new(1, 1)), Some(id));
    }

    proptest! {
        #[test]
        fn prop_in_bounds_matches_ranges(
            w in 1i32..12, h in 1i32..12,
            x in -3i32..15, y in -3i32..15,
        ) {
            let board = Board::new(w, h);
            let expected = x >= 0 && x < w && y >= 0 && y < h;
            prop_assert_eq!(board.in_bounds(Vec2::new(x, y)), expected);
        }
    }
}
