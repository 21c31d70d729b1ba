//! Movement, damage, and scan primitives.
//!
//! Every card resolves its board effect through these five functions:
//!
//! - `can_advance` / `step` / `advance`: one-cell movement with push
//!   chains, minion stomps, and hazard slides
//! - `deal_damage` / `deal_damage_all`: faction-filtered damage
//! - `scan`: collect matching occupants in a square radius
//!
//! ## Movement rules
//!
//! A step into a friendly occupant pushes it one cell first (recursively,
//! so a line of friendlies moves as a chain). A step into an enemy stomps
//! it: the enemy is removed and the mover takes its cell; a bomb loses 1
//! health per stomp. Walls and board edges block the whole chain. A mover
//! landing on a hazard cell immediately slides one more cell in the same
//! direction, repeating until it lands clean or is blocked.

use crate::actor::{ActorId, ActorKind, Faction};
use crate::board::Board;
use crate::geometry::Vec2;

/// Whether an actor standing at `from` could move one cell along `dir`.
///
/// Walks the push chain: friendly occupants are transparent as long as
/// the cell past them is eventually free (or holds a stompable enemy).
#[must_use]
pub fn can_advance(board: &Board, from: Vec2, dir: Vec2) -> bool {
    let next = from + dir;
    if !board.in_bounds(next) {
        return false;
    }
    match board.actor_at(next) {
        None => true,
        Some(actor) => match actor.faction {
            Faction::Neutral => false,
            Faction::Mechs => can_advance(board, next, dir),
            Faction::Minions => true,
        },
    }
}

/// Move an actor one cell along `dir`, resolving pushes, stomps, and
/// hazard slides. Returns false (and changes nothing) if the move is
/// blocked.
pub fn step(board: &mut Board, id: ActorId, dir: Vec2) -> bool {
    let from = board.actor(id).position;
    if !can_advance(board, from, dir) {
        return false;
    }
    let next = from + dir;
    match board.occupant(next) {
        None => {}
        Some(other) => {
            let other_faction = board.actor(other).faction;
            match other_faction {
                Faction::Mechs => {
                    // Push chain; can_advance already vetted the far end.
                    step(board, other, dir);
                }
                Faction::Minions => {
                    board.remove(other);
                    if let ActorKind::Bomb { health } = board.actor(id).kind {
                        board.actor_mut(id).kind = ActorKind::Bomb { health: health - 1 };
                    }
                }
                Faction::Neutral => unreachable!("can_advance admits no neutral occupant"),
            }
        }
    }
    board.relocate(id, next);
    if board.is_hazard(next) {
        // Forced slide. A blocked slide just leaves the actor on the
        // hazard; the step itself still succeeded.
        step(board, id, dir);
    }
    true
}

/// Move an actor up to `steps` cells along `dir`, stopping at the first
/// blocked step. Returns the number of steps that succeeded (hazard
/// slides do not count).
pub fn advance(board: &mut Board, id: ActorId, dir: Vec2, steps: u32) -> u32 {
    for taken in 0..steps {
        if !step(board, id, dir) {
            return taken;
        }
    }
    steps
}

/// Apply one point of damage from `attacker` to whatever occupies
/// `square`. Out-of-bounds squares, empty squares, same-faction
/// occupants, walls, and the mech itself all shrug it off; minions die,
/// bombs lose 1 health.
pub fn deal_damage(board: &mut Board, attacker: Faction, square: Vec2) {
    if !board.in_bounds(square) {
        return;
    }
    let Some(actor) = board.actor_at(square).copied() else {
        return;
    };
    if actor.faction == attacker {
        return;
    }
    let id = actor.id;
    match actor.kind {
        ActorKind::Minion => board.remove(id),
        ActorKind::Bomb { health } => {
            board.actor_mut(id).kind = ActorKind::Bomb { health: health - 1 };
        }
        ActorKind::Wall { .. } | ActorKind::Mech => {}
    }
}

/// `deal_damage` over a batch of squares.
pub fn deal_damage_all(board: &mut Board, attacker: Faction, squares: &[Vec2]) {
    for &square in squares {
        deal_damage(board, attacker, square);
    }
}

/// Collect the positions of all `faction` actors within a square radius
/// of `origin`, scanning rows bottom-to-top and left-to-right. The
/// origin itself is never included.
///
/// With `tow_direction` set the scan is a tow-target scan: diagonal
/// offsets are skipped, as is the cell straight ahead along the travel
/// direction (a towed object always ends up beside or behind the mover,
/// never in front of it).
#[must_use]
pub fn scan(
    board: &Board,
    origin: Vec2,
    radius: i32,
    faction: Faction,
    tow_direction: Option<Vec2>,
) -> Vec<Vec2> {
    let mut found = Vec::new();
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx == 0 && dy == 0 {
                continue;
            }
            let offset = Vec2::new(dx, dy);
            if let Some(dir) = tow_direction {
                if dx != 0 && dy != 0 {
                    continue;
                }
                if offset == dir {
                    continue;
                }
            }
            let square = origin + offset;
            if !board.in_bounds(square) {
                continue;
            }
            if let Some(actor) = board.actor_at(square) {
                if actor.faction == faction {
                    found.push(square);
                }
            }
        }
    }
    found
}
