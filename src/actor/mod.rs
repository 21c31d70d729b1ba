//! Actors: anything that occupies a board cell.
//!
//! Every actor shares one record (position, orientation, faction) and a
//! closed `ActorKind` tag carries the variant-specific state. Movement
//! and damage behavior dispatch on the tag in `board::movement`.
//!
//! ## Ownership
//!
//! The `Board` owns all actors in an arena keyed by `ActorId`; cells hold
//! the id, never a reference. An actor caches its own position, kept in
//! sync with cell occupancy by `Board::relocate` - the single authoritative
//! move primitive.

use serde::{Deserialize, Serialize};

use crate::geometry::Vec2;

/// Handle into the board's actor arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActorId(pub u32);

impl std::fmt::Display for ActorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Actor({})", self.0)
    }
}

/// Allegiance tag deciding friend/foe interactions.
///
/// Friendly collisions push, enemy collisions stomp, and damage never
/// crosses to a same-faction target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Faction {
    /// The player's side: the mech and everything it can push or tow.
    Mechs,
    /// The enemy units the search tries to clear.
    Minions,
    /// Terrain-like actors: immovable, damage-immune.
    Neutral,
}

/// Variant-specific actor state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActorKind {
    /// Enemy unit: dies instantly on taking damage.
    Minion,
    /// Immovable blocker. The spiked flag (and the wall's facing
    /// orientation) are carried but currently inert, reserved for future
    /// rule use.
    Wall { spiked: bool },
    /// The player-controlled unit's board presence. Its name, command
    /// line, and choice stack live on the search branch.
    Mech,
    /// Pushable, towable explosive. Loses 1 health per damage taken and
    /// per minion it stomps; never removed from the board by the core.
    Bomb { health: i32 },
}

/// An entity placed on exactly one board cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub id: ActorId,
    /// Cached cell coordinates; always equal to the coordinates of the
    /// cell whose occupant is `id`.
    pub position: Vec2,
    /// Position delta of one forward step. Meaningless for minions and
    /// bombs (they keep a filler value).
    pub orientation: Vec2,
    pub faction: Faction,
    pub kind: ActorKind,
}

impl Actor {
    /// True if this actor blocks movement entirely (walls).
    #[must_use]
    pub fn is_blocking(&self) -> bool {
        matches!(self.kind, ActorKind::Wall { .. })
    }
}
