//! # grid-tactics
//!
//! A grid tactical-puzzle engine with exhaustive decision search.
//!
//! A single mech executes a fixed six-slot line of command cards on a
//! small board of minions, walls, oil slicks, and bombs. The cards are
//! fixed, but almost every card leaves something for the player to
//! decide: which way to turn, whether to tow a bomb mid-stride, which
//! scanned minion to strike. The engine enumerates every one of those
//! decision sequences and reports the ones that clear the board.
//!
//! ## Design Principles
//!
//! 1. **Choices As Data**: A pending decision is a `ChoicePoint` record,
//!    never a closure, so forking a branch is a plain clone.
//!
//! 2. **One Relocation Primitive**: Every move, push, slide, and tow
//!    funnels through `Board::relocate`, which keeps cell occupancy and
//!    cached actor positions in lockstep.
//!
//! 3. **Clone-Per-Fork Search**: Branches own their whole world; there
//!    is no undo machinery and no sharing of mutable state.
//!
//! ## Modules
//!
//! - `geometry`: Integer vectors and quarter-turn rotation
//! - `board`: The grid, the actor arena, movement and damage primitives
//! - `actor`: Factions and the closed actor-kind union
//! - `cards`: The card roster and the six-slot command line
//! - `actions`: Choice points, the card catalog, and the resolver
//! - `search`: The exhaustive depth-first decision search
//! - `scenario`: Puzzle setup and the facing x command-line driver loop

pub mod actions;
pub mod actor;
pub mod board;
pub mod cards;
pub mod error;
pub mod geometry;
pub mod scenario;
pub mod search;

// Re-export commonly used types
pub use crate::actions::{apply_choice, entry_point, ChoiceKind, ChoicePoint};
pub use crate::actor::{Actor, ActorId, ActorKind, Faction};
pub use crate::board::Board;
pub use crate::cards::{Card, Color, CommandLine, Slot};
pub use crate::error::EngineError;
pub use crate::geometry::{rotate, Turn, Vec2};
pub use crate::scenario::{Scenario, ScenarioBuilder};
pub use crate::search::{
    Branch, RuleConfig, Search, SearchConfig, SearchStats, UnitState, WinningLine,
};
