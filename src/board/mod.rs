//! The board: a fixed grid of cells plus the actor arena.
//!
//! ## Key Types
//!
//! - `Cell`: occupant handle + sticky hazard ("oil") flag
//! - `Board`: width x height grid of cells, owning every `Actor`
//!
//! ## Invariants
//!
//! - Every occupied cell's occupant has a cached position equal to that
//!   cell's coordinates, and no two cells hold the same occupant.
//! - No cell is ever addressed out of bounds; callers guard with
//!   `in_bounds` first. Violations are defects (assertions), not errors.

pub mod grid;
pub mod movement;

pub use grid::{Board, Cell};
pub use movement::{advance, can_advance, deal_damage, deal_damage_all, scan, step};
