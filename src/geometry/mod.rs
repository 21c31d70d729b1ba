//! Integer 2D geometry: grid vectors and right-angle rotation.
//!
//! ## Key Types
//!
//! - `Vec2`: integer (x, y) pair used for positions, orientations, and offsets
//! - `Turn`: the four quarter-turn outcomes reachable by right-angle rotation
//!
//! ## Conventions
//!
//! The x axis points right and the y axis points up. An orientation is the
//! position delta of one forward step: `RIGHT` is (1, 0), `UP` is (0, 1).
//! A +90° rotation is counterclockwise, so the left-hand side of an actor
//! facing `v` is `v.turned(Turn::Left)`.

pub mod vec2;

pub use vec2::{rotate, Turn, Vec2};
