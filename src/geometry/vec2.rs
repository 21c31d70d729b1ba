//! Integer 2D vectors and right-angle rotation.

use std::ops::{Add, AddAssign, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// An integer 2D vector.
///
/// Used for grid positions (0-indexed cell coordinates), orientations
/// (the delta of one forward step), and damage offsets. All arithmetic
/// returns new values; nothing mutates in place except `+=`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: i32,
    pub y: i32,
}

impl Vec2 {
    /// The zero vector.
    pub const ZERO: Vec2 = Vec2 { x: 0, y: 0 };
    /// Facing right: one step in +x.
    pub const RIGHT: Vec2 = Vec2 { x: 1, y: 0 };
    /// Facing left: one step in -x.
    pub const LEFT: Vec2 = Vec2 { x: -1, y: 0 };
    /// Facing up: one step in +y.
    pub const UP: Vec2 = Vec2 { x: 0, y: 1 };
    /// Facing down: one step in -y.
    pub const DOWN: Vec2 = Vec2 { x: 0, y: -1 };

    /// Create a vector from components.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Rotate by a quarter-turn outcome. Purely functional.
    ///
    /// `Turn::Left` is +90° counterclockwise: (1, 0) becomes (0, 1).
    #[must_use]
    pub const fn turned(self, turn: Turn) -> Self {
        match turn {
            Turn::Left => Self { x: -self.y, y: self.x },
            Turn::Right => Self { x: self.y, y: -self.x },
            Turn::Around => Self { x: -self.x, y: -self.y },
            Turn::Hold => self,
        }
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;

    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

impl Mul<i32> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: i32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl std::fmt::Display for Vec2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One of the four outcomes of a right-angle rotation.
///
/// Choice indices map onto turns in this order everywhere a rotation is
/// offered as a player decision: left, right, about-face, hold.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Turn {
    /// +90°, counterclockwise.
    Left,
    /// -90°, clockwise.
    Right,
    /// 180°.
    Around,
    /// No rotation.
    Hold,
}

impl Turn {
    /// The rotation option order used by every rotation choice.
    pub const OPTIONS: [Turn; 4] = [Turn::Left, Turn::Right, Turn::Around, Turn::Hold];

    /// Short label for decision trails.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Turn::Left => "left",
            Turn::Right => "right",
            Turn::Around => "about-face",
            Turn::Hold => "hold",
        }
    }
}

/// Rotate a vector by a right angle given in degrees.
///
/// Accepts exactly {-360, -270, -180, -90, 0, 90, 180, 270, 360}; +90° is
/// counterclockwise. Any other angle is a configuration error.
pub fn rotate(v: Vec2, degrees: i32) -> Result<Vec2, EngineError> {
    let turn = match degrees {
        90 | -270 => Turn::Left,
        -90 | 270 => Turn::Right,
        180 | -180 => Turn::Around,
        0 | 360 | -360 => Turn::Hold,
        other => return Err(EngineError::InvalidAngle(other)),
    };
    Ok(v.turned(turn))
}
