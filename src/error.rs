//! Engine error taxonomy.
//!
//! Only configuration mistakes are recoverable errors: a bad rotation
//! angle, a spawn onto an occupied cell, an option index outside a choice
//! point's declared count, a command-line slot outside 1-6. The search
//! engine discards a branch that raises one of these and keeps going.
//!
//! Invariant violations (out-of-bounds cell access, an occupant whose
//! cached position disagrees with its cell) are defects, not errors, and
//! are enforced with assertions instead.

use thiserror::Error;

use crate::geometry::Vec2;

/// A recoverable configuration error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Rotation angle is not a right-angle multiple in [-360, 360].
    #[error("rotation angle {0} is not a right-angle multiple in [-360, 360]")]
    InvalidAngle(i32),

    /// Spawn target is already held by a friendly or neutral actor.
    #[error("cell {0} is already occupied")]
    CellOccupied(Vec2),

    /// Option index outside a choice point's declared count.
    #[error("option {option} out of range for a choice with {count} options")]
    OptionOutOfRange { option: usize, count: usize },

    /// Command-line slot outside 1-6.
    #[error("slot {0} is outside the command line (slots are 1-6)")]
    SlotOutOfRange(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            EngineError::InvalidAngle(45).to_string(),
            "rotation angle 45 is not a right-angle multiple in [-360, 360]"
        );
        assert_eq!(
            EngineError::CellOccupied(Vec2::new(2, 3)).to_string(),
            "cell (2, 3) is already occupied"
        );
        assert_eq!(
            EngineError::OptionOutOfRange { option: 5, count: 3 }.to_string(),
            "option 5 out of range for a choice with 3 options"
        );
    }
}
