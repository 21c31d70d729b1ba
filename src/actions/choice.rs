//! Choice points: pending player decisions as plain data.
//!
//! A card never resolves in one shot. Playing it pushes a `ChoicePoint`
//! onto the unit's choice stack, and resolving an option may push
//! follow-up points (the next movement step, the next chain link). The
//! point carries everything needed to resolve any of its options, no
//! captured closures, so cloning a branch is a plain data copy.

use smallvec::SmallVec;

use crate::geometry::Vec2;

/// Target lists stay tiny (a radius-1 scan tops out at 8 squares).
pub type Squares = SmallVec<[Vec2; 8]>;

/// A pending decision: `options` ways to resolve, dispatched by `kind`.
///
/// `options` is always at least 1; decisions with nothing to decide
/// (no tow candidate, no scan hit) collapse to a single option rather
/// than erroring.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChoicePoint {
    pub options: usize,
    pub kind: ChoiceKind,
}

impl ChoicePoint {
    /// A forced continuation with exactly one way forward.
    #[must_use]
    pub fn forced(kind: ChoiceKind) -> Self {
        Self { options: 1, kind }
    }
}

/// What a choice point decides. Card entry points carry the slot level;
/// continuations carry the state threaded between steps.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChoiceKind {
    // === Movement continuations (shared by every moving card) ===
    /// Start (or continue) a forced advance: scan for tow candidates,
    /// then push the step decision. Forced.
    BeginAdvance { dir: Vec2, remaining: u32 },
    /// Take one step; option 0 is a plain step, option `i > 0` tows the
    /// `i-1`th candidate (costing one extra step).
    AdvanceStep { dir: Vec2, remaining: u32, tow_candidates: Squares },

    // === Card entry points & card-specific continuations ===
    /// Gore: plain tow-capable advance. Forced.
    Gore { level: u8 },
    /// Sawblade: line strike down the facing. Forced.
    Sawblade { level: u8 },
    /// Reaper: scan radius 1 and enumerate strike combinations. Forced.
    ReaperScan { level: u8 },
    /// Reaper: pick a combination and a facing (combination index is
    /// `option / 4`, turn index `option % 4`).
    ReaperStrike { combos: Vec<Squares> },
    /// Charge: queue the flank burst, then advance. Forced.
    Charge { level: u8 },
    /// Charge: burst on the two flanking squares after the move. Forced.
    ChargeBurst,
    /// Firecone: fixed forward blast. Forced.
    Firecone { level: u8 },
    /// Afterburner / Gyroscope / Nova aftermath: turn in place, options
    /// drawn from the head of `Turn::OPTIONS`.
    Pivot,
    /// Tristep: pick left, forward, or right, then advance.
    Tristep { level: u8 },
    /// Longshot: scan for targets. Forced.
    LongshotScan,
    /// Longshot: strike one scanned target (collapses to a no-op when
    /// the scan found nothing).
    LongshotStrike { targets: Squares },
    /// Nova: damage the diagonal rings, then turn (truncated facings).
    Nova { level: u8 },
    /// Overdrive: advance `level + option` steps.
    Overdrive { level: u8 },
    /// Arclight: pick the opening square (ahead, ahead-right, ahead-left).
    ArcOpen { level: u8 },
    /// Arclight: extend the chain to one diagonal candidate; all hits
    /// land when the chain ends.
    ArcChain { level: u8, struck: Squares, candidates: Squares },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forced_has_one_option() {
        let point = ChoicePoint::forced(ChoiceKind::Gore { level: 2 });
        assert_eq!(point.options, 1);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut point = ChoicePoint {
            options: 3,
            kind: ChoiceKind::ArcChain {
                level: 1,
                struck: Squares::from_slice(&[Vec2::new(1, 1)]),
                candidates: Squares::from_slice(&[Vec2::new(2, 2)]),
            },
        };
        let copy = point.clone();
        point.options = 1;
        assert_eq!(copy.options, 3);
    }
}
