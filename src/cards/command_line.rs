//! The six-slot command line.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::error::EngineError;

/// Number of slots in a command line.
pub const LINE_LEN: usize = 6;

/// Maximum stacked card level.
pub const MAX_LEVEL: u8 = 3;

/// A card at a power level. Level is meaningless for `Empty` slots and
/// held at 0 there.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub card: Card,
    pub level: u8,
}

impl Slot {
    pub const EMPTY: Slot = Slot { card: Card::Empty, level: 0 };
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.card == Card::Empty {
            f.write_str("-")
        } else {
            write!(f, "{}[{}]", self.card, self.level)
        }
    }
}

/// The fixed six slots a unit executes in order, slot 1 first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandLine {
    slots: [Slot; LINE_LEN],
}

impl Default for CommandLine {
    fn default() -> Self {
        Self::empty()
    }
}

impl CommandLine {
    /// A line of six empty slots.
    #[must_use]
    pub fn empty() -> Self {
        Self { slots: [Slot::EMPTY; LINE_LEN] }
    }

    /// Build a line from up to six (card, level) pairs, filling from
    /// slot 1; the remainder stays empty. Pairs beyond six are dropped.
    #[must_use]
    pub fn from_cards(cards: &[(Card, u8)]) -> Self {
        let mut line = Self::empty();
        for (slot, &(card, level)) in cards.iter().take(LINE_LEN).enumerate() {
            line.slots[slot] = Slot { card, level: level.min(MAX_LEVEL) };
        }
        line
    }

    /// Slot a card, 1-based. A card landing on a same-color card stacks
    /// levels (capped at 3) and replaces the card face; any other landing
    /// overwrites the slot outright.
    pub fn assign(&mut self, slot: usize, card: Card, level: u8) -> Result<(), EngineError> {
        if !(1..=LINE_LEN).contains(&slot) {
            return Err(EngineError::SlotOutOfRange(slot));
        }
        let idx = slot - 1;
        let current = self.slots[idx];
        let stacked = match (current.card.color(), card.color()) {
            (Some(a), Some(b)) if a == b => current.level.saturating_add(level).min(MAX_LEVEL),
            _ => level.min(MAX_LEVEL),
        };
        self.slots[idx] = if card == Card::Empty {
            Slot::EMPTY
        } else {
            Slot { card, level: stacked }
        };
        Ok(())
    }

    /// All six slots, slot 1 first.
    #[must_use]
    pub fn slots(&self) -> &[Slot; LINE_LEN] {
        &self.slots
    }

    /// Read one slot, 1-based.
    pub fn get(&self, slot: usize) -> Result<Slot, EngineError> {
        if !(1..=LINE_LEN).contains(&slot) {
            return Err(EngineError::SlotOutOfRange(slot));
        }
        Ok(self.slots[slot - 1])
    }
}

impl std::fmt::Display for CommandLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, slot) in self.slots.iter().enumerate() {
            if i > 0 {
                f.write_str(" / ")?;
            }
            write!(f, "{slot}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cards_pads_with_empty() {
        let line = CommandLine::from_cards(&[(Card::Gore, 1), (Card::Nova, 2)]);

        assert_eq!(line.get(1).unwrap(), Slot { card: Card::Gore, level: 1 });
        assert_eq!(line.get(2).unwrap(), Slot { card: Card::Nova, level: 2 });
        assert_eq!(line.get(3).unwrap(), Slot::EMPTY);
        assert_eq!(line.get(6).unwrap(), Slot::EMPTY);
    }

    #[test]
    fn test_assign_same_color_stacks() {
        let mut line = CommandLine::empty();
        line.assign(2, Card::Gore, 1).unwrap();
        line.assign(2, Card::Sawblade, 1).unwrap();

        // Blue on blue: level stacks, face is the newcomer.
        assert_eq!(line.get(2).unwrap(), Slot { card: Card::Sawblade, level: 2 });
    }

    #[test]
    fn test_assign_stacking_caps_at_three() {
        let mut line = CommandLine::empty();
        line.assign(1, Card::Charge, 2).unwrap();
        line.assign(1, Card::Charge, 3).unwrap();

        assert_eq!(line.get(1).unwrap().level, 3);
    }

    #[test]
    fn test_assign_other_color_overwrites() {
        let mut line = CommandLine::empty();
        line.assign(4, Card::Charge, 3).unwrap();
        line.assign(4, Card::Tristep, 1).unwrap();

        assert_eq!(line.get(4).unwrap(), Slot { card: Card::Tristep, level: 1 });
    }

    #[test]
    fn test_assign_onto_empty_does_not_stack() {
        let mut line = CommandLine::empty();
        line.assign(1, Card::Gore, 2).unwrap();

        assert_eq!(line.get(1).unwrap(), Slot { card: Card::Gore, level: 2 });
    }

    #[test]
    fn test_slot_bounds() {
        let mut line = CommandLine::empty();

        assert_eq!(line.assign(0, Card::Gore, 1), Err(EngineError::SlotOutOfRange(0)));
        assert_eq!(line.assign(7, Card::Gore, 1), Err(EngineError::SlotOutOfRange(7)));
        assert_eq!(line.get(7).unwrap_err(), EngineError::SlotOutOfRange(7));
    }

    #[test]
    fn test_display() {
        let line = CommandLine::from_cards(&[(Card::Charge, 2), (Card::Tristep, 1)]);
        assert_eq!(line.to_string(), "Charge[2] / Tristep[1] / - / - / - / -");
    }

    #[test]
    fn test_serde_round_trip() {
        let line = CommandLine::from_cards(&[(Card::Arclight, 3)]);
        let json = serde_json::to_string(&line).unwrap();
        let back: CommandLine = serde_json::from_str(&json).unwrap();
        assert_eq!(back, line);
    }
}
