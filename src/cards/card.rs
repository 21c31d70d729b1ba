//! The card roster.

use serde::{Deserialize, Serialize};

/// Card color, the stacking key: a card slotted onto a same-color card
/// stacks levels instead of overwriting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Blue,
    Red,
    Green,
    Yellow,
}

/// One of the twelve command cards, or the `Empty` filler occupying an
/// unused slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Card {
    /// Forward move, tow-capable.
    Gore,
    /// Line strike down the facing: hits up to `level` minions, stopped
    /// by walls, friendlies, and the board edge.
    Sawblade,
    /// Radius-1 sweep: strike any `level` adjacent minions, then turn.
    Reaper,
    /// Forward move, then a burst on the two flanking squares.
    Charge,
    /// Fixed forward blast widening with level.
    Firecone,
    /// Rotate in place.
    Afterburner,
    /// Rotate in place.
    Gyroscope,
    /// Pick left, forward, or right; move `level` steps that way.
    Tristep,
    /// Long-range strike on one scanned minion.
    Longshot,
    /// Damage the diagonal rings, then turn.
    Nova,
    /// Forward move of `level` up to `2 * level` steps, mover's pick.
    Overdrive,
    /// Opening strike ahead, then a diagonal chain of hits.
    Arclight,
    /// Unused slot.
    Empty,
}

impl Card {
    /// The card's color; `Empty` has none.
    #[must_use]
    pub fn color(self) -> Option<Color> {
        match self {
            Card::Gore | Card::Sawblade | Card::Reaper => Some(Color::Blue),
            Card::Charge | Card::Firecone | Card::Afterburner => Some(Color::Red),
            Card::Gyroscope | Card::Tristep | Card::Longshot => Some(Color::Green),
            Card::Nova | Card::Overdrive | Card::Arclight => Some(Color::Yellow),
            Card::Empty => None,
        }
    }

    /// Display name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Card::Gore => "Gore",
            Card::Sawblade => "Sawblade",
            Card::Reaper => "Reaper",
            Card::Charge => "Charge",
            Card::Firecone => "Firecone",
            Card::Afterburner => "Afterburner",
            Card::Gyroscope => "Gyroscope",
            Card::Tristep => "Tristep",
            Card::Longshot => "Longshot",
            Card::Nova => "Nova",
            Card::Overdrive => "Overdrive",
            Card::Arclight => "Arclight",
            Card::Empty => "Empty",
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colors() {
        assert_eq!(Card::Gore.color(), Some(Color::Blue));
        assert_eq!(Card::Afterburner.color(), Some(Color::Red));
        assert_eq!(Card::Longshot.color(), Some(Color::Green));
        assert_eq!(Card::Arclight.color(), Some(Color::Yellow));
        assert_eq!(Card::Empty.color(), None);
    }

    #[test]
    fn test_serde_round_trip() {
        let json = serde_json::to_string(&Card::Tristep).unwrap();
        let back: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Card::Tristep);
    }
}
