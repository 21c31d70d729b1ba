//! Card-to-choice translation.

use crate::actions::{ChoiceKind, ChoicePoint};
use crate::cards::Card;

/// The opening choice point of a card played at `level`. `Empty` slots
/// resolve to nothing.
///
/// Cards whose first decision depends on board state (scans, movement)
/// open with a forced point that performs the scan at resolution time,
/// so the option count reflects the board as it stands when the card
/// actually fires.
#[must_use]
pub fn entry_point(card: Card, level: u8) -> Option<ChoicePoint> {
    let point = match card {
        Card::Gore => ChoicePoint::forced(ChoiceKind::Gore { level }),
        Card::Sawblade => ChoicePoint::forced(ChoiceKind::Sawblade { level }),
        Card::Reaper => ChoicePoint::forced(ChoiceKind::ReaperScan { level }),
        Card::Charge => ChoicePoint::forced(ChoiceKind::Charge { level }),
        Card::Firecone => ChoicePoint::forced(ChoiceKind::Firecone { level }),
        Card::Afterburner | Card::Gyroscope => {
            ChoicePoint { options: level as usize + 1, kind: ChoiceKind::Pivot }
        }
        Card::Tristep => ChoicePoint { options: 3, kind: ChoiceKind::Tristep { level } },
        Card::Longshot => ChoicePoint::forced(ChoiceKind::LongshotScan),
        Card::Nova => ChoicePoint { options: level as usize + 1, kind: ChoiceKind::Nova { level } },
        Card::Overdrive => {
            ChoicePoint { options: level as usize + 1, kind: ChoiceKind::Overdrive { level } }
        }
        Card::Arclight => ChoicePoint { options: 3, kind: ChoiceKind::ArcOpen { level } },
        Card::Empty => return None,
    };
    Some(point)
}
