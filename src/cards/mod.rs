//! Command cards and the six-slot command line.
//!
//! ## Key Types
//!
//! - `Card` / `Color`: the twelve playable cards plus `Empty`
//! - `Slot`: a card at a power level (1-3)
//! - `CommandLine`: the fixed six slots a unit executes left to right
//!
//! Cards carry no behavior here; `actions::entry_point` translates a slot
//! into its opening choice point.

pub mod card;
pub mod command_line;

pub use card::{Card, Color};
pub use command_line::{CommandLine, Slot, LINE_LEN};
