//! The action layer: choice points, the card catalog, and the resolver.
//!
//! A played card becomes a stack of `ChoicePoint`s on the acting unit.
//! `entry_point` opens the stack for a card; `apply_choice` resolves one
//! option, mutating the branch and pushing follow-ups. The search engine
//! forks a branch per option and drives this layer until the stack runs
//! dry.

pub mod catalog;
pub mod choice;
pub mod resolver;

pub use catalog::entry_point;
pub use choice::{ChoiceKind, ChoicePoint, Squares};
pub use resolver::apply_choice;
