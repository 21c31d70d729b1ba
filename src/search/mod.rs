//! Exhaustive decision search for grid-tactics.
//!
//! ## Overview
//!
//! The command line fixes which cards fire and in what order; everything
//! left to decide (facing picks, step-by-step tows, strike targets) shows
//! up as choice points on a branch's stack. This module walks that
//! decision space exhaustively:
//!
//! - **Depth-first worklist**: one stack of `Branch` values, so memory
//!   stays bounded by depth times branching factor
//! - **Clone-per-fork**: every non-default option resolves on an
//!   independently owned clone; no undo machinery
//! - **Complete**: every reachable terminal is visited (no pruning), so
//!   the returned `WinningLine`s are all of them
//!
//! ## Usage
//!
//! ```rust
//! use grid_tactics::board::Board;
//! use grid_tactics::cards::{Card, CommandLine};
//! use grid_tactics::geometry::Vec2;
//! use grid_tactics::search::{Branch, Search, SearchConfig};
//!
//! let mut board = Board::new(6, 6);
//! board.spawn_minion(Vec2::new(2, 3)).unwrap();
//! let mech = board.spawn_mech(Vec2::new(2, 2), Vec2::UP).unwrap();
//!
//! let line = CommandLine::from_cards(&[(Card::Tristep, 1)]);
//! let mut branch = Branch::new(board, mech, "alpha", line);
//! branch.load_command_line();
//!
//! let mut search = Search::new(SearchConfig::default());
//! for win in search.run(branch) {
//!     println!("{}: {:?}", win.unit, win.decisions);
//! }
//! ```

pub mod branch;
pub mod config;
pub mod engine;
pub mod stats;

pub use branch::{Branch, UnitState, WinningLine};
pub use config::{RuleConfig, SearchConfig};
pub use engine::Search;
pub use stats::SearchStats;
