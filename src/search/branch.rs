//! Search branches: one independently owned world per line of play.

use serde::{Deserialize, Serialize};

use crate::actions::{entry_point, ChoicePoint};
use crate::actor::ActorId;
use crate::board::Board;
use crate::cards::CommandLine;

/// The deployed unit's search-side state: its board handle, its command
/// line, the stack of pending decisions, and the decision trail taken so
/// far.
///
/// The trail is an `im::Vector` so that cloning a branch deep in a run
/// shares the already-written log in O(1).
#[derive(Clone, Debug)]
pub struct UnitState {
    pub actor: ActorId,
    pub name: String,
    pub command_line: CommandLine,
    pub choices: Vec<ChoicePoint>,
    pub trail: im::Vector<String>,
}

impl UnitState {
    /// Record one resolved decision.
    pub fn log(&mut self, entry: String) {
        self.trail.push_back(entry);
    }
}

/// One branch of the search: a board and the unit acting on it, cloned
/// wholesale whenever a decision forks.
#[derive(Clone, Debug)]
pub struct Branch {
    pub board: Board,
    pub unit: UnitState,
}

impl Branch {
    #[must_use]
    pub fn new(board: Board, actor: ActorId, name: impl Into<String>, line: CommandLine) -> Self {
        Self {
            board,
            unit: UnitState {
                actor,
                name: name.into(),
                command_line: line,
                choices: Vec::new(),
                trail: im::Vector::new(),
            },
        }
    }

    /// Queue the whole command line: slot 6 is pushed first so slot 1
    /// pops first. Empty slots contribute nothing.
    pub fn load_command_line(&mut self) {
        for slot in self.unit.command_line.slots().iter().rev() {
            if let Some(point) = entry_point(slot.card, slot.level) {
                self.unit.choices.push(point);
            }
        }
    }
}

/// A decision sequence that cleared the board, reported by `Search::run`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinningLine {
    pub unit: String,
    pub command_line: CommandLine,
    pub decisions: Vec<String>,
}
