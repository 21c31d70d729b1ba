//! The depth-first decision search.

use std::time::Instant;

use log::{debug, trace, warn};

use crate::actions::apply_choice;
use crate::search::{Branch, SearchConfig, SearchStats, WinningLine};

/// Exhaustive depth-first search over every decision sequence a branch's
/// command line can produce.
///
/// The worklist is a stack, so exploration is depth-first and the number
/// of live branches stays bounded by depth times branching factor. For
/// each popped branch the engine pops one choice point and forks: every
/// option except the first resolves on a fresh clone, the first resolves
/// on the original. A branch whose choice stack runs dry is a terminal;
/// it wins when no minion is left.
#[derive(Debug)]
pub struct Search {
    config: SearchConfig,
    stats: SearchStats,
}

impl Search {
    #[must_use]
    pub fn new(config: SearchConfig) -> Self {
        Self { config, stats: SearchStats::default() }
    }

    /// Statistics of the most recent run.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Run the search to exhaustion (or to the branch budget) and return
    /// every winning decision sequence.
    pub fn run(&mut self, root: Branch) -> Vec<WinningLine> {
        let started = Instant::now();
        self.stats = SearchStats::default();
        let mut wins = Vec::new();
        let mut worklist = vec![root];

        while let Some(mut branch) = worklist.pop() {
            if self.config.max_branches > 0 && self.stats.branches >= self.config.max_branches {
                warn!(
                    "search aborted at branch budget {} with {} branches still queued",
                    self.config.max_branches,
                    worklist.len() + 1
                );
                break;
            }
            self.stats.branches += 1;

            let Some(point) = branch.unit.choices.pop() else {
                self.stats.terminals += 1;
                if branch.board.minion_count() == 0 {
                    debug!(
                        "winning line for {}: {}",
                        branch.unit.name,
                        branch.unit.trail.iter().cloned().collect::<Vec<_>>().join("; ")
                    );
                    self.stats.wins += 1;
                    wins.push(WinningLine {
                        unit: branch.unit.name.clone(),
                        command_line: branch.unit.command_line,
                        decisions: branch.unit.trail.iter().cloned().collect(),
                    });
                }
                continue;
            };

            trace!("expanding {} options at depth {}", point.options, branch.unit.choices.len());
            for option in (1..point.options).rev() {
                let mut fork = branch.clone();
                match apply_choice(&mut fork, &point, option, &self.config.rules) {
                    Ok(()) => worklist.push(fork),
                    Err(err) => {
                        debug!("discarding branch on option {option}: {err}");
                        self.stats.discarded += 1;
                    }
                }
            }
            match apply_choice(&mut branch, &point, 0, &self.config.rules) {
                Ok(()) => worklist.push(branch),
                Err(err) => {
                    debug!("discarding branch on option 0: {err}");
                    self.stats.discarded += 1;
                }
            }
            self.stats.peak_worklist = self.stats.peak_worklist.max(worklist.len());
        }

        self.stats.time_us = started.elapsed().as_micros() as u64;
        wins
    }
}
