//! Scenario setup: the consumer-facing way to build a puzzle and solve it.
//!
//! A `ScenarioBuilder` lays out the static board (minions, walls, oil,
//! bombs); the built `Scenario` keeps it as a template and stamps out one
//! fresh `Branch` per deployment, so every facing and candidate command
//! line starts from an identical world.

use log::{debug, info};

use crate::board::Board;
use crate::cards::CommandLine;
use crate::error::EngineError;
use crate::geometry::Vec2;
use crate::search::{Branch, Search, WinningLine};

/// Builder-style board layout. Placements that miss the board or land on
/// a held cell are skipped with a debug log, matching how a physical
/// setup would just not place the piece.
#[derive(Debug)]
pub struct ScenarioBuilder {
    board: Board,
}

impl ScenarioBuilder {
    #[must_use]
    pub fn new(width: i32, height: i32) -> Self {
        Self { board: Board::new(width, height) }
    }

    /// True when the square exists and nothing stands on it. Setup never
    /// replaces a placed piece, unlike `Scenario::deploy`.
    fn placeable(&self, position: Vec2, what: &str) -> bool {
        if !self.board.in_bounds(position) {
            debug!("skipping {what} at {position}: off board");
            return false;
        }
        if self.board.occupant(position).is_some() {
            debug!("skipping {what} at {position}: cell taken");
            return false;
        }
        true
    }

    #[must_use]
    pub fn minion_at(mut self, position: Vec2) -> Self {
        if self.placeable(position, "minion") {
            if let Err(err) = self.board.spawn_minion(position) {
                debug!("skipping minion at {position}: {err}");
            }
        }
        self
    }

    #[must_use]
    pub fn wall_at(mut self, position: Vec2, spiked: bool, facing: Vec2) -> Self {
        if self.placeable(position, "wall") {
            if let Err(err) = self.board.spawn_wall(position, spiked, facing) {
                debug!("skipping wall at {position}: {err}");
            }
        }
        self
    }

    #[must_use]
    pub fn bomb_at(mut self, position: Vec2, health: i32) -> Self {
        if self.placeable(position, "bomb") {
            if let Err(err) = self.board.spawn_bomb(position, health) {
                debug!("skipping bomb at {position}: {err}");
            }
        }
        self
    }

    #[must_use]
    pub fn hazard_at(mut self, position: Vec2) -> Self {
        if self.board.in_bounds(position) {
            self.board.set_hazard(position);
        } else {
            debug!("skipping hazard at {position}: off board");
        }
        self
    }

    #[must_use]
    pub fn build(self) -> Scenario {
        Scenario { template: self.board }
    }
}

/// A finished puzzle layout, ready to deploy units onto.
#[derive(Clone, Debug)]
pub struct Scenario {
    template: Board,
}

impl Scenario {
    /// The template board, before any unit deploys.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.template
    }

    /// Clone the template, place the unit, and queue its command line.
    pub fn deploy(
        &self,
        name: &str,
        position: Vec2,
        facing: Vec2,
        line: CommandLine,
    ) -> Result<Branch, EngineError> {
        let mut board = self.template.clone();
        let actor = board.spawn_mech(position, facing)?;
        let mut branch = Branch::new(board, actor, name, line);
        branch.load_command_line();
        Ok(branch)
    }

    /// The driver loop: one exhaustive search per facing and candidate
    /// command line, collecting every winning decision sequence across
    /// all of them. Deployments that fail (the drop square is taken) are
    /// logged and skipped.
    pub fn solve(
        &self,
        search: &mut Search,
        name: &str,
        position: Vec2,
        facings: &[Vec2],
        lines: &[CommandLine],
    ) -> Vec<WinningLine> {
        let mut wins = Vec::new();
        for line in lines {
            for &facing in facings {
                let branch = match self.deploy(name, position, facing, *line) {
                    Ok(branch) => branch,
                    Err(err) => {
                        debug!("skipping deployment of {name} at {position}: {err}");
                        continue;
                    }
                };
                let found = search.run(branch);
                if !found.is_empty() {
                    info!("{} winning line(s) for {line} facing {facing}", found.len());
                }
                wins.extend(found);
            }
        }
        wins
    }
}
