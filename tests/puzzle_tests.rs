//! End-to-end puzzle tests on a full 6x6 board.

use grid_tactics::cards::{Card, CommandLine};
use grid_tactics::geometry::Vec2;
use grid_tactics::scenario::{Scenario, ScenarioBuilder};
use grid_tactics::search::{Search, SearchConfig};

/// Six minions, an oil patch in the middle, drop square at (4, 4).
fn oil_patch_puzzle() -> Scenario {
    ScenarioBuilder::new(6, 6)
        .minion_at(Vec2::new(0, 2))
        .minion_at(Vec2::new(1, 2))
        .minion_at(Vec2::new(2, 0))
        .minion_at(Vec2::new(2, 1))
        .minion_at(Vec2::new(2, 4))
        .minion_at(Vec2::new(5, 2))
        .hazard_at(Vec2::new(2, 2))
        .hazard_at(Vec2::new(2, 3))
        .hazard_at(Vec2::new(3, 2))
        .hazard_at(Vec2::new(3, 3))
        .build()
}

fn winning_line() -> CommandLine {
    CommandLine::from_cards(&[
        (Card::Charge, 2),
        (Card::Tristep, 1),
        (Card::Gore, 1),
        (Card::Nova, 1),
        (Card::Overdrive, 1),
        (Card::Tristep, 1),
    ])
}

/// The same cards with Gore and Overdrive swapped; also solvable.
fn transposed_line() -> CommandLine {
    CommandLine::from_cards(&[
        (Card::Charge, 2),
        (Card::Tristep, 1),
        (Card::Overdrive, 1),
        (Card::Nova, 1),
        (Card::Gore, 1),
        (Card::Tristep, 1),
    ])
}

// =============================================================================
// Pinned Solutions
// =============================================================================

#[test]
fn test_puzzle_has_exactly_one_solution_facing_down() {
    let scenario = oil_patch_puzzle();
    let branch = scenario
        .deploy("tristana", Vec2::new(4, 4), Vec2::DOWN, winning_line())
        .unwrap();

    let mut search = Search::new(SearchConfig::default());
    let wins = search.run(branch);

    assert_eq!(wins.len(), 1);
    assert_eq!(
        wins[0].decisions,
        vec![
            "Tristep: right".to_string(),
            "Nova: left".to_string(),
            "Overdrive: 1 step".to_string(),
            "Tristep: left".to_string(),
        ]
    );
    assert_eq!(search.stats().terminals, 36);
    assert_eq!(search.stats().wins, 1);
}

#[test]
fn test_transposed_line_also_solves_it() {
    let scenario = oil_patch_puzzle();
    let branch = scenario
        .deploy("tristana", Vec2::new(4, 4), Vec2::DOWN, transposed_line())
        .unwrap();

    let mut search = Search::new(SearchConfig::default());
    let wins = search.run(branch);

    assert_eq!(wins.len(), 1);
    assert_eq!(search.stats().terminals, 36);
}

#[test]
fn test_other_facings_never_win() {
    let scenario = oil_patch_puzzle();
    let mut search = Search::new(SearchConfig::default());

    for facing in [Vec2::RIGHT, Vec2::LEFT, Vec2::UP] {
        let branch = scenario
            .deploy("tristana", Vec2::new(4, 4), facing, winning_line())
            .unwrap();
        let wins = search.run(branch);
        assert!(wins.is_empty(), "unexpected win facing {facing}");
        assert_eq!(search.stats().terminals, 36);
    }
}

#[test]
fn test_solve_sweeps_facings_and_lines() {
    let scenario = oil_patch_puzzle();
    let mut search = Search::new(SearchConfig::default());

    let facings = [Vec2::RIGHT, Vec2::DOWN, Vec2::LEFT, Vec2::UP];
    let lines = [winning_line(), transposed_line()];
    let wins = scenario.solve(&mut search, "tristana", Vec2::new(4, 4), &facings, &lines);

    // One solution per line, both facing down.
    assert_eq!(wins.len(), 2);
    assert_eq!(wins[0].command_line, winning_line());
    assert_eq!(wins[1].command_line, transposed_line());
}

#[test]
fn test_four_card_line_cannot_win() {
    // Dropping Gore and the trailing Tristep leaves too little reach.
    let scenario = oil_patch_puzzle();
    let short_line = CommandLine::from_cards(&[
        (Card::Charge, 2),
        (Card::Tristep, 1),
        (Card::Overdrive, 1),
        (Card::Nova, 1),
    ]);
    let mut search = Search::new(SearchConfig::default());

    for facing in [Vec2::RIGHT, Vec2::DOWN, Vec2::LEFT, Vec2::UP] {
        let branch = scenario
            .deploy("tristana", Vec2::new(4, 4), facing, short_line)
            .unwrap();
        let wins = search.run(branch);
        assert!(wins.is_empty());
        assert_eq!(search.stats().terminals, 12);
    }
}

// =============================================================================
// Search Mechanics
// =============================================================================

#[test]
fn test_template_survives_solving() {
    let scenario = oil_patch_puzzle();
    let mut search = Search::new(SearchConfig::default());

    scenario.solve(
        &mut search,
        "tristana",
        Vec2::new(4, 4),
        &[Vec2::DOWN],
        &[winning_line()],
    );

    assert_eq!(scenario.board().minion_count(), 6);
    assert!(scenario.board().actor_at(Vec2::new(4, 4)).is_none());
}

#[test]
fn test_branch_budget_cuts_run_short() {
    let scenario = oil_patch_puzzle();
    let branch = scenario
        .deploy("tristana", Vec2::new(4, 4), Vec2::DOWN, winning_line())
        .unwrap();

    let mut search = Search::new(SearchConfig::default().with_max_branches(50));
    search.run(branch);

    assert_eq!(search.stats().branches, 50);
    assert!(search.stats().terminals < 36);
}

#[test]
fn test_stats_reset_between_runs() {
    let scenario = oil_patch_puzzle();
    let mut search = Search::new(SearchConfig::default());

    for _ in 0..2 {
        let branch = scenario
            .deploy("tristana", Vec2::new(4, 4), Vec2::DOWN, winning_line())
            .unwrap();
        search.run(branch);
        assert_eq!(search.stats().terminals, 36);
        assert_eq!(search.stats().wins, 1);
    }
}

// =============================================================================
// Reporting
// =============================================================================

#[test]
fn test_winning_line_serializes() {
    let scenario = oil_patch_puzzle();
    let branch = scenario
        .deploy("tristana", Vec2::new(4, 4), Vec2::DOWN, winning_line())
        .unwrap();

    let mut search = Search::new(SearchConfig::default());
    let wins = search.run(branch);

    let json = serde_json::to_string(&wins).unwrap();
    let back: Vec<grid_tactics::search::WinningLine> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, wins);
    assert_eq!(back[0].unit, "tristana");
}
