//! Choice resolution: the rules of every card, one option at a time.
//!
//! `apply_choice` performs the board effects of one resolved option and
//! pushes whatever follow-up decisions the card still owes. The search
//! engine is the only caller; it hands over a branch it exclusively owns,
//! so resolution mutates freely.

use crate::actions::choice::{ChoiceKind, ChoicePoint, Squares};
use crate::actor::Faction;
use crate::board::{can_advance, deal_damage, deal_damage_all, scan, step, Board};
use crate::error::EngineError;
use crate::geometry::{Turn, Vec2};
use crate::search::{Branch, RuleConfig};

/// Resolve one option of a choice point against a branch.
///
/// The option index must be below the point's declared count; anything
/// else is a driver bug surfaced as `EngineError::OptionOutOfRange`.
pub fn apply_choice(
    branch: &mut Branch,
    point: &ChoicePoint,
    option: usize,
    rules: &RuleConfig,
) -> Result<(), EngineError> {
    if option >= point.options {
        return Err(EngineError::OptionOutOfRange { option, count: point.options });
    }
    let actor = branch.unit.actor;
    let position = branch.board.actor(actor).position;
    let orientation = branch.board.actor(actor).orientation;

    match &point.kind {
        ChoiceKind::BeginAdvance { dir, remaining } => {
            begin_advance(branch, *dir, *remaining);
        }
        ChoiceKind::AdvanceStep { dir, remaining, tow_candidates } => {
            step(&mut branch.board, actor, *dir);
            if option == 0 {
                push_advance(branch, *dir, remaining - 1);
            } else {
                tow(branch, tow_candidates[option - 1], *dir);
                push_advance(branch, *dir, remaining - 2);
            }
        }
        ChoiceKind::Gore { level } => {
            push_advance(branch, orientation, u32::from(*level));
        }
        ChoiceKind::Charge { level } => {
            // Burst fires after the move: push it below the advance.
            branch.unit.choices.push(ChoicePoint::forced(ChoiceKind::ChargeBurst));
            push_advance(branch, orientation, u32::from(*level));
        }
        ChoiceKind::ChargeBurst => {
            deal_damage(&mut branch.board, Faction::Mechs, position + orientation.turned(Turn::Left));
            deal_damage(&mut branch.board, Faction::Mechs, position + orientation.turned(Turn::Right));
        }
        ChoiceKind::Firecone { level } => {
            let targets = firecone_targets(position, orientation, *level);
            deal_damage_all(&mut branch.board, Faction::Mechs, &targets);
        }
        ChoiceKind::Sawblade { level } => {
            let targets = sawblade_targets(&branch.board, position, orientation, *level);
            deal_damage_all(&mut branch.board, Faction::Mechs, &targets);
        }
        ChoiceKind::Pivot => {
            let turn = Turn::OPTIONS[option];
            branch.board.actor_mut(actor).orientation = orientation.turned(turn);
            branch.unit.log(format!("pivot: {}", turn.label()));
        }
        ChoiceKind::Tristep { level } => {
            let (dir, label) = match option {
                0 => (orientation.turned(Turn::Left), "left"),
                1 => (orientation, "forward"),
                _ => (orientation.turned(Turn::Right), "right"),
            };
            branch.unit.log(format!("Tristep: {label}"));
            push_advance(branch, dir, u32::from(*level));
        }
        ChoiceKind::Overdrive { level } => {
            let steps = u32::from(*level) + option as u32;
            let noun = if steps == 1 { "step" } else { "steps" };
            branch.unit.log(format!("Overdrive: {steps} {noun}"));
            push_advance(branch, orientation, steps);
        }
        ChoiceKind::Nova { level } => {
            for ring in 1..=i32::from(*level) {
                for sx in [-ring, ring] {
                    for sy in [-ring, ring] {
                        deal_damage(&mut branch.board, Faction::Mechs, position + Vec2::new(sx, sy));
                    }
                }
            }
            let turn = Turn::OPTIONS[option];
            branch.board.actor_mut(actor).orientation = orientation.turned(turn);
            branch.unit.log(format!("Nova: {}", turn.label()));
        }
        ChoiceKind::ReaperScan { level } => {
            let found = scan(&branch.board, position, 1, Faction::Minions, None);
            let combos = strike_combinations(&found, usize::from(*level));
            let options = combos.len() * Turn::OPTIONS.len();
            branch.unit.choices.push(ChoicePoint { options, kind: ChoiceKind::ReaperStrike { combos } });
        }
        ChoiceKind::ReaperStrike { combos } => {
            let combo = &combos[option / Turn::OPTIONS.len()];
            let turn = Turn::OPTIONS[option % Turn::OPTIONS.len()];
            deal_damage_all(&mut branch.board, Faction::Mechs, combo);
            branch.board.actor_mut(actor).orientation = orientation.turned(turn);
            branch.unit.log(format!("Reaper: strike {}, {}", squares_label(combo), turn.label()));
        }
        ChoiceKind::LongshotScan => {
            let targets: Squares =
                scan(&branch.board, position, rules.aim_radius, Faction::Minions, None)
                    .into_iter()
                    .collect();
            let options = targets.len().max(1);
            branch.unit.choices.push(ChoicePoint { options, kind: ChoiceKind::LongshotStrike { targets } });
        }
        ChoiceKind::LongshotStrike { targets } => {
            if let Some(&target) = targets.get(option) {
                deal_damage(&mut branch.board, Faction::Mechs, target);
                branch.unit.log(format!("Longshot: strike {target}"));
            }
        }
        ChoiceKind::ArcOpen { level } => {
            let ahead = position + orientation;
            let opening = match option {
                0 => ahead,
                1 => ahead + orientation.turned(Turn::Right),
                _ => ahead + orientation.turned(Turn::Left),
            };
            branch.unit.log(format!("Arclight: open {opening}"));
            if !branch.board.in_bounds(opening) || !is_minion_at(&branch.board, opening) {
                return Ok(()); // opening misses, the whole chain fizzles
            }
            let struck = Squares::from_slice(&[opening]);
            let candidates = chain_candidates(&branch.board, opening, &struck);
            if candidates.is_empty() {
                deal_damage(&mut branch.board, Faction::Mechs, opening);
            } else {
                let options = candidates.len();
                branch.unit.choices.push(ChoicePoint {
                    options,
                    kind: ChoiceKind::ArcChain { level: *level, struck, candidates },
                });
            }
        }
        ChoiceKind::ArcChain { level, struck, candidates } => {
            let next = candidates[option];
            branch.unit.log(format!("Arclight: chain {next}"));
            let mut struck = struck.clone();
            struck.push(next);
            let cap = rules.chain_hit_factor * u32::from(*level);
            if struck.len() as u32 >= cap {
                deal_damage_all(&mut branch.board, Faction::Mechs, &struck);
                return Ok(());
            }
            let further = chain_candidates(&branch.board, next, &struck);
            if further.is_empty() {
                deal_damage_all(&mut branch.board, Faction::Mechs, &struck);
            } else {
                let options = further.len();
                branch.unit.choices.push(ChoicePoint {
                    options,
                    kind: ChoiceKind::ArcChain { level: *level, struck, candidates: further },
                });
            }
        }
    }
    Ok(())
}

/// Queue the forced-advance continuation, skipped outright at zero steps.
fn push_advance(branch: &mut Branch, dir: Vec2, remaining: u32) {
    if remaining > 0 {
        branch.unit.choices.push(ChoicePoint::forced(ChoiceKind::BeginAdvance { dir, remaining }));
    }
}

/// Resolve one forced-advance tick: stop silently when blocked, scan for
/// tow candidates (only worth offering with two or more steps left, a
/// tow consumes one), and push the step decision.
fn begin_advance(branch: &mut Branch, dir: Vec2, remaining: u32) {
    let position = branch.board.actor(branch.unit.actor).position;
    if !can_advance(&branch.board, position, dir) {
        return;
    }
    let tow_candidates: Squares = if remaining >= 2 {
        scan(&branch.board, position, 1, Faction::Mechs, Some(dir)).into_iter().collect()
    } else {
        Squares::new()
    };
    let options = tow_candidates.len() + 1;
    branch.unit.choices.push(ChoicePoint {
        options,
        kind: ChoiceKind::AdvanceStep { dir, remaining, tow_candidates },
    });
}

/// Drag a towed friendly to the cell directly behind the mover. If a
/// hazard slide carried the mover clear off that cell's neighborhood and
/// something else holds it, the tow fizzles.
fn tow(branch: &mut Branch, from: Vec2, dir: Vec2) {
    let behind = branch.board.actor(branch.unit.actor).position - dir;
    branch.unit.log(format!("tow {from}"));
    let Some(towed) = branch.board.occupant(from) else {
        return;
    };
    if branch.board.in_bounds(behind) && branch.board.occupant(behind).is_none() {
        branch.board.relocate(towed, behind);
    }
}

fn is_minion_at(board: &Board, square: Vec2) -> bool {
    board.actor_at(square).is_some_and(|a| a.faction == Faction::Minions)
}

/// Diagonal neighbors of `square` holding a minion not already struck.
fn chain_candidates(board: &Board, square: Vec2, struck: &Squares) -> Squares {
    let mut out = Squares::new();
    for sx in [-1, 1] {
        for sy in [-1, 1] {
            let c = square + Vec2::new(sx, sy);
            if board.in_bounds(c) && is_minion_at(board, c) && !struck.contains(&c) {
                out.push(c);
            }
        }
    }
    out
}

/// All size-`k` combinations of the scanned squares, in scan order. With
/// fewer than `k` squares available the single all-of-them combination
/// (possibly empty) is offered instead.
fn strike_combinations(found: &[Vec2], k: usize) -> Vec<Squares> {
    if found.len() < k {
        return vec![found.iter().copied().collect()];
    }
    let mut combos = Vec::new();
    let mut indices: Vec<usize> = (0..k).collect();
    loop {
        combos.push(indices.iter().map(|&i| found[i]).collect());
        // Advance to the next lexicographic index combination.
        let mut i = k;
        loop {
            if i == 0 {
                return combos;
            }
            i -= 1;
            if indices[i] != i + found.len() - k {
                break;
            }
        }
        indices[i] += 1;
        for j in i + 1..k {
            indices[j] = indices[j - 1] + 1;
        }
    }
}

fn sawblade_targets(board: &Board, position: Vec2, orientation: Vec2, level: u8) -> Squares {
    let mut targets = Squares::new();
    let mut ptr = position + orientation;
    let mut left = u32::from(level);
    while board.in_bounds(ptr) && left > 0 {
        match board.actor_at(ptr) {
            Some(actor) if actor.faction == Faction::Minions => {
                targets.push(ptr);
                left -= 1;
            }
            Some(_) => break, // walls and friendlies stop the blade
            None => {}
        }
        ptr += orientation;
    }
    targets
}

fn firecone_targets(position: Vec2, orientation: Vec2, level: u8) -> Squares {
    let mut targets = Squares::new();
    let second = position + orientation * 2;
    targets.push(position + orientation);
    targets.push(second);
    if level >= 2 {
        targets.push(second + orientation.turned(Turn::Left));
        targets.push(second + orientation.turned(Turn::Right));
        if level >= 3 {
            let third = second + orientation;
            targets.push(third);
            targets.push(third + orientation.turned(Turn::Left));
            targets.push(third + orientation.turned(Turn::Right));
        }
    }
    targets
}

fn squares_label(squares: &Squares) -> String {
    if squares.is_empty() {
        return "nothing".to_string();
    }
    squares.iter().map(ToString::to_string).collect::<Vec<_>>().join("+")
}
