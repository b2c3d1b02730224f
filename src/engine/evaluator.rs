use log::{debug, trace};

use crate::engine::definitions::{
    Board, BoardError, Player, Seeds, Sides, Stores, StrategyKind, Suggestion, Variant,
};

/// Holes per row the capture estimate assumes.
pub const ROW_LENGTH: usize = 6;
pub const CAPTURE_BONUS: i64 = 10;
pub const DISRUPTION_BONUS: i64 = 2;

/// Single-ply move picker, answers `None` when the row has no seeds.
pub trait Strategy {
    fn kind(&self) -> StrategyKind;
    fn suggest(&self, sides: &Sides<'_>) -> Option<usize>;
}

/// Picks the fullest hole.
pub struct SimpleStrategy;

/// Picks the hole with the best [`score_hole`].
pub struct AdvancedStrategy;

impl Strategy for SimpleStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Simple
    }

    fn suggest(&self, sides: &Sides<'_>) -> Option<usize> {
        first_max_by_key(sides.playable(), |(_, seeds)| i64::from(*seeds))
    }
}

impl Strategy for AdvancedStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Advanced
    }

    fn suggest(&self, sides: &Sides<'_>) -> Option<usize> {
        first_max_by_key(sides.playable(), |&(hole, seeds)| {
            let score = score_hole(sides, hole, seeds);
            trace!("hole {} with {} seeds scores {}", hole, seeds, score);
            score
        })
    }
}

/// Score of sowing `hole` holding `seeds`.
///
/// The capture bonus does not sow anything: a hole earns it as soon as its
/// seeds could walk past the end of a six-hole row. The disruption bonus is
/// earned when the mirrored opponent hole is not empty.
pub fn score_hole(sides: &Sides<'_>, hole: usize, seeds: Seeds) -> i64 {
    let mut score = i64::from(seeds);
    // TODO: replace with a real single-ply sowing simulation per variant
    if seeds as usize >= ROW_LENGTH.saturating_sub(hole) {
        score += CAPTURE_BONUS;
    }
    if sides.facing(hole) > 0 {
        score += DISRUPTION_BONUS;
    }
    score
}

/// Index of the first candidate reaching the maximal key.
fn first_max_by_key<I, F>(candidates: I, mut key: F) -> Option<usize>
where
    I: Iterator<Item = (usize, Seeds)>,
    F: FnMut(&(usize, Seeds)) -> i64,
{
    let mut best: Option<(usize, i64)> = None;
    for candidate in candidates {
        let score = key(&candidate);
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((candidate.0, score)),
        }
    }
    best.map(|(hole, _)| hole)
}

/// Runs the advanced strategy, falling back to the simple one.
///
/// `Ok(None)` means the player's row is empty. An error is only returned when
/// the board lacks a row the variant needs.
pub fn suggest_move(
    board: &Board,
    player: Player,
    variant: Variant,
    _stores: Stores,
) -> Result<Option<Suggestion>, BoardError> {
    let sides = board.sides(player, variant)?;
    let strategies: [&dyn Strategy; 2] = [&AdvancedStrategy, &SimpleStrategy];
    for strategy in strategies {
        if let Some(hole) = strategy.suggest(&sides) {
            debug!(
                "{} strategy picked hole {} for player {} ({})",
                strategy.kind(),
                hole,
                player.index(),
                variant
            );
            return Ok(Some(Suggestion {
                hole,
                seeds: sides.own[hole],
                strategy: strategy.kind(),
            }));
        }
        debug!("{} strategy found no move", strategy.kind());
    }
    Ok(None)
}
