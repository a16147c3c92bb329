//! Top-K-by-score move filter shared by MCTS expansion and simulation.

use crate::game_state::GameState;
use crate::heuristics::Heuristic;
use crate::move_types::Move;

pub struct MovePruner<'h> {
    pub threshold: f64,
    pub min_keep: usize,
    pub heuristic: &'h dyn Heuristic,
}

impl<'h> MovePruner<'h> {
    pub fn new(threshold: f64, min_keep: usize, heuristic: &'h dyn Heuristic) -> MovePruner<'h> {
        MovePruner {
            threshold,
            min_keep: min_keep.max(1),
            heuristic,
        }
    }

    /// Keeps every move scoring within `threshold` of the best, falling
    /// back to the top `min_keep` if that set is too small, and to the
    /// unfiltered list if pruning would somehow empty it out.
    pub fn prune(&self, state: &GameState, legal_moves: &[Move]) -> Vec<Move> {
        if legal_moves.is_empty() {
            return legal_moves.to_vec();
        }

        let mut scored: Vec<(Move, f64)> = legal_moves
            .iter()
            .map(|&mv| (mv, self.heuristic.score(state, mv)))
            .collect();

        let max_score = scored
            .iter()
            .map(|&(_, s)| s)
            .fold(f64::NEG_INFINITY, f64::max);

        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        let mut survivors: Vec<Move> = scored
            .iter()
            .filter(|&&(_, s)| s >= max_score - self.threshold)
            .map(|&(mv, _)| mv)
            .collect();

        if survivors.len() < self.min_keep {
            survivors = scored
                .iter()
                .take(self.min_keep)
                .map(|&(mv, _)| mv)
                .collect();
        }

        if survivors.is_empty() {
            return legal_moves.to_vec();
        }

        survivors
    }
}
