use super::Heuristic;
use crate::game_state::GameState;
use crate::move_types::Move;

/// Fraction of `mv`'s in-bounds neighbors already held by the side to move.
pub struct Connectivity;

impl Heuristic for Connectivity {
    fn score(&self, state: &GameState, mv: Move) -> f64 {
        let neighbors = state.board.neighbors(mv.row, mv.col);
        if neighbors.is_empty() {
            return 0.0;
        }
        let friendly_stone = state.to_move.stone();
        let friendly = neighbors
            .iter()
            .filter(|&&(r, c)| state.board.cell(r, c) == friendly_stone)
            .count();
        friendly as f64 / neighbors.len() as f64
    }
}
