use super::Heuristic;
use crate::board::shortest_path_distance;
use crate::game_state::GameState;
use crate::move_types::Move;
use crate::rules::valid_move;

/// Shortens-my-path-more-than-yours heuristic: `tanh(before − after)`
/// where `before`/`after` are each `sp(mover) − sp(opponent)` evaluated
/// on a disposable clone of the board, so the caller's `state` is never
/// touched regardless of outcome.
pub struct ShortestPath;

impl Heuristic for ShortestPath {
    fn score(&self, state: &GameState, mv: Move) -> f64 {
        if !valid_move(&state.board, mv) {
            return 0.0;
        }

        let mut probe = state.board.clone();
        if probe.is_terminal() {
            return 0.0;
        }

        let mover = state.to_move.stone();
        let opponent = state.to_move.other().stone();

        let before =
            shortest_path_distance(&probe, mover) as f64 - shortest_path_distance(&probe, opponent) as f64;

        if probe.place_stone(mv.row, mv.col, mover).is_err() {
            return 0.0;
        }

        let after =
            shortest_path_distance(&probe, mover) as f64 - shortest_path_distance(&probe, opponent) as f64;

        if before == after {
            return 0.0;
        }

        (before - after).tanh()
    }
}
