//! Rollout policies used once selection/expansion reach a non-terminal
//! leaf. All three terminate at a terminal scratch state and return its
//! winner id (0 only means "no winner", which never happens once a
//! playout actually terminates).

use rand::seq::SliceRandom;
use rand::Rng;

use crate::game_state::GameState;
use crate::pruning::MovePruner;

const MAX_PLAYOUT_PLIES: usize = 10_000;

/// Pure uniform-random rollout: shuffle the legal moves, play them one
/// at a time, stop at the first terminal state.
pub fn simulate_uniform_random<R: Rng>(state: &mut GameState, rng: &mut R) -> u8 {
    for _ in 0..MAX_PLAYOUT_PLIES {
        if state.is_terminal() {
            return state.winner_id();
        }
        let mut moves = state.legal_moves();
        moves.shuffle(rng);
        let mv = moves[0];
        state.do_move(mv).expect("shuffled move drawn from legal_moves");
    }
    state.winner_id()
}

/// With probability `epsilon` plays uniformly at random; otherwise plays
/// the move that most shortens the mover's shortest-path distance.
pub fn simulate_epsilon_greedy<R: Rng>(state: &mut GameState, rng: &mut R, epsilon: f64) -> u8 {
    for _ in 0..MAX_PLAYOUT_PLIES {
        if state.is_terminal() {
            return state.winner_id();
        }
        let moves = state.legal_moves();
        let mv = if rng.gen::<f64>() < epsilon {
            *moves.choose(rng).expect("legal_moves is non-empty on a non-terminal state")
        } else {
            best_shortest_path_move(state, &moves)
        };
        state.do_move(mv).expect("move drawn from legal_moves");
    }
    state.winner_id()
}

fn best_shortest_path_move(state: &mut GameState, moves: &[crate::move_types::Move]) -> crate::move_types::Move {
    *moves
        .iter()
        .min_by_key(|&&mv| {
            state
                .estimate_after_move(mv)
                .expect("move drawn from legal_moves")
        })
        .expect("moves is non-empty")
}

/// Applies a `MovePruner` at every ply and picks uniformly among the
/// surviving moves.
pub fn simulate_pruned_random<R: Rng>(
    state: &mut GameState,
    rng: &mut R,
    pruner: &MovePruner,
) -> u8 {
    for _ in 0..MAX_PLAYOUT_PLIES {
        if state.is_terminal() {
            return state.winner_id();
        }
        let moves = state.legal_moves();
        let survivors = pruner.prune(state, &moves);
        let mv = *survivors.choose(rng).expect("pruner never returns an empty set for non-empty input");
        state.do_move(mv).expect("move drawn from pruned legal moves");
    }
    state.winner_id()
}
