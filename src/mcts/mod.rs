//! Classical Monte Carlo Tree Search: Selection -> Expansion -> Simulation
//! -> Backpropagation, iterated for a configured budget, built around
//! Hex's plain win/loss outcome.

pub mod expansion;
pub mod node;
pub mod selection;
pub mod simulation;

use rand::Rng;

use crate::config::MctsConfig;
use crate::game_state::GameState;
use crate::heuristics::{Heuristic, LinearCombination};
use crate::move_types::Move;
use crate::pruning::MovePruner;

use expansion::{expand, ExpansionConfig};
use node::{backpropagate_classical, Node, NodeRef};
use selection::select;
use simulation::{simulate_epsilon_greedy, simulate_pruned_random, simulate_uniform_random};

/// Which rollout policy the driver falls back on once a playout reaches
/// a non-terminal leaf. The unbiased config (§6) runs uniform random;
/// any nonzero heuristic weight switches to the epsilon-greedy policy so
/// the same heuristic that biases expansion also biases rollouts.
enum RolloutPolicy {
    Uniform,
    EpsilonGreedy { epsilon: f64 },
}

const ROLLOUT_EPSILON: f64 = 0.1;

/// Runs `config.iterations` simulations from `root_state` and returns the
/// tree so callers can inspect visit counts, extract the best move, or
/// assert invariants in tests.
pub fn search_tree(root_state: &GameState, config: &MctsConfig) -> NodeRef {
    let root = Node::new_root();
    let mut rng = rand::thread_rng();

    let linear_combination = if config.is_unbiased() {
        None
    } else {
        Some(LinearCombination::new(
            config.centrality_weight,
            config.connectivity_weight,
            config.shortest_path_weight,
        ))
    };

    let rollout_policy = if config.is_unbiased() {
        RolloutPolicy::Uniform
    } else {
        RolloutPolicy::EpsilonGreedy {
            epsilon: ROLLOUT_EPSILON,
        }
    };

    for _ in 0..config.iterations {
        run_one_iteration(
            &root,
            root_state,
            config,
            linear_combination.as_ref(),
            &rollout_policy,
            &mut rng,
        );
    }

    root
}

fn run_one_iteration<R: Rng>(
    root: &NodeRef,
    root_state: &GameState,
    config: &MctsConfig,
    heuristic: Option<&LinearCombination>,
    rollout_policy: &RolloutPolicy,
    rng: &mut R,
) {
    let mut scratch = root_state.copy();

    let leaf = select(root, &mut scratch, config.exploration_constant);

    if scratch.is_terminal() {
        let winner = scratch.winner_id();
        backpropagate_classical(leaf, winner);
        return;
    }

    let expansion_config = match heuristic {
        Some(h) => ExpansionConfig {
            heuristic: Some(h as &dyn Heuristic),
            pruner: Some(MovePruner::new(config.threshold, 1, h as &dyn Heuristic)),
            bias_scale: config.bias_scale,
        },
        None => ExpansionConfig::unbiased(),
    };

    let expanded = expand(&leaf, &mut scratch, &expansion_config, rng);
    let backup_target = expanded.unwrap_or_else(|| leaf.clone());

    let winner = if scratch.is_terminal() {
        scratch.winner_id()
    } else {
        match rollout_policy {
            RolloutPolicy::Uniform => simulate_uniform_random(&mut scratch, rng),
            RolloutPolicy::EpsilonGreedy { epsilon } => {
                simulate_epsilon_greedy(&mut scratch, rng, *epsilon)
            }
        }
    };

    backpropagate_classical(backup_target, winner);
}

/// The root child with the greatest visit count, ties broken by
/// insertion order (first child iterated wins a tie).
pub fn best_child_move(root: &NodeRef) -> Option<Move> {
    let mut best: Option<(u32, Move)> = None;
    for child in &root.borrow().children {
        let child = child.borrow();
        if let Some(mv) = child.mv {
            if best.map_or(true, |(best_visits, _)| child.visits > best_visits) {
                best = Some((child.visits, mv));
            }
        }
    }
    best.map(|(_, mv)| mv)
}

/// Runs the full search and returns the most-visited root child's move.
pub fn search(root_state: &GameState, config: &MctsConfig) -> Option<Move> {
    let root = search_tree(root_state, config);
    best_child_move(&root)
}

/// Exposed for simulation-policy tests that need a standalone pruned
/// rollout without running a full search.
pub fn simulate_with_pruner<R: Rng>(state: &mut GameState, rng: &mut R, pruner: &MovePruner) -> u8 {
    simulate_pruned_random(state, rng, pruner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_types::Player;

    #[test]
    fn search_returns_a_move_when_legal_moves_exist() {
        let state = GameState::new(3, Player::Red).unwrap();
        let config = MctsConfig {
            iterations: 50,
            ..MctsConfig::default()
        };
        assert!(search(&state, &config).is_some());
    }

    #[test]
    fn total_root_child_visits_do_not_exceed_iterations() {
        let state = GameState::new(3, Player::Red).unwrap();
        let config = MctsConfig {
            iterations: 100,
            ..MctsConfig::default()
        };
        let root = search_tree(&state, &config);
        let total: u32 = root.borrow().children.iter().map(|c| c.borrow().visits).sum();
        assert!(total <= 100);
        assert!(total > 0);
    }

    #[test]
    fn biased_search_keeps_wins_within_visits_everywhere() {
        let state = GameState::new(3, Player::Red).unwrap();
        let config = MctsConfig {
            iterations: 80,
            centrality_weight: 1.0,
            connectivity_weight: 1.0,
            shortest_path_weight: 1.0,
            ..MctsConfig::default()
        };
        let root = search_tree(&state, &config);
        fn check(node: &NodeRef) {
            let n = node.borrow();
            assert!(n.wins <= n.visits as f64 + 1e-9);
            assert!(n.wins >= -1e-9);
            for child in &n.children {
                check(child);
            }
        }
        check(&root);
    }
}
