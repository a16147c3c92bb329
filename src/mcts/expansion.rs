//! Expansion: turns one untried move at a selected leaf into a new
//! child node, optionally biased/filtered by a heuristic and pruner.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::game_state::GameState;
use crate::heuristics::Heuristic;
use crate::mcts::node::{Node, NodeRef};
use crate::pruning::MovePruner;

pub struct ExpansionConfig<'h> {
    pub heuristic: Option<&'h dyn Heuristic>,
    pub pruner: Option<MovePruner<'h>>,
    pub bias_scale: f64,
}

impl<'h> ExpansionConfig<'h> {
    pub fn unbiased() -> ExpansionConfig<'h> {
        ExpansionConfig {
            heuristic: None,
            pruner: None,
            bias_scale: 0.0,
        }
    }
}

/// Expands `leaf` against `scratch`: picks one legal move not yet
/// represented among `leaf`'s children, creates the child, and applies
/// its move to `scratch`. Returns `None` if every legal move is already
/// a child (the caller should treat `leaf` itself as the backup target).
pub fn expand<R: Rng>(
    leaf: &NodeRef,
    scratch: &mut GameState,
    config: &ExpansionConfig,
    rng: &mut R,
) -> Option<NodeRef> {
    let legal_moves = scratch.legal_moves();

    let candidate_pool = match &config.pruner {
        Some(pruner) => pruner.prune(scratch, &legal_moves),
        None => legal_moves,
    };

    let untried: Vec<_> = candidate_pool
        .into_iter()
        .filter(|&mv| leaf.borrow().find_child_by_move(mv).is_none())
        .collect();

    let mv = *untried.choose(rng)?;

    let heuristic_bias = config
        .heuristic
        .map(|h| config.bias_scale * h.score(scratch, mv))
        .unwrap_or(0.0);

    let player_that_moved = scratch.to_move.id();
    let child = Node::new_child(leaf, mv, player_that_moved, heuristic_bias, 0.0);
    leaf.borrow_mut().children.push(child.clone());

    scratch.do_move(mv).expect("move drawn from legal_moves");
    Some(child)
}
