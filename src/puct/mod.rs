//! AlphaZero-style PUCT search: a policy/value predictor replaces the
//! classical driver's heuristics and rollouts. The select/expand/backprop
//! split and the `exploration_value`-style PUCT formula follow
//! `tiltak`'s `search::mcts_core::Tree` (`select`, `apply_dirichlet`),
//! reworked around Hex's undo-capable board instead of per-node board
//! copies.

pub mod dirichlet;
pub mod encoding;

use rand::Rng;

use crate::board::Board;
use crate::error::HexResult;
use crate::mcts::node::{backpropagate_puct, Node, NodeRef};
use crate::move_types::{Move, Player};
use crate::predictor::Predictor;

const DIRICHLET_EPSILON: f64 = 0.25;
const DIRICHLET_ALPHA: f64 = 0.10;

/// Evaluates `board` from `to_move`'s perspective and attaches one child
/// per legal move, with priors read from the predictor's canonical
/// policy output and renormalized over the legal set.
fn expand_and_evaluate(
    node: &NodeRef,
    board: &Board,
    to_move: Player,
    predictor: &dyn Predictor,
) -> HexResult<f64> {
    let n = board.size;
    let output = predictor.predict(encoding::encode(board, to_move))?;

    let legal_moves = board.legal_moves();
    let mut priors: Vec<(Move, f64)> = legal_moves
        .iter()
        .map(|&mv| {
            let idx = encoding::canonical_index(mv, n, to_move);
            let p = output.policy.get(idx).copied().unwrap_or(0.0) as f64;
            (mv, p)
        })
        .collect();

    let sum: f64 = priors.iter().map(|&(_, p)| p).sum();
    if sum > 0.0 {
        for p in priors.iter_mut() {
            p.1 /= sum;
        }
    } else if !priors.is_empty() {
        let uniform = 1.0 / priors.len() as f64;
        for p in priors.iter_mut() {
            p.1 = uniform;
        }
    }

    for (mv, prior) in priors {
        let child = Node::new_child(node, mv, to_move.id(), 0.0, prior);
        node.borrow_mut().children.push(child);
    }

    Ok(output.value)
}

/// Perturbs the root's children's priors once, in place, with symmetric
/// Dirichlet(alpha=0.10) noise at weight epsilon=0.25.
fn apply_root_dirichlet_noise<R: Rng>(root: &NodeRef, rng: &mut R) {
    let k = root.borrow().children.len();
    if k == 0 {
        return;
    }
    let noise = dirichlet::sample_dirichlet(rng, k, DIRICHLET_ALPHA);
    let mut priors: Vec<f64> = root
        .borrow()
        .children
        .iter()
        .map(|c| c.borrow().prior)
        .collect();
    dirichlet::mix_and_renormalize(&mut priors, &noise, DIRICHLET_EPSILON);
    for (child, prior) in root.borrow().children.iter().zip(priors.iter()) {
        child.borrow_mut().prior = *prior;
    }
}

/// Ties broken by insertion order (first child iterated wins a tie).
fn select_child_by_puct(node: &NodeRef, c_puct: f64) -> NodeRef {
    let parent_visits = node.borrow().visits;
    let mut best: Option<(f64, NodeRef)> = None;
    for child in &node.borrow().children {
        let score = child.borrow().puct_value(parent_visits, c_puct);
        if best
            .as_ref()
            .map_or(true, |(best_score, _)| score > *best_score)
        {
            best = Some((score, child.clone()));
        }
    }
    best.map(|(_, c)| c)
        .expect("select_child_by_puct called on a childless node")
}

fn run_one_simulation<R: Rng>(
    root: &NodeRef,
    working: &mut Board,
    root_player: Player,
    c_puct: f64,
    predictor: &dyn Predictor,
    _rng: &mut R,
) -> HexResult<()> {
    let mut current = root.clone();
    let mut to_move = root_player;
    let mut moves_played = 0usize;

    while !current.borrow().children.is_empty() && !working.is_terminal() {
        let next = select_child_by_puct(&current, c_puct);
        let mv = next.borrow().mv.expect("non-root child must carry a move");
        working.place_stone(mv.row, mv.col, to_move.stone())?;
        moves_played += 1;
        to_move = to_move.other();
        current = next;
    }

    let leaf_value = if working.is_terminal() {
        let winner_id = if working.red_wins() {
            Player::Red.id()
        } else {
            Player::Black.id()
        };
        if winner_id == to_move.id() {
            1.0
        } else {
            -1.0
        }
    } else {
        expand_and_evaluate(&current, working, to_move, predictor)?
    };

    backpropagate_puct(current, leaf_value);

    for _ in 0..moves_played {
        working.undo()?;
    }

    Ok(())
}

/// Runs a full PUCT search from `root_board` and returns the populated
/// tree. `training` gates the one-time Dirichlet root noise.
pub fn search<R: Rng>(
    root_board: &Board,
    root_player: Player,
    iterations: u32,
    c_puct: f64,
    training: bool,
    predictor: &dyn Predictor,
    rng: &mut R,
) -> HexResult<NodeRef> {
    let root = Node::new_root();
    root.borrow_mut().player_that_moved = root_player.other().id();

    let mut working = root_board.clone();
    expand_and_evaluate(&root, &working, root_player, predictor)?;

    if training {
        apply_root_dirichlet_noise(&root, rng);
    }

    for _ in 0..iterations {
        run_one_simulation(&root, &mut working, root_player, c_puct, predictor, rng)?;
    }

    Ok(root)
}

/// Temperature-controlled visit-count policy over the full n^2 board
/// (row-major, uncanonicalized — the caller applies any canonicalization
/// needed for display or further network calls).
pub fn extract_policy(root: &NodeRef, temperature: f64, board_size: usize) -> Vec<f32> {
    let n2 = board_size * board_size;
    let mut policy = vec![0.0f32; n2];

    if temperature < 0.01 {
        let mut best: Option<(u32, Move)> = None;
        for child in &root.borrow().children {
            let child = child.borrow();
            if let Some(mv) = child.mv {
                if best.map_or(true, |(best_visits, _)| child.visits > best_visits) {
                    best = Some((child.visits, mv));
                }
            }
        }
        if let Some((_, mv)) = best {
            policy[mv.row as usize * board_size + mv.col as usize] = 1.0;
        }
        return policy;
    }

    let exponent = 1.0 / temperature;
    let weighted: Vec<(Move, f64)> = root
        .borrow()
        .children
        .iter()
        .map(|c| {
            let visits = c.borrow().visits as f64;
            (c.borrow().mv.expect("non-root child must carry a move"), visits.powf(exponent))
        })
        .collect();
    let sum: f64 = weighted.iter().map(|&(_, w)| w).sum();

    for (mv, w) in weighted {
        let idx = mv.row as usize * board_size + mv.col as usize;
        policy[idx] = if sum > 0.0 { (w / sum) as f32 } else { 0.0 };
    }

    policy
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predictor::Output;
    use rand::SeedableRng;

    struct UniformPredictor {
        n_squared: usize,
    }

    impl Predictor for UniformPredictor {
        fn predict(&self, _encoding: Vec<f32>) -> HexResult<Output> {
            Ok(Output {
                policy: vec![1.0 / self.n_squared as f32; self.n_squared],
                value: 0.0,
            })
        }
    }

    #[test]
    fn root_priors_sum_to_one() {
        let board = Board::new(3).unwrap();
        let predictor = UniformPredictor { n_squared: 9 };
        let mut rng = rand::rngs::StdRng::seed_from_u64(1);
        let root = search(&board, Player::Red, 20, 1.4, false, &predictor, &mut rng).unwrap();
        let total: f64 = root.borrow().children.iter().map(|c| c.borrow().prior).sum();
        assert!((total - 1.0).abs() < 1e-6);
    }

    #[test]
    fn dirichlet_noise_still_normalizes_priors() {
        let board = Board::new(3).unwrap();
        let predictor = UniformPredictor { n_squared: 9 };
        let mut rng = rand::rngs::StdRng::seed_from_u64(2);
        let root = search(&board, Player::Red, 20, 1.4, true, &predictor, &mut rng).unwrap();
        let total: f64 = root.borrow().children.iter().map(|c| c.borrow().prior).sum();
        assert!((total - 1.0).abs() < 1e-6);
    }

    #[test]
    fn temperature_zero_policy_is_one_hot() {
        let board = Board::new(3).unwrap();
        let predictor = UniformPredictor { n_squared: 9 };
        let mut rng = rand::rngs::StdRng::seed_from_u64(3);
        let root = search(&board, Player::Red, 30, 1.4, false, &predictor, &mut rng).unwrap();
        let policy = extract_policy(&root, 0.0, 3);
        let nonzero = policy.iter().filter(|&&p| p > 0.0).count();
        assert_eq!(nonzero, 1);
        let total: f32 = policy.iter().sum();
        assert!((total - 1.0).abs() < 1e-6);
    }

    #[test]
    fn temperature_one_policy_matches_visit_distribution() {
        let board = Board::new(3).unwrap();
        let predictor = UniformPredictor { n_squared: 9 };
        let mut rng = rand::rngs::StdRng::seed_from_u64(4);
        let root = search(&board, Player::Red, 40, 1.4, false, &predictor, &mut rng).unwrap();
        let policy = extract_policy(&root, 1.0, 3);
        let total_visits: u32 = root.borrow().children.iter().map(|c| c.borrow().visits).sum();
        for child in &root.borrow().children {
            let mv = child.borrow().mv.unwrap();
            let idx = mv.row as usize * 3 + mv.col as usize;
            let expected = child.borrow().visits as f64 / total_visits as f64;
            assert!((policy[idx] as f64 - expected).abs() < 1e-6);
        }
    }
}
