//! Classical MCTS selection: descend via UCT until reaching a node with
//! untried moves or a terminal scratch state.

use crate::game_state::GameState;
use crate::mcts::node::NodeRef;

pub const DEFAULT_EXPLORATION_CONSTANT: f64 = std::f64::consts::SQRT_2;

/// Descends from `root`, applying each chosen child's move to `scratch`,
/// stopping once the current node still has untried legal moves (ready
/// for expansion) or `scratch` is terminal.
pub fn select(root: &NodeRef, scratch: &mut GameState, exploration_constant: f64) -> NodeRef {
    let mut current = root.clone();

    loop {
        if scratch.is_terminal() {
            return current;
        }

        let legal_moves = scratch.legal_moves();
        let has_untried = current.borrow().has_untried_moves(&legal_moves);
        if has_untried || current.borrow().children.is_empty() {
            return current;
        }

        let parent_visits = current.borrow().visits;
        let next = current
            .borrow()
            .children
            .iter()
            .max_by(|a, b| {
                let ua = a.borrow().uct_value(parent_visits, exploration_constant);
                let ub = b.borrow().uct_value(parent_visits, exploration_constant);
                ua.partial_cmp(&ub).unwrap_or(std::cmp::Ordering::Equal)
            })
            .cloned()
            .expect("select: node reported children but iterator was empty");

        let mv = next.borrow().mv.expect("non-root child must carry a move");
        scratch
            .do_move(mv)
            .expect("selection only follows moves already validated at expansion time");
        current = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mcts::node::Node;
    use crate::move_types::{Move, Player};

    #[test]
    fn select_stops_at_root_when_untried_moves_remain() {
        let root = Node::new_root();
        let mut scratch = GameState::new(3, Player::Red).unwrap();
        let leaf = select(&root, &mut scratch, DEFAULT_EXPLORATION_CONSTANT);
        assert!(rc_ptr_eq(&leaf, &root));
    }

    fn rc_ptr_eq(a: &NodeRef, b: &NodeRef) -> bool {
        std::rc::Rc::ptr_eq(a, b)
    }

    #[test]
    fn select_descends_to_the_single_unvisited_child() {
        let root = Node::new_root();
        root.borrow_mut().visits = 4;
        let state = GameState::new(2, Player::Red).unwrap();
        let moves = state.legal_moves();

        let mut target = None;
        for (i, &mv) in moves.iter().enumerate() {
            let c = Node::new_child(&root, mv, Player::Red.id(), 0.0, 0.0);
            if i == 0 {
                target = Some(c.clone());
            } else {
                c.borrow_mut().visits = 1;
                c.borrow_mut().wins = 0.0;
            }
            root.borrow_mut().children.push(c);
        }
        let target = target.unwrap();

        let mut scratch = state;
        let leaf = select(&root, &mut scratch, DEFAULT_EXPLORATION_CONSTANT);
        assert!(rc_ptr_eq(&leaf, &target));
    }
}
