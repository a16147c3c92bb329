//! Uniform-random move choice, used as the search agents' baseline
//! opponent in win-rate evaluations.

use rand::Rng;

use super::{Agent, BoardView};
use crate::move_types::{Move, Player};

pub struct RandomAgent;

impl RandomAgent {
    pub fn new() -> RandomAgent {
        RandomAgent
    }
}

impl Default for RandomAgent {
    fn default() -> RandomAgent {
        RandomAgent::new()
    }
}

impl Agent for RandomAgent {
    /// Single-pass reservoir selection over the empty cells: no need to
    /// materialize the legal-move list twice or know its length upfront.
    fn choose(&self, board_view: &mut dyn BoardView, _current_player: Player) -> Option<Move> {
        let mut rng = rand::thread_rng();
        let mut chosen = None;
        let mut seen = 0u32;
        for mv in board_view.legal_moves() {
            seen += 1;
            if rng.gen_range(0..seen) == 0 {
                chosen = Some(mv);
            }
        }
        chosen
    }
}
