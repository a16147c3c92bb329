//! Classical-MCTS-backed agent: wraps `mcts::search` behind the
//! `Agent` interface.

use super::{replay_into_board, Agent, BoardView};
use crate::config::MctsConfig;
use crate::error::HexResult;
use crate::game_state::GameState;
use crate::mcts;
use crate::move_types::{Move, Player};

pub struct MCTSAgent {
    pub config: MctsConfig,
}

impl MCTSAgent {
    pub fn new(config: MctsConfig) -> HexResult<MCTSAgent> {
        Ok(MCTSAgent {
            config: config.validated()?,
        })
    }
}

impl Agent for MCTSAgent {
    fn choose(&self, board_view: &mut dyn BoardView, current_player: Player) -> Option<Move> {
        let board = replay_into_board(board_view).ok()?;
        let state = GameState::from_board(board, current_player);
        mcts::search(&state, &self.config).or_else(|| state.legal_moves().into_iter().next())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    #[test]
    fn chooses_a_legal_move_on_an_empty_board() {
        let mut board = Board::new(4).unwrap();
        let agent = MCTSAgent::new(MctsConfig {
            iterations: 30,
            ..MctsConfig::default()
        })
        .unwrap();
        let mv = agent.choose(&mut board, Player::Red).unwrap();
        assert!(board.in_bounds(mv.row, mv.col));
    }

    #[test]
    fn chooses_the_single_legal_move_on_a_one_cell_board() {
        let mut board = Board::new(1).unwrap();
        let agent = MCTSAgent::new(MctsConfig {
            iterations: 5,
            ..MctsConfig::default()
        })
        .unwrap();
        let mv = agent.choose(&mut board, Player::Red).unwrap();
        assert_eq!((mv.row, mv.col), (0, 0));
    }
}
