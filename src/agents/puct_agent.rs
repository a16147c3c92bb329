//! AlphaZero-style agent: wraps `puct::search` behind the `Agent`
//! interface, masking the extracted policy to currently-legal cells.

use rand::Rng;

use super::{replay_into_board, Agent, BoardView};
use crate::config::PuctConfig;
use crate::error::HexResult;
use crate::move_types::{Move, Player};
use crate::predictor::Predictor;
use crate::puct;

pub struct PUCTAgent<'p> {
    pub config: PuctConfig,
    predictor: &'p dyn Predictor,
}

impl<'p> PUCTAgent<'p> {
    pub fn new(config: PuctConfig, predictor: &'p dyn Predictor) -> HexResult<PUCTAgent<'p>> {
        Ok(PUCTAgent {
            config: config.validated()?,
            predictor,
        })
    }
}

impl<'p> Agent for PUCTAgent<'p> {
    fn choose(&self, board_view: &mut dyn BoardView, current_player: Player) -> Option<Move> {
        let board = replay_into_board(board_view).ok()?;
        let mut rng = rand::thread_rng();
        let root = puct::search(
            &board,
            current_player,
            self.config.mcts_iterations,
            self.config.c_puct,
            false,
            self.predictor,
            &mut rng,
        )
        .ok()?;

        let policy = puct::extract_policy(&root, self.config.temperature, self.config.board_size);
        let legal = board_view.legal_moves();
        legal
            .into_iter()
            .max_by(|a, b| {
                let n = self.config.board_size;
                let pa = policy[a.row as usize * n + a.col as usize];
                let pb = policy[b.row as usize * n + b.col as usize];
                pa.partial_cmp(&pb).unwrap_or(std::cmp::Ordering::Equal)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::predictor::Output;
    use crate::error::HexResult as PredResult;

    struct UniformPredictor {
        n_squared: usize,
    }

    impl Predictor for UniformPredictor {
        fn predict(&self, _encoding: Vec<f32>) -> PredResult<Output> {
            Ok(Output {
                policy: vec![1.0 / self.n_squared as f32; self.n_squared],
                value: 0.0,
            })
        }
    }

    #[test]
    fn chooses_a_legal_move() {
        let mut board = Board::new(3).unwrap();
        let predictor = UniformPredictor { n_squared: 9 };
        let config = PuctConfig {
            board_size: 3,
            mcts_iterations: 20,
            ..PuctConfig::default()
        };
        let agent = PUCTAgent::new(config, &predictor).unwrap();
        let mv = agent.choose(&mut board, Player::Red).unwrap();
        assert!(board.in_bounds(mv.row, mv.col));
    }
}
