//! Thin `choose(board, player) -> move` adapters over the search drivers.
//! `BoardView` is the capability set an external caller's board needs to
//! expose; `replay_into_board` turns that view into the engine's own
//! `Board` so the rest of the crate never has to know about it.

pub mod mcts_agent;
pub mod puct_agent;
pub mod random_agent;

use crate::board::Board;
use crate::error::HexResult;
use crate::move_types::{Color, Move, Player};

pub use mcts_agent::MCTSAgent;
pub use puct_agent::PUCTAgent;
pub use random_agent::RandomAgent;

/// Capability set an external board implementation must expose for an
/// agent to play on it without depending on the engine's own `Board`.
pub trait BoardView {
    fn size(&self) -> usize;
    fn cell(&self, row: i32, col: i32) -> Color;
    fn in_bounds(&self, row: i32, col: i32) -> bool;
    fn is_empty(&self, row: i32, col: i32) -> bool;
    fn neighbors(&self, row: i32, col: i32) -> Vec<(i32, i32)>;
    fn legal_moves(&self) -> Vec<Move>;
    fn is_terminal(&mut self) -> bool;
    fn red_wins(&mut self) -> bool;
    fn black_wins(&mut self) -> bool;
    fn make_move(&mut self, row: i32, col: i32, player: Player) -> HexResult<()>;
    fn copy(&self) -> Box<dyn BoardView>;
}

impl BoardView for Board {
    fn size(&self) -> usize {
        self.size
    }

    fn cell(&self, row: i32, col: i32) -> Color {
        Board::cell(self, row, col)
    }

    fn in_bounds(&self, row: i32, col: i32) -> bool {
        Board::in_bounds(self, row, col)
    }

    fn is_empty(&self, row: i32, col: i32) -> bool {
        Board::is_empty_at(self, row, col)
    }

    fn neighbors(&self, row: i32, col: i32) -> Vec<(i32, i32)> {
        Board::neighbors(self, row, col)
    }

    fn legal_moves(&self) -> Vec<Move> {
        Board::legal_moves(self)
    }

    fn is_terminal(&mut self) -> bool {
        Board::is_terminal(self)
    }

    fn red_wins(&mut self) -> bool {
        Board::red_wins(self)
    }

    fn black_wins(&mut self) -> bool {
        Board::black_wins(self)
    }

    fn make_move(&mut self, row: i32, col: i32, player: Player) -> HexResult<()> {
        Board::make_move(self, row, col, player)
    }

    fn copy(&self) -> Box<dyn BoardView> {
        Box::new(Board::copy(self))
    }
}

/// Any agent capable of choosing a move given a board and whose turn it is.
pub trait Agent {
    fn choose(&self, board_view: &mut dyn BoardView, current_player: Player) -> Option<Move>;
}

/// Rebuilds an engine `Board` from a `BoardView` by replaying every
/// occupied cell. Union-find unions are order-independent, so the replay
/// order (row-major) doesn't affect the resulting connectivity state.
pub fn replay_into_board(view: &dyn BoardView) -> HexResult<Board> {
    let n = view.size();
    let mut board = Board::new(n)?;
    for row in 0..n as i32 {
        for col in 0..n as i32 {
            match view.cell(row, col) {
                Color::Empty => {}
                Color::Red => board.place_stone(row, col, Color::Red)?,
                Color::Black => board.place_stone(row, col, Color::Black)?,
            }
        }
    }
    Ok(board)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::NEIGHBOR_OFFSETS;
    use std::collections::VecDeque;

    #[test]
    fn replay_reproduces_an_equivalent_board() {
        let mut original = Board::new(4).unwrap();
        original.place_stone(0, 0, Color::Red).unwrap();
        original.place_stone(1, 1, Color::Black).unwrap();

        let replayed = replay_into_board(&original).unwrap();
        assert_eq!(replayed.legal_moves().len(), original.legal_moves().len());
        assert_eq!(replayed.cell(0, 0), Color::Red);
        assert_eq!(replayed.cell(1, 1), Color::Black);
    }

    /// A second, independent `BoardView` implementor, backed by a plain
    /// cell matrix with its own flood-fill win check, to demonstrate that
    /// agents work against the trait rather than the concrete `Board`.
    #[derive(Clone)]
    struct MatrixBoard {
        size: usize,
        cells: Vec<Vec<Color>>,
    }

    impl MatrixBoard {
        fn new(size: usize) -> MatrixBoard {
            MatrixBoard {
                size,
                cells: vec![vec![Color::Empty; size]; size],
            }
        }

        fn connects(&self, color: Color) -> bool {
            let n = self.size;
            let mut seen = vec![false; n * n];
            let mut queue = VecDeque::new();

            let starts: Vec<(i32, i32)> = match color {
                Color::Red => (0..n as i32).map(|col| (0, col)).collect(),
                Color::Black => (0..n as i32).map(|row| (row, 0)).collect(),
                Color::Empty => return false,
            };
            for (row, col) in starts {
                if self.cells[row as usize][col as usize] == color {
                    seen[row as usize * n + col as usize] = true;
                    queue.push_back((row, col));
                }
            }

            while let Some((row, col)) = queue.pop_front() {
                let reached_goal = match color {
                    Color::Red => row as usize == n - 1,
                    Color::Black => col as usize == n - 1,
                    Color::Empty => false,
                };
                if reached_goal {
                    return true;
                }
                for (nr, nc) in BoardView::neighbors(self, row, col) {
                    let idx = nr as usize * n + nc as usize;
                    if !seen[idx] && self.cells[nr as usize][nc as usize] == color {
                        seen[idx] = true;
                        queue.push_back((nr, nc));
                    }
                }
            }
            false
        }
    }

    impl BoardView for MatrixBoard {
        fn size(&self) -> usize {
            self.size
        }

        fn cell(&self, row: i32, col: i32) -> Color {
            if self.in_bounds(row, col) {
                self.cells[row as usize][col as usize]
            } else {
                Color::Empty
            }
        }

        fn in_bounds(&self, row: i32, col: i32) -> bool {
            row >= 0 && col >= 0 && (row as usize) < self.size && (col as usize) < self.size
        }

        fn is_empty(&self, row: i32, col: i32) -> bool {
            self.cell(row, col) == Color::Empty
        }

        fn neighbors(&self, row: i32, col: i32) -> Vec<(i32, i32)> {
            NEIGHBOR_OFFSETS
                .iter()
                .map(|(dr, dc)| (row + dr, col + dc))
                .filter(|&(r, c)| self.in_bounds(r, c))
                .collect()
        }

        fn legal_moves(&self) -> Vec<Move> {
            let mut moves = Vec::new();
            for row in 0..self.size as i32 {
                for col in 0..self.size as i32 {
                    if self.is_empty(row, col) {
                        moves.push(Move::new(row, col));
                    }
                }
            }
            moves
        }

        fn is_terminal(&mut self) -> bool {
            self.connects(Color::Red) || self.connects(Color::Black)
        }

        fn red_wins(&mut self) -> bool {
            self.connects(Color::Red)
        }

        fn black_wins(&mut self) -> bool {
            self.connects(Color::Black)
        }

        fn make_move(&mut self, row: i32, col: i32, player: Player) -> HexResult<()> {
            if !self.in_bounds(row, col) || !self.is_empty(row, col) {
                return Err(crate::error::HexError::InvalidMove { row, col });
            }
            self.cells[row as usize][col as usize] = player.stone();
            Ok(())
        }

        fn copy(&self) -> Box<dyn BoardView> {
            Box::new(self.clone())
        }
    }

    #[test]
    fn matrix_board_replays_into_an_equivalent_engine_board() {
        let mut matrix = MatrixBoard::new(4);
        matrix.make_move(0, 0, Player::Red).unwrap();
        matrix.make_move(1, 1, Player::Black).unwrap();

        let replayed = replay_into_board(&matrix).unwrap();
        assert_eq!(replayed.legal_moves().len(), matrix.legal_moves().len());
        assert_eq!(replayed.cell(0, 0), Color::Red);
        assert_eq!(replayed.cell(1, 1), Color::Black);
    }

    #[test]
    fn matrix_board_detects_a_top_to_bottom_red_chain() {
        let mut matrix = MatrixBoard::new(3);
        matrix.make_move(0, 0, Player::Red).unwrap();
        matrix.make_move(1, 0, Player::Red).unwrap();
        matrix.make_move(2, 0, Player::Red).unwrap();
        assert!(matrix.red_wins());
        assert!(!matrix.black_wins());
    }

    #[test]
    fn mcts_agent_chooses_a_legal_move_on_a_matrix_board() {
        let mut matrix = MatrixBoard::new(3);
        let agent = MCTSAgent::new(crate::config::MctsConfig {
            iterations: 20,
            ..crate::config::MctsConfig::default()
        })
        .unwrap();
        let mv = agent.choose(&mut matrix, Player::Red).unwrap();
        assert!(matrix.in_bounds(mv.row, mv.col));
    }
}
