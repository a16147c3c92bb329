//! `GameState` pairs a `Board` with whose turn it is, and is the type
//! search and agent code actually walk — `Board` alone doesn't know who
//! moves next.

use crate::board::Board;
use crate::error::HexResult;
use crate::move_types::{Move, Player};

#[derive(Debug, Clone)]
pub struct GameState {
    pub board: Board,
    pub to_move: Player,
}

impl GameState {
    pub fn new(size: usize, first_to_move: Player) -> HexResult<GameState> {
        Ok(GameState {
            board: Board::new(size)?,
            to_move: first_to_move,
        })
    }

    pub fn from_board(board: Board, to_move: Player) -> GameState {
        GameState { board, to_move }
    }

    pub fn copy(&self) -> GameState {
        self.clone()
    }

    pub fn legal_moves(&self) -> Vec<Move> {
        self.board.legal_moves()
    }

    /// Applies `mv` for the side to move and flips `to_move`. Leaves
    /// `self` unchanged on error.
    pub fn do_move(&mut self, mv: Move) -> HexResult<()> {
        self.board.make_move(mv.row, mv.col, self.to_move)?;
        self.to_move = self.to_move.other();
        Ok(())
    }

    /// Inverse of `do_move`: rewinds the board and restores `to_move`.
    pub fn undo_move(&mut self) -> HexResult<()> {
        self.board.undo()?;
        self.to_move = self.to_move.other();
        Ok(())
    }

    pub fn is_terminal(&mut self) -> bool {
        self.board.is_terminal()
    }

    /// The winner's stable player id (1 = Red, 2 = Black), or 0 if the
    /// game has not yet been won.
    pub fn winner_id(&mut self) -> u8 {
        if self.board.red_wins() {
            Player::Red.id()
        } else if self.board.black_wins() {
            Player::Black.id()
        } else {
            0
        }
    }

    /// The shortest-path distance for the side to move after hypothetically
    /// placing a stone at `mv`, computed by mutating the board and undoing
    /// the move rather than cloning it.
    pub fn estimate_after_move(&mut self, mv: Move) -> HexResult<i64> {
        let mover = self.to_move.stone();
        self.board.place_stone(mv.row, mv.col, mover)?;
        let distance = crate::board::shortest_path_distance(&self.board, mover);
        self.board.undo()?;
        Ok(distance)
    }
}
