//! Self-play orchestration: alternates two `Agent`s on a shared board
//! until the game ends or a move cap is hit, and tallies results across
//! repeated games for win-rate evaluations.

use log::info;

use crate::agents::Agent;
use crate::board::Board;
use crate::move_types::Player;

pub struct Arena<'a> {
    red_player: &'a dyn Agent,
    black_player: &'a dyn Agent,
    max_moves: u32,
    pub board: Board,
}

impl<'a> Arena<'a> {
    pub fn new(
        red_player: &'a dyn Agent,
        black_player: &'a dyn Agent,
        board_size: usize,
        max_moves: u32,
    ) -> crate::error::HexResult<Arena<'a>> {
        Ok(Arena {
            red_player,
            black_player,
            max_moves,
            board: Board::new(board_size)?,
        })
    }

    /// Plays one game to completion (or until `max_moves` is reached) and
    /// returns the winner's player id, or 0 if the move cap was hit first.
    pub fn play_game(&mut self) -> u8 {
        let mut to_move = Player::Red;
        for ply in 0..self.max_moves {
            if self.board.is_terminal() {
                break;
            }
            let mv = match to_move {
                Player::Red => self.red_player.choose(&mut self.board, to_move),
                Player::Black => self.black_player.choose(&mut self.board, to_move),
            };
            let Some(mv) = mv else {
                break;
            };
            info!("ply {ply}: {to_move} plays {mv}");
            if self.board.make_move(mv.row, mv.col, to_move).is_err() {
                break;
            }
            to_move = to_move.other();
        }

        if self.board.red_wins() {
            Player::Red.id()
        } else if self.board.black_wins() {
            Player::Black.id()
        } else {
            0
        }
    }
}

/// Plays `games` independent matches between `red` and `black` on a fresh
/// `board_size` board each time, returning (red wins, black wins, unfinished).
pub fn play_match(
    red: &dyn Agent,
    black: &dyn Agent,
    board_size: usize,
    max_moves: u32,
    games: u32,
) -> crate::error::HexResult<(u32, u32, u32)> {
    let mut red_wins = 0;
    let mut black_wins = 0;
    let mut unfinished = 0;

    for _ in 0..games {
        let mut arena = Arena::new(red, black, board_size, max_moves)?;
        match arena.play_game() {
            id if id == Player::Red.id() => red_wins += 1,
            id if id == Player::Black.id() => black_wins += 1,
            _ => unfinished += 1,
        }
    }

    Ok((red_wins, black_wins, unfinished))
}
