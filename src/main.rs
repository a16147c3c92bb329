//! Main entry point for the Hexforge engine.
//!
//! Runs a sample self-play game between a classical MCTS agent and a
//! random baseline on a small board, logging each move.

use hexforge::agents::{Agent, MCTSAgent, RandomAgent};
use hexforge::arena::Arena;
use hexforge::config::MctsConfig;

fn main() {
    env_logger::init();

    let mcts_config = MctsConfig {
        iterations: 500,
        ..MctsConfig::default()
    };
    let mcts_agent = MCTSAgent::new(mcts_config).expect("default-derived config is valid");
    let random_agent = RandomAgent::new();

    let red: &dyn Agent = &mcts_agent;
    let black: &dyn Agent = &random_agent;

    let mut arena = Arena::new(red, black, 7, 7 * 7).expect("failed to build arena board");
    let winner = arena.play_game();

    match winner {
        1 => println!("Red wins!"),
        2 => println!("Black wins!"),
        _ => println!("Game did not finish within the move cap."),
    }
}
