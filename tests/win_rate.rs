//! End-to-end scenario: a tuned MCTS agent should beat a random opponent
//! decisively on a small board.

use hexforge::agents::{MCTSAgent, RandomAgent};
use hexforge::arena::play_match;
use hexforge::config::MctsConfig;

#[test]
fn mcts_beats_random_agent_at_least_eighty_percent_of_the_time() {
    let mcts = MCTSAgent::new(MctsConfig {
        iterations: 200,
        ..MctsConfig::default()
    })
    .unwrap();
    let random = RandomAgent::new();

    let (red_wins, _black_wins, unfinished) =
        play_match(&mcts, &random, 5, 5 * 5, 20).expect("match should play to completion");

    assert_eq!(unfinished, 0, "Hex cannot end in a draw on a filled board");
    assert!(
        red_wins as f64 / 20.0 >= 0.8,
        "expected MCTS to win at least 80% of 20 games, won {red_wins}"
    );
}
