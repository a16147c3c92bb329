//! # Hexforge
//!
//! A Hex-playing engine built around two interchangeable search drivers:
//! classical heuristic-guided Monte Carlo Tree Search, and AlphaZero-style
//! PUCT search driven by a pluggable policy/value predictor.
//!
//! It provides modules for:
//! - Board representation and rules (`board`, `rules`, `game_state`)
//! - Move-scoring heuristics (`heuristics`) and candidate pruning (`pruning`)
//! - Classical MCTS (`mcts`) and PUCT search (`puct`)
//! - Batched neural network inference (`predictor`)
//! - Tunable search parameters (`config`)
//! - Thin `choose(board, player)` adapters (`agents`)
//! - Self-play game orchestration (`arena`)
//! - Crate-wide error handling (`error`)

pub mod agents;
pub mod arena;
pub mod board;
pub mod config;
pub mod error;
pub mod game_state;
pub mod heuristics;
pub mod mcts;
pub mod move_types;
pub mod predictor;
pub mod pruning;
pub mod puct;
pub mod rules;
