//! Tunable parameters for the two search agents, matching the external
//! configuration surface exactly (field names, defaults). Both derive
//! `serde` so an application can load a tuning profile from JSON without
//! the engine itself touching the filesystem for anything but whatever
//! path the caller hands it.

use serde::{Deserialize, Serialize};

use crate::error::{HexError, HexResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MctsConfig {
    pub iterations: u32,
    pub threshold: f64,
    pub centrality_weight: f64,
    pub connectivity_weight: f64,
    pub bias_scale: f64,
    pub shortest_path_weight: f64,
    pub exploration_constant: f64,
}

impl Default for MctsConfig {
    fn default() -> MctsConfig {
        MctsConfig {
            iterations: 1000,
            threshold: 0.0,
            centrality_weight: 0.0,
            connectivity_weight: 0.0,
            bias_scale: 0.046,
            shortest_path_weight: 0.039,
            exploration_constant: std::f64::consts::SQRT_2,
        }
    }
}

impl MctsConfig {
    pub fn validate(&self) -> HexResult<()> {
        if self.iterations == 0 {
            return Err(HexError::InvalidConfiguration(
                "iterations must be positive".to_string(),
            ));
        }
        if self.threshold < 0.0 {
            return Err(HexError::InvalidConfiguration(
                "threshold must be non-negative".to_string(),
            ));
        }
        Ok(())
    }

    /// When every heuristic weight is zero, the pure unbiased variant
    /// runs: no pruner, no bias, uniform untried-move selection.
    pub fn is_unbiased(&self) -> bool {
        self.centrality_weight == 0.0
            && self.connectivity_weight == 0.0
            && self.shortest_path_weight == 0.0
    }

    /// Validates and returns `self`, for use at the one place a config
    /// actually becomes a running search: agent construction.
    pub fn validated(self) -> HexResult<MctsConfig> {
        self.validate()?;
        Ok(self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PuctConfig {
    pub board_size: usize,
    pub mcts_iterations: u32,
    pub temperature: f64,
    pub c_puct: f64,
    pub model_path: String,
    pub load_existing_model: bool,
}

impl Default for PuctConfig {
    fn default() -> PuctConfig {
        PuctConfig {
            board_size: 11,
            mcts_iterations: 100,
            temperature: 1.0,
            c_puct: 1.4,
            model_path: String::new(),
            load_existing_model: false,
        }
    }
}

impl PuctConfig {
    pub fn validate(&self) -> HexResult<()> {
        if self.board_size == 0 {
            return Err(HexError::InvalidConfiguration(
                "board_size must be positive".to_string(),
            ));
        }
        if self.mcts_iterations == 0 {
            return Err(HexError::InvalidConfiguration(
                "mcts_iterations must be positive".to_string(),
            ));
        }
        if self.c_puct < 0.0 {
            return Err(HexError::InvalidConfiguration(
                "c_puct must be non-negative".to_string(),
            ));
        }
        Ok(())
    }

    /// Validates and returns `self`, for use at the one place a config
    /// actually becomes a running search: agent construction.
    pub fn validated(self) -> HexResult<PuctConfig> {
        self.validate()?;
        Ok(self)
    }
}
