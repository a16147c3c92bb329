//! Scoring components used both to bias MCTS expansion and to prune the
//! untried-move set: a handful of named scoring terms combined with
//! weights, built from Hex graph properties.

mod centrality;
mod connectivity;
mod shortest_path;

pub use centrality::Centrality;
pub use connectivity::Connectivity;
pub use shortest_path::ShortestPath;

pub use crate::board::shortest_path_distance;

use crate::error::HexError;
use crate::game_state::GameState;
use crate::move_types::Move;

/// A scoring function over `(state, move)`. Implementations return a
/// finite value except `LinearCombination`, which propagates NaN when a
/// required component is missing.
pub trait Heuristic {
    fn score(&self, state: &GameState, mv: Move) -> f64;
}

/// Weighted sum of up to three named components. A missing (`None`)
/// component with a nonzero weight is a hard error rather than a silent
/// zero, matching the "NullComponent" failure mode named in the error
/// design.
pub struct LinearCombination {
    pub centrality: Option<Centrality>,
    pub connectivity: Option<Connectivity>,
    pub shortest_path: Option<ShortestPath>,
    pub w_c: f64,
    pub w_k: f64,
    pub w_sp: f64,
}

impl LinearCombination {
    pub fn new(w_c: f64, w_k: f64, w_sp: f64) -> LinearCombination {
        LinearCombination {
            centrality: Some(Centrality),
            connectivity: Some(Connectivity),
            shortest_path: Some(ShortestPath),
            w_c,
            w_k,
            w_sp,
        }
    }

    /// Score, returning `NullComponent` if a nonzero-weighted component
    /// was never installed.
    pub fn try_score(&self, state: &GameState, mv: Move) -> Result<f64, HexError> {
        let mut total = 0.0;

        if self.w_c != 0.0 {
            let c = self.centrality.as_ref().ok_or(HexError::NullComponent)?;
            total += self.w_c * c.score(state, mv);
        }
        if self.w_k != 0.0 {
            let k = self.connectivity.as_ref().ok_or(HexError::NullComponent)?;
            total += self.w_k * k.score(state, mv);
        }
        if self.w_sp != 0.0 {
            let sp = self.shortest_path.as_ref().ok_or(HexError::NullComponent)?;
            total += self.w_sp * sp.score(state, mv);
        }

        Ok(total)
    }
}

impl Heuristic for LinearCombination {
    fn score(&self, state: &GameState, mv: Move) -> f64 {
        self.try_score(state, mv).unwrap_or(f64::NAN)
    }
}
