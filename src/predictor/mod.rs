//! The `Predictor` capability PUCT search consults: map a board encoding
//! to a policy/value pair. Returns an owned `Output` carrying a flat
//! `Vec<f32>` policy over canonicalized indices rather than a
//! `HashMap<Move, f64>`, which is cheaper to build and to hand across a
//! channel to a batching worker.

pub mod batched;
pub mod router;

use crate::error::HexResult;

/// Result of one prediction: a flat policy over the n^2 canonical board
/// cells and a scalar value in [-1, 1] from the perspective of whoever
/// is to move in the encoded position.
#[derive(Debug, Clone, PartialEq)]
pub struct Output {
    pub policy: Vec<f32>,
    pub value: f64,
}

/// A board-plus-player encoding ready to hand to a predictor: the
/// three-plane tensor described in the encoding format, flattened.
pub type Encoding = Vec<f32>;

/// Anything that can turn an encoding into policy/value priors.
/// `predict` is synchronous from the caller's point of view; concrete
/// implementations (`BatchedPredictor`) may internally suspend on a
/// channel while a batch fills.
pub trait Predictor {
    fn predict(&self, encoding: Encoding) -> HexResult<Output>;
}

pub use batched::{BatchedPredictor, InferenceBackend, WorkerState};
pub use router::PredictorRouter;
