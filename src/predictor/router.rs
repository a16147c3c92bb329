//! Round-robin front end over several `BatchedPredictor` workers, one
//! per accelerator or CPU partition.

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

use crate::error::HexResult;
use crate::predictor::batched::{BatchedPredictor, InferenceBackend, WorkerState};
use crate::predictor::{Encoding, Output, Predictor};

pub struct PredictorRouter<B: InferenceBackend + 'static> {
    workers: Vec<BatchedPredictor<B>>,
    next: AtomicUsize,
    total_requests: AtomicU64,
}

impl<B: InferenceBackend + 'static> PredictorRouter<B> {
    pub fn new(workers: Vec<BatchedPredictor<B>>) -> PredictorRouter<B> {
        PredictorRouter {
            workers,
            next: AtomicUsize::new(0),
            total_requests: AtomicU64::new(0),
        }
    }

    pub fn worker_count(&self) -> usize {
        self.workers.len()
    }

    pub fn total_requests(&self) -> u64 {
        self.total_requests.load(Ordering::Relaxed)
    }

    pub fn broadcast_update_weights(&self, master: &B) {
        for worker in &self.workers {
            worker.update_weights(master);
        }
    }

    pub fn pause_all(&self) {
        for worker in &self.workers {
            worker.pause();
        }
    }

    pub fn resume_all(&self) {
        for worker in &self.workers {
            worker.resume();
        }
    }

    pub fn worker_states(&self) -> Vec<WorkerState> {
        self.workers.iter().map(|w| w.state()).collect()
    }
}

impl<B: InferenceBackend + 'static> Predictor for PredictorRouter<B> {
    fn predict(&self, encoding: Encoding) -> HexResult<Output> {
        let idx = self.next.fetch_add(1, Ordering::Relaxed) % self.workers.len();
        self.total_requests.fetch_add(1, Ordering::Relaxed);
        self.workers[idx].predict(encoding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct ConstantBackend {
        value: f64,
    }

    impl InferenceBackend for ConstantBackend {
        fn infer_batch(&self, batch: &[Encoding]) -> Vec<Output> {
            batch
                .iter()
                .map(|_| Output {
                    policy: vec![1.0, 0.0],
                    value: self.value,
                })
                .collect()
        }

        fn load_weights_from(&mut self, master: &Self) {
            self.value = master.value;
        }
    }

    #[test]
    fn round_robins_across_workers() {
        let router = PredictorRouter::new(vec![
            BatchedPredictor::new(ConstantBackend { value: 0.1 }, 4),
            BatchedPredictor::new(ConstantBackend { value: 0.2 }, 4),
        ]);
        for _ in 0..6 {
            router.predict(vec![0.0; 2]).unwrap();
        }
        assert_eq!(router.total_requests(), 6);
    }

    #[test]
    fn broadcast_update_weights_reaches_every_worker() {
        let router = PredictorRouter::new(vec![
            BatchedPredictor::new(ConstantBackend { value: 0.1 }, 4),
            BatchedPredictor::new(ConstantBackend { value: 0.1 }, 4),
        ]);
        router.broadcast_update_weights(&ConstantBackend { value: 0.9 });
        for state in router.worker_states() {
            assert_eq!(state, WorkerState::Running);
        }
    }
}
