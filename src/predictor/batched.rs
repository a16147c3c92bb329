//! Producer/consumer batching pipeline: a batch-builder thread coalesces
//! individual `predict` requests into tensors, hands them to an
//! inference thread, and results fan back out through one-shot channels.
//! Grounded in the `nwoeanhinnogaehr-coronene` MCTS player's plain
//! `std::thread` worker loop rather than pulling in an async runtime the
//! rest of the crate has no use for.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::{Arc, Condvar, Mutex};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crate::error::{HexError, HexResult};
use crate::predictor::{Encoding, Output, Predictor};

const MAX_WAIT: Duration = Duration::from_millis(5);
const QUEUE_POLL_INTERVAL: Duration = Duration::from_millis(50);
const GC_INTERVAL_BATCHES: u64 = 50;

/// The backing model. Deliberately not specified beyond this: the
/// concrete network architecture is an external collaborator.
pub trait InferenceBackend: Send {
    fn infer_batch(&self, batch: &[Encoding]) -> Vec<Output>;
    fn load_weights_from(&mut self, master: &Self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkerState {
    Running,
    Paused,
    Stopped,
}

struct Request {
    encoding: Encoding,
    responder: mpsc::Sender<Output>,
}

struct SharedState {
    state: Mutex<WorkerState>,
    state_cv: Condvar,
    idle: Mutex<bool>,
    idle_cv: Condvar,
}

pub struct BatchedPredictor<B: InferenceBackend + 'static> {
    queue_tx: mpsc::SyncSender<Request>,
    shared: Arc<SharedState>,
    backend: Arc<Mutex<B>>,
    builder_handle: Option<JoinHandle<()>>,
    inference_handle: Option<JoinHandle<()>>,
}

impl<B: InferenceBackend + 'static> BatchedPredictor<B> {
    /// `max_batch_size` bounds both how many requests one inference call
    /// covers and (scaled 1.5x, clamped to [256, 8192]) the request
    /// queue's capacity.
    pub fn new(backend: B, max_batch_size: usize) -> BatchedPredictor<B> {
        let queue_capacity = ((max_batch_size as f64 * 1.5) as usize).clamp(256, 8192);
        let (queue_tx, queue_rx) = mpsc::sync_channel::<Request>(queue_capacity);
        let (batch_tx, batch_rx) = mpsc::channel::<Vec<Request>>();

        let shared = Arc::new(SharedState {
            state: Mutex::new(WorkerState::Running),
            state_cv: Condvar::new(),
            idle: Mutex::new(false),
            idle_cv: Condvar::new(),
        });
        let backend = Arc::new(Mutex::new(backend));

        let builder_shared = shared.clone();
        let builder_handle = thread::spawn(move || {
            run_builder(queue_rx, batch_tx, builder_shared, max_batch_size);
        });

        let inference_backend = backend.clone();
        let inference_handle = thread::spawn(move || {
            run_inference(batch_rx, inference_backend);
        });

        BatchedPredictor {
            queue_tx,
            shared,
            backend,
            builder_handle: Some(builder_handle),
            inference_handle: Some(inference_handle),
        }
    }

    /// Blocks until either a worker has coalesced this request into a
    /// batch and returned a result, or the pipeline is torn down.
    pub fn predict_blocking(&self, encoding: Encoding) -> HexResult<Output> {
        let (tx, rx) = mpsc::channel();
        self.queue_tx
            .send(Request {
                encoding,
                responder: tx,
            })
            .map_err(|_| HexError::PredictorFailure("request queue is closed".to_string()))?;
        rx.recv()
            .map_err(|_| HexError::PredictorFailure("predictor dropped the request".to_string()))
    }

    /// Blocks until the builder thread reports it has parked (drained
    /// its in-flight batch and stopped pulling new requests).
    pub fn pause(&self) {
        self.set_state(WorkerState::Paused);
        let mut idle = self.shared.idle.lock().unwrap();
        while !*idle {
            idle = self.shared.idle_cv.wait(idle).unwrap();
        }
    }

    pub fn resume(&self) {
        self.set_state(WorkerState::Running);
    }

    pub fn stop(&mut self) {
        self.set_state(WorkerState::Stopped);
        if let Some(handle) = self.builder_handle.take() {
            let _ = handle.join();
        }
        if let Some(handle) = self.inference_handle.take() {
            let _ = handle.join();
        }
    }

    fn set_state(&self, new_state: WorkerState) {
        let mut state = self.shared.state.lock().unwrap();
        *state = new_state;
        self.shared.state_cv.notify_all();
    }

    pub fn state(&self) -> WorkerState {
        *self.shared.state.lock().unwrap()
    }

    /// Pauses, copies `master`'s parameters into this worker's backend,
    /// then resumes — even if the copy step were to fail, the pause is
    /// still released.
    pub fn update_weights(&self, master: &B) {
        self.pause();
        {
            let mut backend = self.backend.lock().unwrap();
            backend.load_weights_from(master);
        }
        self.resume();
    }
}

impl<B: InferenceBackend + 'static> Predictor for BatchedPredictor<B> {
    fn predict(&self, encoding: Encoding) -> HexResult<Output> {
        self.predict_blocking(encoding)
    }
}

impl<B: InferenceBackend + 'static> Drop for BatchedPredictor<B> {
    fn drop(&mut self) {
        if self.builder_handle.is_some() || self.inference_handle.is_some() {
            self.set_state(WorkerState::Stopped);
        }
        if let Some(handle) = self.builder_handle.take() {
            let _ = handle.join();
        }
        if let Some(handle) = self.inference_handle.take() {
            let _ = handle.join();
        }
    }
}

fn run_builder(
    queue_rx: mpsc::Receiver<Request>,
    batch_tx: mpsc::Sender<Vec<Request>>,
    shared: Arc<SharedState>,
    max_batch_size: usize,
) {
    loop {
        {
            let mut state = shared.state.lock().unwrap();
            while *state == WorkerState::Paused {
                *shared.idle.lock().unwrap() = true;
                shared.idle_cv.notify_all();
                state = shared.state_cv.wait(state).unwrap();
            }
            if *state == WorkerState::Stopped {
                return;
            }
            *shared.idle.lock().unwrap() = false;
        }

        let first = match queue_rx.recv_timeout(QUEUE_POLL_INTERVAL) {
            Ok(req) => req,
            Err(RecvTimeoutError::Timeout) => continue,
            Err(RecvTimeoutError::Disconnected) => return,
        };

        let mut batch = vec![first];
        while batch.len() < max_batch_size {
            match queue_rx.try_recv() {
                Ok(req) => batch.push(req),
                Err(_) => break,
            }
        }

        if batch.len() < max_batch_size {
            let deadline = Instant::now() + MAX_WAIT;
            while batch.len() < max_batch_size && Instant::now() < deadline {
                match queue_rx.try_recv() {
                    Ok(req) => batch.push(req),
                    Err(_) => thread::yield_now(),
                }
            }
        }

        log::trace!("predictor batch built: {} requests", batch.len());
        if batch_tx.send(batch).is_err() {
            return;
        }
    }
}

fn run_inference<B: InferenceBackend>(
    batch_rx: mpsc::Receiver<Vec<Request>>,
    backend: Arc<Mutex<B>>,
) {
    let batches_processed = AtomicU64::new(0);
    while let Ok(batch) = batch_rx.recv() {
        let encodings: Vec<Encoding> = batch.iter().map(|r| r.encoding.clone()).collect();
        let outputs = {
            let guard = backend.lock().unwrap();
            guard.infer_batch(&encodings)
        };

        for (request, output) in batch.into_iter().zip(outputs.into_iter()) {
            let _ = request.responder.send(output);
        }

        let processed = batches_processed.fetch_add(1, Ordering::Relaxed) + 1;
        if processed % GC_INTERVAL_BATCHES == 0 {
            log::debug!("predictor processed {} batches", processed);
        }
    }
}
