// src/tasks/mod.rs

//! Background task scheduling
//!
//! Replaces thread-per-action with a fixed-size worker pool over a job
//! queue, plus per-task cancellation tokens. A token is checked before a
//! queued job starts and can be re-checked by the job before it applies
//! results, so a torn-down consumer never receives work finished after the
//! fact.
//!
//! `Debouncer` coalesces rapid search-term changes: each submission resets
//! the quiet-period timer, and exactly one callback fires with the last
//! submitted term.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Quiet period before a search term takes effect
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Shared cancellation flag for one task (or one group of tasks)
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

type Job = Box<dyn FnOnce(&CancelToken) + Send>;

/// Fixed-size pool of worker threads fed from an unbounded queue
///
/// Queued jobs whose token was cancelled before they start are dropped
/// without running. Dropping the pool closes the queue and joins the
/// workers.
pub struct WorkerPool {
    sender: Option<flume::Sender<(CancelToken, Job)>>,
    workers: Vec<thread::JoinHandle<()>>,
}

impl WorkerPool {
    pub fn new(size: usize) -> Self {
        let size = size.max(1);
        let (sender, receiver) = flume::unbounded::<(CancelToken, Job)>();

        let workers = (0..size)
            .map(|_| {
                let receiver = receiver.clone();
                thread::spawn(move || {
                    for (token, job) in receiver.iter() {
                        if token.is_cancelled() {
                            continue;
                        }
                        job(&token);
                    }
                })
            })
            .collect();

        Self {
            sender: Some(sender),
            workers,
        }
    }

    /// Queue a job under the given cancellation token
    pub fn spawn(&self, token: CancelToken, job: impl FnOnce(&CancelToken) + Send + 'static) {
        if let Some(sender) = &self.sender {
            let _ = sender.send((token, Box::new(job)));
        }
    }

    /// Close the queue and wait for queued jobs to drain
    pub fn join(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        self.sender.take();
        for handle in self.workers.drain(..) {
            let _ = handle.join();
        }
    }
}

impl Drop for WorkerPool {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Coalesces rapid submissions into one callback per quiet period
pub struct Debouncer {
    sender: Option<flume::Sender<String>>,
    worker: Option<thread::JoinHandle<()>>,
}

impl Debouncer {
    /// Start a debouncer that invokes `callback` with the last term
    /// submitted before each quiet period elapses
    pub fn new(quiet: Duration, callback: impl Fn(String) + Send + 'static) -> Self {
        let (sender, receiver) = flume::unbounded::<String>();

        let worker = thread::spawn(move || {
            while let Ok(mut term) = receiver.recv() {
                loop {
                    match receiver.recv_timeout(quiet) {
                        // A newer term resets the timer
                        Ok(next) => term = next,
                        Err(flume::RecvTimeoutError::Timeout) => {
                            callback(term);
                            break;
                        }
                        Err(flume::RecvTimeoutError::Disconnected) => {
                            // Flush the pending term on teardown
                            callback(term);
                            return;
                        }
                    }
                }
            }
        });

        Self {
            sender: Some(sender),
            worker: Some(worker),
        }
    }

    /// Submit a new term, rescheduling the pending callback
    pub fn submit(&self, term: impl Into<String>) {
        if let Some(sender) = &self.sender {
            let _ = sender.send(term.into());
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.sender.take();
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}
