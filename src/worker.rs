//! Workers: one dedicated thread each, all incrementing the same counter.
//!
//! A worker announces each step before performing it, going through a fresh
//! [`BlockWriter`] per iteration so at most one log line per worker is in
//! flight at a time. Dropping a worker joins its thread and prints the
//! termination line; dropping the owning collection is the program's whole
//! shutdown sequence.

use std::fmt::Write as _;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crate::config::RunConfig;
use crate::console::{BlockWriter, Console};
use crate::counter::SharedCounter;

/// Spawns workers and owns the state they share: the identity allocator, the
/// counter, and the console.
pub struct WorkerFactory {
    next_id: AtomicU32,
    counter: Arc<SharedCounter>,
    console: Arc<Console>,
    config: RunConfig,
}

impl WorkerFactory {
    /// Factory writing to the process stdout.
    pub fn new(config: RunConfig) -> Self {
        Self::with_console(config, Arc::new(Console::stdout()))
    }

    /// Factory writing to a caller-supplied console.
    pub fn with_console(config: RunConfig, console: Arc<Console>) -> Self {
        WorkerFactory {
            next_id: AtomicU32::new(1),
            counter: Arc::new(SharedCounter::new()),
            console,
            config,
        }
    }

    /// The counter every worker of this factory increments.
    pub fn counter(&self) -> Arc<SharedCounter> {
        Arc::clone(&self.counter)
    }

    /// Spawns one worker; its thread starts immediately.
    ///
    /// Identity assignment is an atomic fetch-and-increment, so workers
    /// spawned concurrently still get distinct ids.
    pub fn spawn(&self) -> Worker {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let counter = Arc::clone(&self.counter);
        let console = Arc::clone(&self.console);
        let increments = self.config.increments;
        let delay = self.config.work_delay;
        let handle = thread::spawn(move || {
            increment_loop(id, increments, delay, &counter, &console);
        });
        log::debug!("worker {} spawned", id);
        Worker {
            id,
            console: Arc::clone(&self.console),
            handle: Some(handle),
        }
    }

    /// Spawns the configured number of workers.
    pub fn spawn_all(&self) -> Vec<Worker> {
        (0..self.config.workers).map(|_| self.spawn()).collect()
    }
}

/// Loop run by each worker thread: wait, announce, wait, increment, report.
fn increment_loop(
    id: u32,
    increments: u32,
    delay: Duration,
    counter: &SharedCounter,
    console: &Arc<Console>,
) {
    for _ in 0..increments {
        thread::sleep(delay);
        let mut msg = BlockWriter::new(Arc::clone(console));
        // Appending goes into an in-memory buffer and cannot fail.
        let _ = writeln!(msg, "{}) increasing a", id);
        msg.flush();
        thread::sleep(delay);
        let _ = writeln!(msg, "{}) a is increased to {}", id, counter.increment_and_get());
        // The writer drops here, releasing the result line before the next
        // iteration starts a fresh one.
    }
}

/// One background worker. Owns its thread handle; the type cannot be cloned,
/// so the join obligation exists exactly once.
pub struct Worker {
    id: u32,
    console: Arc<Console>,
    handle: Option<JoinHandle<()>>,
}

impl Worker {
    /// Identity printed in every line this worker emits.
    pub fn id(&self) -> u32 {
        self.id
    }
}

impl Drop for Worker {
    /// Blocks until the worker's loop has finished, then prints the
    /// termination line.
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                log::error!("worker {} thread panicked", self.id);
            }
            log::debug!("worker {} joined", self.id);
        }
        let mut msg = BlockWriter::new(Arc::clone(&self.console));
        let _ = writeln!(msg, "{}) is terminated", self.id);
    }
}
