//! Parallel counter demo: a fixed crew of workers, each on its own thread,
//! increment one shared counter while keeping every console line whole.
//!
//! The two pieces with real design content are [`SharedCounter`] — an atomic
//! fetch-and-increment, so no update is ever lost — and
//! [`Console`]/[`BlockWriter`] — per-message buffering over one serialized
//! sink, so output from concurrent workers never interleaves mid-line.
//!
//! Run the demo with: cargo run -- [workers] [increments] [delay_ms]

pub mod config;
pub mod console;
pub mod counter;
pub mod worker;

pub use config::{ConfigError, RunConfig};
pub use console::{BlockWriter, Console};
pub use counter::SharedCounter;
pub use worker::{Worker, WorkerFactory};
