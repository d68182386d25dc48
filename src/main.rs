//! Demo entry point: spawn the workers, wait for them, report.
//!
//! Run with: cargo run -- [workers] [increments] [delay_ms]
//! Set RUST_LOG=debug for lifecycle diagnostics.

use std::env;
use std::fmt::Write as _;
use std::process;
use std::sync::Arc;

use parallel_counter::{BlockWriter, Console, RunConfig, WorkerFactory};

fn main() {
    env_logger::init();

    let config = match RunConfig::from_args(env::args().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            eprintln!("usage: parallel-counter [workers] [increments] [delay_ms]");
            process::exit(2);
        }
    };
    log::debug!("running with {:?}", config);

    let console = Arc::new(Console::stdout());
    let factory = WorkerFactory::with_console(config, Arc::clone(&console));

    {
        let workers = factory.spawn_all();
        log::debug!("{} workers running", workers.len());
        let mut banner = BlockWriter::new(Arc::clone(&console));
        let _ = writeln!(banner, "Waiting for the parallel jobs to be finished");
    } // Dropping the vector joins every worker and prints its termination line.

    log::debug!("final counter value: {}", factory.counter().get());

    let mut banner = BlockWriter::new(console);
    let _ = writeln!(banner, "All jobs finished! Terminating program...");
}
