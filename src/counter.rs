//! Shared counter incremented from many threads at once.
//!
//! Atomicity is the whole point: if two threads both read 5 and both write
//! back 6, one increment is lost. `fetch_add` is a single read-modify-write,
//! so every increment lands.

use std::sync::atomic::{AtomicU64, Ordering};

/// Process-shared increment counter, starting at zero.
///
/// All mutation goes through [`SharedCounter::increment_and_get`]; there is
/// no other write path.
#[derive(Debug, Default)]
pub struct SharedCounter {
    value: AtomicU64,
}

impl SharedCounter {
    pub fn new() -> Self {
        SharedCounter {
            value: AtomicU64::new(0),
        }
    }

    /// Atomically adds 1 and returns the new value.
    ///
    /// `SeqCst` places every increment in one total order: no two callers
    /// ever see the same post-increment value.
    pub fn increment_and_get(&self) -> u64 {
        self.value.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Current value.
    pub fn get(&self) -> u64 {
        self.value.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::{Arc, Mutex};
    use std::thread;

    #[test]
    fn starts_at_zero() {
        assert_eq!(SharedCounter::new().get(), 0);
    }

    #[test]
    fn sequential_increments_count_up() {
        let counter = SharedCounter::new();
        assert_eq!(counter.increment_and_get(), 1);
        assert_eq!(counter.increment_and_get(), 2);
        assert_eq!(counter.increment_and_get(), 3);
        assert_eq!(counter.get(), 3);
    }

    #[test]
    fn no_increment_is_lost_across_threads() {
        for (threads, increments) in [(1, 1), (4, 5), (16, 50)] {
            let counter = Arc::new(SharedCounter::new());
            let seen = Arc::new(Mutex::new(Vec::new()));

            let mut handles = vec![];
            for _ in 0..threads {
                let counter = Arc::clone(&counter);
                let seen = Arc::clone(&seen);
                handles.push(thread::spawn(move || {
                    for _ in 0..increments {
                        let value = counter.increment_and_get();
                        seen.lock().unwrap().push(value);
                    }
                }));
            }
            for handle in handles {
                handle.join().unwrap();
            }

            let total = (threads * increments) as u64;
            assert_eq!(counter.get(), total, "{} threads x {}", threads, increments);

            // Every returned value is distinct: the increments form a total
            // order with no duplicates and no gaps.
            let seen = seen.lock().unwrap();
            let distinct: HashSet<u64> = seen.iter().copied().collect();
            assert_eq!(distinct.len(), seen.len());
            assert_eq!(distinct, (1..=total).collect::<HashSet<u64>>());
        }
    }
}
