//! Chunked parallel execution of the sequence operations.
//!
//! This module sits "above" [`crate::processing`] and provides:
//!
//! - Parallel (chunked) `filter`, `map`, `find`, `some` and `every`
//! - Resource limits / throttling (in-flight chunks)
//! - Real-time metrics + observer hooks for monitoring
//!
//! Results are identical to the sequential operations: output order follows input order and
//! `find_parallel` returns the leftmost match. Callbacks may run on several threads at once and,
//! unlike the sequential forms, may be called on elements past the deciding one.
//!
//! ```rust
//! use rust_enumeration::execution::{ExecutionEngine, ExecutionOptions};
//!
//! # fn main() -> Result<(), rust_enumeration::ProcessingError> {
//! let engine = ExecutionEngine::new(ExecutionOptions {
//!     num_threads: Some(2),
//!     chunk_size: 3,
//!     max_in_flight_chunks: 2,
//! })?;
//!
//! let xs: Vec<i64> = (1..=10).collect();
//! assert_eq!(engine.filter_parallel(&xs, |x| x % 3 == 0), vec![3, 6, 9]);
//! assert_eq!(engine.find_parallel(&xs, |x| *x > 4), Some(&5));
//! assert!(engine.every_parallel(&xs, |x| *x > 0));
//! # Ok(())
//! # }
//! ```

mod observer;
mod semaphore;

use std::ops::Range;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use rayon::prelude::*;
use rayon::ThreadPool;
use rayon::ThreadPoolBuilder;

use crate::error::{ProcessingError, ProcessingResult};
use crate::processing::reduce;

pub use observer::{
    ExecutionEvent, ExecutionMetrics, ExecutionMetricsSnapshot, ExecutionObserver, ExecutionOp,
    StdErrExecutionObserver,
};

use semaphore::Semaphore;

/// Configuration for the [`ExecutionEngine`].
#[derive(Debug, Clone)]
pub struct ExecutionOptions {
    /// Number of worker threads used by the engine.
    ///
    /// If `None`, uses the platform's available parallelism.
    pub num_threads: Option<usize>,
    /// Number of elements per chunk.
    pub chunk_size: usize,
    /// Upper bound on concurrently executing chunks.
    ///
    /// This is an additional throttle on top of `num_threads`.
    pub max_in_flight_chunks: usize,
}

impl Default for ExecutionOptions {
    fn default() -> Self {
        let n = available_threads();
        Self {
            num_threads: Some(n),
            chunk_size: 4_096,
            max_in_flight_chunks: n,
        }
    }
}

/// A configurable execution engine for in-memory sequences.
pub struct ExecutionEngine {
    pool: ThreadPool,
    opts: ExecutionOptions,
    observer: Option<Arc<dyn ExecutionObserver>>,
    metrics: Arc<ExecutionMetrics>,
}

impl ExecutionEngine {
    /// Create a new engine with the given options.
    ///
    /// Returns [`ProcessingError::ContractViolation`] if `chunk_size == 0`,
    /// `max_in_flight_chunks == 0`, or `num_threads == Some(0)`.
    pub fn new(opts: ExecutionOptions) -> ProcessingResult<Self> {
        if opts.chunk_size == 0 {
            return Err(ProcessingError::contract("chunk_size must be > 0"));
        }
        if opts.max_in_flight_chunks == 0 {
            return Err(ProcessingError::contract("max_in_flight_chunks must be > 0"));
        }
        if opts.num_threads == Some(0) {
            return Err(ProcessingError::contract("num_threads must be > 0 when set"));
        }

        let n_threads = opts.num_threads.unwrap_or_else(available_threads);
        let pool = ThreadPoolBuilder::new()
            .num_threads(n_threads)
            .build()
            .map_err(|e| ProcessingError::ThreadPool {
                message: e.to_string(),
            })?;

        Ok(Self {
            pool,
            opts,
            observer: None,
            metrics: Arc::new(ExecutionMetrics::new()),
        })
    }

    /// Attach an observer for execution events (metrics/logging).
    pub fn with_observer(mut self, observer: Arc<dyn ExecutionObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Get a handle to real-time execution metrics.
    pub fn metrics(&self) -> Arc<ExecutionMetrics> {
        Arc::clone(&self.metrics)
    }

    pub fn options(&self) -> &ExecutionOptions {
        &self.opts
    }

    /// Parallel [`crate::processing::filter`].
    pub fn filter_parallel<T, F>(&self, sequence: &[T], predicate: F) -> Vec<T>
    where
        T: Clone + Send + Sync,
        F: Fn(&T) -> bool + Send + Sync,
    {
        let per_chunk = self.run(ExecutionOp::Filter, sequence, |_, chunk, tally| {
            let mut out = Vec::new();
            for item in chunk {
                tally.row();
                if predicate(item) {
                    out.push(item.clone());
                }
            }
            Some(out)
        });
        per_chunk.into_iter().flatten().flatten().collect()
    }

    /// Parallel [`crate::processing::map`].
    pub fn map_parallel<T, U, F>(&self, sequence: &[T], transform: F) -> Vec<U>
    where
        T: Sync,
        U: Send,
        F: Fn(&T) -> U + Send + Sync,
    {
        let per_chunk = self.run(ExecutionOp::Map, sequence, |_, chunk, tally| {
            let mut out = Vec::with_capacity(chunk.len());
            for item in chunk {
                tally.row();
                out.push(transform(item));
            }
            Some(out)
        });
        per_chunk.into_iter().flatten().flatten().collect()
    }

    /// Parallel [`crate::processing::find`]: the leftmost matching element.
    ///
    /// Chunks that start after an already-found match are skipped.
    pub fn find_parallel<'a, T, F>(&self, sequence: &'a [T], predicate: F) -> Option<&'a T>
    where
        T: Sync,
        F: Fn(&T) -> bool + Send + Sync,
    {
        let best = AtomicUsize::new(usize::MAX);
        let per_chunk = self.run(ExecutionOp::Find, sequence, |range, chunk, tally| {
            if range.start > best.load(Ordering::SeqCst) {
                return None;
            }
            for (offset, item) in chunk.iter().enumerate() {
                tally.row();
                if predicate(item) {
                    let idx = range.start + offset;
                    let _ = best.fetch_min(idx, Ordering::SeqCst);
                    return Some(Some(idx));
                }
            }
            Some(None)
        });
        let leftmost = per_chunk.into_iter().flatten().flatten().min()?;
        sequence.get(leftmost)
    }

    /// Parallel [`crate::processing::some`].
    pub fn some_parallel<T, F>(&self, sequence: &[T], predicate: F) -> bool
    where
        T: Sync,
        F: Fn(&T) -> bool + Send + Sync,
    {
        let found = AtomicBool::new(false);
        self.run(ExecutionOp::Some, sequence, |_, chunk, tally| {
            if found.load(Ordering::SeqCst) {
                return None;
            }
            for item in chunk {
                tally.row();
                if predicate(item) {
                    found.store(true, Ordering::SeqCst);
                    break;
                }
            }
            Some(())
        });
        found.load(Ordering::SeqCst)
    }

    /// Parallel [`crate::processing::every`].
    pub fn every_parallel<T, F>(&self, sequence: &[T], predicate: F) -> bool
    where
        T: Sync,
        F: Fn(&T) -> bool + Send + Sync,
    {
        let failed = AtomicBool::new(false);
        self.run(ExecutionOp::Every, sequence, |_, chunk, tally| {
            if failed.load(Ordering::SeqCst) {
                return None;
            }
            for item in chunk {
                tally.row();
                if !predicate(item) {
                    failed.store(true, Ordering::SeqCst);
                    break;
                }
            }
            Some(())
        });
        !failed.load(Ordering::SeqCst)
    }

    /// [`crate::processing::reduce`] with observer/metrics hooks.
    ///
    /// Folding is order-dependent in general, so this runs sequentially on the calling thread.
    pub fn reduce<'a, T, A, F>(&self, sequence: &'a [T], initial: A, mut reducer: F) -> A
    where
        F: FnMut(A, &'a T) -> A,
    {
        let start = Instant::now();
        self.metrics.begin_run();
        self.emit(ExecutionEvent::RunStarted {
            op: ExecutionOp::Reduce,
            len: sequence.len(),
        });

        let out = reduce(sequence, initial, |acc, item| {
            self.metrics.on_row_processed();
            reducer(acc, item)
        });

        self.finish_run(ExecutionOp::Reduce, start);
        out
    }

    /// Runs `work` over every chunk of `sequence` on the pool and returns the per-chunk results
    /// in chunk order. `work` returns `None` to skip a chunk whose answer is already known.
    fn run<T, R, W>(&self, op: ExecutionOp, sequence: &[T], work: W) -> Vec<Option<R>>
    where
        T: Sync,
        R: Send,
        W: Fn(Range<usize>, &[T], &mut ChunkTally<'_>) -> Option<R> + Send + Sync,
    {
        let start = Instant::now();
        self.metrics.begin_run();
        self.emit(ExecutionEvent::RunStarted {
            op,
            len: sequence.len(),
        });

        let sem = Semaphore::new(self.opts.max_in_flight_chunks);
        let ranges = chunk_ranges(sequence.len(), self.opts.chunk_size);

        let per_chunk = self.pool.install(|| {
            ranges
                .into_par_iter()
                .map(|range| {
                    let (permit, waited) = sem.acquire();
                    if waited > Duration::ZERO {
                        self.metrics.on_throttle_wait(waited);
                        self.emit(ExecutionEvent::ThrottleWaited { duration: waited });
                    }

                    self.metrics.on_chunk_start();
                    self.emit(ExecutionEvent::ChunkStarted {
                        start_row: range.start,
                        row_count: range.len(),
                    });

                    let mut tally = ChunkTally {
                        metrics: &self.metrics,
                        rows: 0,
                    };
                    let out = work(range.clone(), &sequence[range.clone()], &mut tally);
                    match &out {
                        Some(_) => self.emit(ExecutionEvent::ChunkFinished {
                            start_row: range.start,
                            rows_processed: tally.rows,
                        }),
                        None => {
                            self.metrics.on_chunk_skipped();
                            self.emit(ExecutionEvent::ChunkSkipped {
                                start_row: range.start,
                            });
                        }
                    }

                    self.metrics.on_chunk_end();
                    drop(permit);
                    out
                })
                .collect::<Vec<_>>()
        });

        self.finish_run(op, start);
        per_chunk
    }

    fn finish_run(&self, op: ExecutionOp, start: Instant) {
        let elapsed = start.elapsed();
        self.metrics.end_run(elapsed);
        self.emit(ExecutionEvent::RunFinished {
            op,
            elapsed,
            metrics: self.metrics.snapshot(),
        });
    }

    fn emit(&self, event: ExecutionEvent) {
        if let Some(obs) = &self.observer {
            obs.on_event(&event);
        }
    }
}

/// Per-chunk row counter that also feeds the run-wide metrics.
struct ChunkTally<'m> {
    metrics: &'m ExecutionMetrics,
    rows: usize,
}

impl ChunkTally<'_> {
    fn row(&mut self) {
        self.rows += 1;
        self.metrics.on_row_processed();
    }
}

fn available_threads() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

fn chunk_ranges(len: usize, chunk_size: usize) -> Vec<Range<usize>> {
    let mut out = Vec::with_capacity(len.div_ceil(chunk_size));
    let mut start = 0usize;
    while start < len {
        let end = (start + chunk_size).min(len);
        out.push(start..end);
        start = end;
    }
    out
}
