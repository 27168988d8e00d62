use std::fmt;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::time::Duration;

/// Operation an execution run performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionOp {
    Filter,
    Map,
    Find,
    Some,
    Every,
    Reduce,
}

/// Execution events emitted by the engine.
#[derive(Debug, Clone)]
pub enum ExecutionEvent {
    RunStarted { op: ExecutionOp, len: usize },
    ThrottleWaited { duration: Duration },
    ChunkStarted { start_row: usize, row_count: usize },
    ChunkFinished { start_row: usize, rows_processed: usize },
    /// The answer was already settled by another chunk, so this one was not scanned.
    ChunkSkipped { start_row: usize },
    RunFinished {
        op: ExecutionOp,
        elapsed: Duration,
        metrics: ExecutionMetricsSnapshot,
    },
}

/// Observer hook for execution events.
pub trait ExecutionObserver: Send + Sync {
    fn on_event(&self, event: &ExecutionEvent);
}

/// A simple stderr logger for execution events.
#[derive(Debug, Default)]
pub struct StdErrExecutionObserver;

impl ExecutionObserver for StdErrExecutionObserver {
    fn on_event(&self, event: &ExecutionEvent) {
        match event {
            ExecutionEvent::RunFinished { op, metrics, .. } => {
                eprintln!("[exec][{op:?}] finished {metrics}")
            }
            other => eprintln!("[exec] {other:?}"),
        }
    }
}

/// Live counters for the engine's most recent run.
///
/// Each engine call begins a new run: the counters drop back to zero and `run_id` goes up by one.
/// [`snapshot`](Self::snapshot) may be taken mid-run from any thread.
#[derive(Debug, Default)]
pub struct ExecutionMetrics {
    run_id: AtomicU64,
    run: RunCounters,
}

#[derive(Debug, Default)]
struct RunCounters {
    elapsed_ns: AtomicU64,
    rows: AtomicU64,
    started: AtomicU64,
    finished: AtomicU64,
    skipped: AtomicU64,
    throttled_ns: AtomicU64,
    active: AtomicUsize,
    peak_active: AtomicUsize,
}

impl RunCounters {
    fn clear(&self) {
        let totals = [
            &self.elapsed_ns,
            &self.rows,
            &self.started,
            &self.finished,
            &self.skipped,
            &self.throttled_ns,
        ];
        for total in totals {
            total.store(0, Ordering::SeqCst);
        }
        self.active.store(0, Ordering::SeqCst);
        self.peak_active.store(0, Ordering::SeqCst);
    }
}

impl ExecutionMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_run(&self) {
        self.run_id.fetch_add(1, Ordering::SeqCst);
        self.run.clear();
    }

    pub fn end_run(&self, elapsed: Duration) {
        self.run.elapsed_ns.store(nanos(elapsed), Ordering::SeqCst);
    }

    pub fn on_row_processed(&self) {
        self.run.rows.fetch_add(1, Ordering::SeqCst);
    }

    pub fn on_chunk_start(&self) {
        self.run.started.fetch_add(1, Ordering::SeqCst);
        let active = self.run.active.fetch_add(1, Ordering::SeqCst) + 1;
        self.run.peak_active.fetch_max(active, Ordering::SeqCst);
    }

    /// Called for scanned and skipped chunks alike.
    pub fn on_chunk_end(&self) {
        self.run.finished.fetch_add(1, Ordering::SeqCst);
        self.run.active.fetch_sub(1, Ordering::SeqCst);
    }

    pub fn on_chunk_skipped(&self) {
        self.run.skipped.fetch_add(1, Ordering::SeqCst);
    }

    pub fn on_throttle_wait(&self, waited: Duration) {
        self.run.throttled_ns.fetch_add(nanos(waited), Ordering::SeqCst);
    }

    pub fn snapshot(&self) -> ExecutionMetricsSnapshot {
        let run = &self.run;
        let elapsed_ns = run.elapsed_ns.load(Ordering::SeqCst);
        ExecutionMetricsSnapshot {
            run_id: self.run_id.load(Ordering::SeqCst),
            // Zero until `end_run`.
            elapsed: (elapsed_ns != 0).then_some(Duration::from_nanos(elapsed_ns)),
            rows_processed: run.rows.load(Ordering::SeqCst),
            chunks_started: run.started.load(Ordering::SeqCst),
            chunks_finished: run.finished.load(Ordering::SeqCst),
            chunks_skipped: run.skipped.load(Ordering::SeqCst),
            throttle_wait: Duration::from_nanos(run.throttled_ns.load(Ordering::SeqCst)),
            max_active_chunks: run.peak_active.load(Ordering::SeqCst),
        }
    }
}

fn nanos(d: Duration) -> u64 {
    u64::try_from(d.as_nanos()).unwrap_or(u64::MAX)
}

/// Point-in-time copy of [`ExecutionMetrics`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionMetricsSnapshot {
    pub run_id: u64,
    /// `None` while the run is still going.
    pub elapsed: Option<Duration>,
    pub rows_processed: u64,
    pub chunks_started: u64,
    pub chunks_finished: u64,
    /// Chunks whose answer was already settled; included in `chunks_finished`.
    pub chunks_skipped: u64,
    /// Total time chunks spent waiting for an in-flight slot.
    pub throttle_wait: Duration,
    /// Peak number of chunks running at once.
    pub max_active_chunks: usize,
}

impl fmt::Display for ExecutionMetricsSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "run #{}: {} rows, chunks={}/{} (skipped={}), peak {} active, throttled {:?}",
            self.run_id,
            self.rows_processed,
            self.chunks_finished,
            self.chunks_started,
            self.chunks_skipped,
            self.max_active_chunks,
            self.throttle_wait,
        )?;
        match self.elapsed {
            Some(elapsed) => write!(f, ", took {elapsed:?}"),
            None => f.write_str(", running"),
        }
    }
}
