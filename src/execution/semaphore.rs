use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

/// A small, blocking counting semaphore bounding in-flight chunks.
pub struct Semaphore {
    permits: Mutex<usize>,
    cv: Condvar,
}

/// A held permit; released on drop, including while unwinding from a panicking callback.
pub struct Permit<'s> {
    sem: &'s Semaphore,
}

impl Semaphore {
    /// `permits` must be non-zero; [`super::ExecutionEngine::new`] checks this.
    pub fn new(permits: usize) -> Self {
        Self {
            permits: Mutex::new(permits),
            cv: Condvar::new(),
        }
    }

    /// Acquire one permit, blocking until available.
    ///
    /// Also returns the time spent waiting (zero if no wait was required).
    pub fn acquire(&self) -> (Permit<'_>, Duration) {
        let start = Instant::now();
        let mut waited = false;
        let mut g = self.lock();
        while *g == 0 {
            waited = true;
            g = self.cv.wait(g).unwrap_or_else(PoisonError::into_inner);
        }
        *g -= 1;
        let waited = if waited { start.elapsed() } else { Duration::ZERO };
        (Permit { sem: self }, waited)
    }

    fn release(&self) {
        let mut g = self.lock();
        *g += 1;
        self.cv.notify_one();
    }

    fn lock(&self) -> MutexGuard<'_, usize> {
        self.permits.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Drop for Permit<'_> {
    fn drop(&mut self) {
        self.sem.release();
    }
}

#[cfg(test)]
mod tests {
    use super::Semaphore;
    use std::sync::Arc;
    use std::time::Duration;

    #[test]
    fn acquire_without_contention_does_not_wait() {
        let sem = Semaphore::new(2);
        let (a, wa) = sem.acquire();
        let (_b, wb) = sem.acquire();
        assert_eq!(wa, Duration::ZERO);
        assert_eq!(wb, Duration::ZERO);
        drop(a);
        let (_c, wc) = sem.acquire();
        assert_eq!(wc, Duration::ZERO);
    }

    #[test]
    fn acquire_blocks_until_permit_dropped() {
        let sem = Arc::new(Semaphore::new(1));

        let holder = Arc::clone(&sem);
        let (ready_tx, ready_rx) = std::sync::mpsc::channel();
        let handle = std::thread::spawn(move || {
            let (permit, _) = holder.acquire();
            ready_tx.send(()).unwrap();
            std::thread::sleep(Duration::from_millis(20));
            drop(permit);
        });

        ready_rx.recv().unwrap();
        let (_permit, waited) = sem.acquire();
        assert!(waited > Duration::ZERO);
        handle.join().unwrap();
    }
}
