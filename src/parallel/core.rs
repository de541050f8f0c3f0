use anyhow::{Result, anyhow};
use crossbeam::channel::bounded;

/// Fixed-size pool of blocking worker threads.
///
/// Workers pull unclaimed items from a shared intake channel and push each
/// outcome to the collection channel the moment it is produced, so the
/// caller's sink observes outcomes in completion order, not submission
/// order. Each item is claimed by exactly one worker exactly once.
#[derive(Debug, Clone, Copy)]
pub struct WorkerPool {
    workers: usize,
}

impl WorkerPool {
    /// Pool with the requested number of workers.
    pub fn new(workers: usize) -> Self {
        Self { workers }
    }

    /// Workers actually spawned for `work_count` items.
    ///
    /// Never more threads than items, never fewer than one.
    pub fn effective_workers(&self, work_count: usize) -> usize {
        self.workers.min(work_count).max(1)
    }

    /// Run `worker_fn` over every item, feeding each outcome to `sink`.
    ///
    /// Exactly one outcome per item is delivered. The closed intake channel
    /// is the workers' shutdown signal, and the sink loop terminates after
    /// `items.len()` outcomes, so completion is an observable event rather
    /// than a race. A panicking worker surfaces as an error, not a hang.
    pub fn run<T, R, F, S>(&self, items: Vec<T>, worker_fn: F, mut sink: S) -> Result<()>
    where
        T: Send,
        R: Send,
        F: Fn(T) -> R + Sync,
        S: FnMut(R),
    {
        let total = items.len();
        if total == 0 {
            return Ok(());
        }
        let workers = self.effective_workers(total);

        // Both buffers hold the whole batch, so feeding jobs below and
        // worker sends never block.
        let (job_tx, job_rx) = bounded::<T>(total);
        let (outcome_tx, outcome_rx) = bounded::<R>(total);

        crossbeam::thread::scope(|scope| {
            for _ in 0..workers {
                let job_rx = job_rx.clone();
                let outcome_tx = outcome_tx.clone();
                let worker_fn = &worker_fn;
                scope.spawn(move |_| {
                    while let Ok(item) = job_rx.recv() {
                        if outcome_tx.send(worker_fn(item)).is_err() {
                            break;
                        }
                    }
                });
            }
            // Workers hold the only remaining clones; dropping these lets
            // channel teardown signal completion.
            drop(job_rx);
            drop(outcome_tx);

            for item in items {
                if job_tx.send(item).is_err() {
                    break;
                }
            }
            drop(job_tx);

            for _ in 0..total {
                match outcome_rx.recv() {
                    Ok(outcome) => sink(outcome),
                    Err(_) => break,
                }
            }
        })
        .map_err(|_| anyhow!("worker thread panicked"))?;

        Ok(())
    }
}
