//! Parallel execution strategy

use crate::{
    error::{EngineError, Result},
    executor::{ExecutionMode, Executor},
};
use rayon::prelude::*;

/// Bounded worker pool executor
///
/// Each call builds a dedicated pool, so the configured thread count holds
/// regardless of the global rayon pool.
#[derive(Debug, Clone)]
pub struct ParallelExecutor {
    threads: usize,
}

impl ParallelExecutor {
    /// Create an executor; `None` uses one thread per CPU
    pub fn new(threads: Option<usize>) -> Self {
        Self {
            threads: threads.unwrap_or_else(num_cpus::get).max(1),
        }
    }

    fn build_pool(&self) -> Result<rayon::ThreadPool> {
        rayon::ThreadPoolBuilder::new()
            .num_threads(self.threads)
            .thread_name(|i| format!("plagprep-worker-{i}"))
            .build()
            .map_err(|e| EngineError::ParallelError(format!("Failed to create thread pool: {e}")))
    }
}

impl Executor for ParallelExecutor {
    fn map<T, R, F>(&self, items: &[T], f: F) -> Result<Vec<R>>
    where
        T: Sync,
        R: Send,
        F: Fn(usize, &T) -> R + Sync + Send,
    {
        if items.is_empty() {
            return Ok(Vec::new());
        }

        let pool = self.build_pool()?;
        Ok(pool.install(|| {
            items
                .par_iter()
                .enumerate()
                .map(|(index, item)| f(index, item))
                .collect()
        }))
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Parallel
    }

    fn threads(&self) -> usize {
        self.threads
    }
}
