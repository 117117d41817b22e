//! Execution strategies for per-document work
//!
//! Documents are independent once the reference set exists, so an executor
//! only has to map a function over a slice and return the results in input
//! order.

use crate::error::Result;

#[cfg(feature = "parallel")]
pub mod parallel;
pub mod sequential;

#[cfg(feature = "parallel")]
pub use parallel::ParallelExecutor;
pub use sequential::SequentialExecutor;

/// Execution mode selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionMode {
    /// Single-threaded sequential processing
    Sequential,
    /// Multi-threaded parallel processing
    Parallel,
    /// Pick based on corpus size and available CPUs
    Adaptive,
}

impl ExecutionMode {
    /// Lower-case name used in logs and reports
    pub fn as_str(&self) -> &'static str {
        match self {
            ExecutionMode::Sequential => "sequential",
            ExecutionMode::Parallel => "parallel",
            ExecutionMode::Adaptive => "adaptive",
        }
    }
}

impl std::fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strategy for mapping work over documents
pub trait Executor: Send + Sync {
    /// Apply `f` to every item, returning results in input order
    fn map<T, R, F>(&self, items: &[T], f: F) -> Result<Vec<R>>
    where
        T: Sync,
        R: Send,
        F: Fn(usize, &T) -> R + Sync + Send;

    /// Get the execution mode
    fn mode(&self) -> ExecutionMode;

    /// Number of worker threads used
    fn threads(&self) -> usize;
}

/// Number of threads to use when none is configured
pub fn default_threads() -> usize {
    #[cfg(feature = "parallel")]
    return num_cpus::get();

    #[cfg(not(feature = "parallel"))]
    1
}

/// Automatically select execution mode from the corpus size
pub fn auto_select(document_count: usize, threads: usize) -> ExecutionMode {
    if document_count <= 1 || threads <= 1 {
        // Nothing to spread across workers
        ExecutionMode::Sequential
    } else {
        #[cfg(feature = "parallel")]
        return ExecutionMode::Parallel;

        #[cfg(not(feature = "parallel"))]
        ExecutionMode::Sequential
    }
}
