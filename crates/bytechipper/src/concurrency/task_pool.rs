//! # Task Pools
//!
//! The parallel tokenizers hand their work to a [`TaskPool`] as a batch of
//! [`JoinableTask`]s, and block until the whole batch has finished.

use std::panic::{AssertUnwindSafe, catch_unwind};

use crate::errors::{BCResult, BytechipperError};

/// A unit of work submitted to a [`TaskPool`].
pub trait JoinableTask: Send {
    /// Clear any state left by a previous run.
    fn reset(&mut self);

    /// Do the work.
    fn run(&mut self) -> BCResult<()>;
}

/// A submit-and-join worker pool.
pub trait TaskPool: Send + Sync {
    /// The number of worker threads.
    fn num_threads(&self) -> usize;

    /// Reset and run every task exactly once; block until all have finished.
    ///
    /// Panics inside a task are captured as
    /// [`BytechipperError::TaskPanicked`].
    ///
    /// ## Returns
    /// The first error, in submission order, after every task has been waited on.
    fn run_batch(
        &self,
        tasks: &mut [&mut dyn JoinableTask],
    ) -> BCResult<()>;
}

/// Submit a homogeneous slice of tasks as one batch.
///
/// See [`TaskPool::run_batch`].
pub fn run_tasks<T: JoinableTask>(
    pool: &dyn TaskPool,
    tasks: &mut [T],
) -> BCResult<()> {
    let mut batch: Vec<&mut dyn JoinableTask> = tasks
        .iter_mut()
        .map(|t| t as &mut dyn JoinableTask)
        .collect();
    pool.run_batch(&mut batch)
}

/// Run one task, capturing a panic as an error.
pub(crate) fn run_guarded(
    index: usize,
    task: &mut dyn JoinableTask,
) -> BCResult<()> {
    match catch_unwind(AssertUnwindSafe(|| task.run())) {
        Ok(result) => result,
        Err(payload) => {
            log::debug!("task {index} panicked");
            Err(BytechipperError::from_panic(index, payload.as_ref()))
        }
    }
}

/// A pool which runs every task on the calling thread, in order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InlineTaskPool;

impl TaskPool for InlineTaskPool {
    fn num_threads(&self) -> usize {
        1
    }

    fn run_batch(
        &self,
        tasks: &mut [&mut dyn JoinableTask],
    ) -> BCResult<()> {
        let results: Vec<BCResult<()>> = tasks
            .iter_mut()
            .enumerate()
            .map(|(index, task)| {
                task.reset();
                run_guarded(index, &mut **task)
            })
            .collect();

        results.into_iter().collect()
    }
}


#[cfg(test)]
mod tests {
    use super::{test_tasks::check_pool_contract, *};
    use crate::testing::assert_send_sync;

    #[test]
    fn test_inline_pool() {
        let pool = InlineTaskPool;
        assert_send_sync(&pool);
        assert_eq!(pool.num_threads(), 1);
        check_pool_contract(&pool);
    }
}
