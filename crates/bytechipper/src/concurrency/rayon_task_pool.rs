//! # Rayon Task Pool

use core::num::NonZeroUsize;

use crate::{
    concurrency::{JoinableTask, TaskPool, task_pool::run_guarded, threads::resolve_max_pool},
    errors::{BCResult, BytechipperError},
};

/// A [`TaskPool`] backed by a dedicated ``rayon`` thread pool.
#[derive(Debug)]
pub struct RayonTaskPool {
    pool: rayon::ThreadPool,
}

impl RayonTaskPool {
    /// Create a pool with exactly `num_threads` workers.
    pub fn new(num_threads: usize) -> BCResult<Self> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .thread_name(|idx| format!("bytechipper-{idx}"))
            .build()
            .map_err(|e| BytechipperError::ThreadPool(e.to_string()))?;

        log::debug!("rayon task pool: {} threads", pool.current_num_threads());

        Ok(Self { pool })
    }

    /// Create a pool sized by [`resolve_max_pool`].
    pub fn with_max_pool(max_pool: Option<NonZeroUsize>) -> BCResult<Self> {
        Self::new(resolve_max_pool(max_pool))
    }
}

impl TaskPool for RayonTaskPool {
    fn num_threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    fn run_batch(
        &self,
        tasks: &mut [&mut dyn JoinableTask],
    ) -> BCResult<()> {
        for task in tasks.iter_mut() {
            task.reset();
        }

        let mut results: Vec<BCResult<()>> = (0..tasks.len()).map(|_| Ok(())).collect();

        self.pool.scope(|scope| {
            for (index, (task, slot)) in tasks.iter_mut().zip(results.iter_mut()).enumerate() {
                scope.spawn(move |_| {
                    *slot = run_guarded(index, &mut **task);
                });
            }
        });

        results.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{concurrency::task_pool::test_tasks::check_pool_contract, testing::assert_send_sync};

    #[test]
    fn test_rayon_pool() {
        let pool = RayonTaskPool::new(3).unwrap();
        assert_send_sync(&pool);
        assert_eq!(pool.num_threads(), 3);
        check_pool_contract(&pool);
    }

    #[test]
    fn test_more_tasks_than_threads() {
        use crate::concurrency::{run_tasks, task_pool::test_tasks::ScriptedTask};

        let pool = RayonTaskPool::new(2).unwrap();
        let mut tasks: Vec<ScriptedTask> = (0..17).map(|_| ScriptedTask::default()).collect();
        run_tasks(&pool, &mut tasks).unwrap();
        assert!(tasks.iter().all(|t| t.runs == 1));
    }
}
