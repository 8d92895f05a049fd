//! # Parallel Delimiter Tokenizer
//!
//! Produces exactly the output of [`SplitTokenizer`](crate::tokenizers::SplitTokenizer),
//! in two task batches:
//! 1. **hunt** - each task scans one contiguous shard of the buffer and
//!    records its delimiter offsets.
//! 2. **patch** - after a sequential prefix sum over the split counts,
//!    each task writes its `TEXT, DELIM` pairs into a disjoint, pre-sized
//!    region of the output.

use core::{num::NonZeroUsize, ops::Range};
use std::sync::Arc;

use crate::{
    concurrency::{JoinableTask, TaskPool, run_tasks, threads::shard_ranges},
    errors::BCResult,
    tokenizers::{SplitTokenType, Token, Tokenizer, split_tokenizer::split_pair},
};

/// A delimiter tokenizer which runs on a [`TaskPool`].
#[derive(Clone)]
pub struct ParallelSplitTokenizer {
    delimiter: u8,
    pool: Arc<dyn TaskPool>,
    num_tasks: NonZeroUsize,
}

impl core::fmt::Debug for ParallelSplitTokenizer {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        f.debug_struct("ParallelSplitTokenizer")
            .field("delimiter", &self.delimiter)
            .field("num_threads", &self.pool.num_threads())
            .field("num_tasks", &self.num_tasks)
            .finish()
    }
}

impl ParallelSplitTokenizer {
    /// Create a tokenizer splitting on `delimiter`.
    ///
    /// The buffer is sharded once per pool thread.
    pub fn new(
        delimiter: u8,
        pool: Arc<dyn TaskPool>,
    ) -> Self {
        let num_tasks = NonZeroUsize::new(pool.num_threads()).unwrap_or(NonZeroUsize::MIN);
        Self {
            delimiter,
            pool,
            num_tasks,
        }
    }

    /// Override the number of shards.
    pub fn with_num_tasks(
        mut self,
        num_tasks: NonZeroUsize,
    ) -> Self {
        self.num_tasks = num_tasks;
        self
    }

    /// The delimiter byte.
    pub fn delimiter(&self) -> u8 {
        self.delimiter
    }

    /// The number of shards per batch.
    pub fn num_tasks(&self) -> usize {
        self.num_tasks.get()
    }

    /// The underlying pool.
    pub fn pool(&self) -> &Arc<dyn TaskPool> {
        &self.pool
    }
}

/// Phase 1: find the delimiters in one shard.
struct HuntTask<'a> {
    buffer: &'a [u8],
    shard: Range<usize>,
    delimiter: u8,
    splits: Vec<usize>,
}

impl JoinableTask for HuntTask<'_> {
    fn reset(&mut self) {
        self.splits.clear();
    }

    fn run(&mut self) -> BCResult<()> {
        let base = self.shard.start;
        let haystack = &self.buffer[self.shard.clone()];
        self.splits
            .extend(memchr::memchr_iter(self.delimiter, haystack).map(|pos| base + pos));
        Ok(())
    }
}

/// Phase 2: write one shard's token pairs.
struct PatchTask<'b, 't, 'o> {
    buffer: &'b [u8],
    splits: &'o [usize],
    text_start: usize,
    out: &'o mut [Token<'b, 't>],
}

impl JoinableTask for PatchTask<'_, '_, '_> {
    fn reset(&mut self) {}

    fn run(&mut self) -> BCResult<()> {
        debug_assert_eq!(self.out.len(), 2 * self.splits.len());

        let mut start = self.text_start;
        for (pair, &pos) in self.out.chunks_exact_mut(2).zip(self.splits) {
            pair.copy_from_slice(&split_pair(self.buffer, start, pos));
            start = pos + 1;
        }
        Ok(())
    }
}

impl Tokenizer for ParallelSplitTokenizer {
    fn num_token_types(&self) -> usize {
        SplitTokenType::ALL.len()
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, fields(len = buffer.len())))]
    fn tokenize<'b, 't>(
        &'t self,
        buffer: &'b [u8],
        tokens: &mut Vec<Token<'b, 't>>,
    ) -> BCResult<&'b [u8]> {
        let mut hunters: Vec<HuntTask> = shard_ranges(buffer.len(), self.num_tasks)
            .into_iter()
            .map(|shard| HuntTask {
                buffer,
                shard,
                delimiter: self.delimiter,
                splits: Vec::new(),
            })
            .collect();
        run_tasks(self.pool.as_ref(), &mut hunters)?;

        let total: usize = hunters.iter().map(|h| h.splits.len()).sum();
        log::trace!("hunt: {} shards, {} splits", hunters.len(), total);

        let Some(last) = hunters.iter().rev().find_map(|h| h.splits.last().copied()) else {
            return Ok(buffer);
        };

        let base = tokens.len();
        tokens.resize(base + 2 * total, Token::default());

        let result = {
            let mut region = &mut tokens[base..];
            let mut text_start = 0;
            let mut patchers = Vec::with_capacity(hunters.len());
            for hunter in &hunters {
                let (out, tail) = core::mem::take(&mut region).split_at_mut(2 * hunter.splits.len());
                region = tail;
                patchers.push(PatchTask {
                    buffer,
                    splits: &hunter.splits,
                    text_start,
                    out,
                });
                if let Some(&pos) = hunter.splits.last() {
                    text_start = pos + 1;
                }
            }
            run_tasks(self.pool.as_ref(), &mut patchers)
        };

        if let Err(err) = result {
            log::debug!("patch failed; discarding {} partial tokens", 2 * total);
            tokens.truncate(base);
            return Err(err);
        }

        Ok(&buffer[last + 1..])
    }
}

#[cfg(test)]
mod tests {
    use core::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::{
        concurrency::InlineTaskPool,
        errors::BytechipperError,
        tokenizers::SplitTokenizer,
    };

    fn check_against_sequential(
        tokenizer: &ParallelSplitTokenizer,
        buffer: &[u8],
    ) {
        let sequential = SplitTokenizer::new(tokenizer.delimiter());
        let expected = sequential.tokenize_to_vec(buffer).unwrap();
        let actual = tokenizer.tokenize_to_vec(buffer).unwrap();
        assert_eq!(actual, expected, "{:?}", String::from_utf8_lossy(buffer));
    }

    #[test]
    fn test_matches_sequential_inline() {
        let pool: Arc<dyn TaskPool> = Arc::new(InlineTaskPool);
        let inputs: [&[u8]; 7] = [
            b"",
            b",",
            b"abc",
            b"a,b,,c",
            b",,,,,,,,,",
            b"the,quick,brown,fox,jumps,over,the,lazy,dog,",
            b"x,yy,zzz,wwww,vvvvv",
        ];
        for num_tasks in [1, 2, 3, 8, 64] {
            let tokenizer = ParallelSplitTokenizer::new(b',', pool.clone())
                .with_num_tasks(NonZeroUsize::new(num_tasks).unwrap());
            for input in inputs {
                check_against_sequential(&tokenizer, input);
            }
        }
    }

    #[cfg(feature = "rayon")]
    #[test]
    fn test_matches_sequential_rayon() {
        use crate::{concurrency::RayonTaskPool, testing::assert_send_sync};

        let text: Vec<u8> = (0..5000)
            .map(|i| if i % 7 == 0 || i % 11 == 0 { b'\n' } else { b'a' + (i % 26) as u8 })
            .collect();

        for threads in [1, 2, 3, 8] {
            let pool: Arc<dyn TaskPool> = Arc::new(RayonTaskPool::new(threads).unwrap());
            let tokenizer = ParallelSplitTokenizer::new(b'\n', pool);
            assert_send_sync(&tokenizer);
            assert_eq!(tokenizer.num_tasks(), threads);
            check_against_sequential(&tokenizer, &text);
        }
    }

    #[test]
    fn test_spans_borrow_buffer() {
        let pool: Arc<dyn TaskPool> = Arc::new(InlineTaskPool);
        let tokenizer =
            ParallelSplitTokenizer::new(b';', pool).with_num_tasks(NonZeroUsize::new(3).unwrap());
        let buffer = b"ab;cd;ef";
        let mut tokens = Vec::new();
        let rest = tokenizer.tokenize(buffer, &mut tokens).unwrap();

        assert_eq!(rest, b"ef");
        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens[2].text.as_ptr(), buffer[3..].as_ptr());
        assert_eq!(rest.as_ptr(), buffer[6..].as_ptr());
    }

    /// Runs batches inline, failing the `fail_on`-th batch after running it.
    struct FlakyPool {
        fail_on: usize,
        batches: AtomicUsize,
    }

    impl TaskPool for FlakyPool {
        fn num_threads(&self) -> usize {
            4
        }

        fn run_batch(
            &self,
            tasks: &mut [&mut dyn JoinableTask],
        ) -> BCResult<()> {
            InlineTaskPool.run_batch(tasks)?;
            if self.batches.fetch_add(1, Ordering::SeqCst) == self.fail_on {
                return Err(BytechipperError::TaskFailed {
                    task: 0,
                    message: "flaky".to_string(),
                });
            }
            Ok(())
        }
    }

    #[test]
    fn test_failure_restores_output() {
        for fail_on in [0, 1] {
            let pool = Arc::new(FlakyPool {
                fail_on,
                batches: AtomicUsize::new(0),
            });
            let tokenizer = ParallelSplitTokenizer::new(b',', pool);
            let mut tokens = vec![Token::default(); 2];

            let err = tokenizer.tokenize(b"a,b,c,d", &mut tokens).unwrap_err();
            assert!(matches!(err, BytechipperError::TaskFailed { .. }));
            assert_eq!(tokens.len(), 2);
        }
    }
}
