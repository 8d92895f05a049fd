use core::num::NonZeroUsize;
use std::sync::Arc;

use crate::{
    concurrency::{TaskPool, default_task_pool},
    errors::BCResult,
    tokenizers::{ParallelSplitTokenizer, SplitTokenizer, Tokenizer},
};

/// Options for configuring a delimiter [`Tokenizer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitTokenizerOptions {
    /// The delimiter byte.
    pub delimiter: u8,

    /// Whether to use the parallel tokenizer.
    pub parallel: bool,

    /// Upper bound on the worker pool size.
    ///
    /// `None` uses the system's available parallelism.
    pub max_pool: Option<NonZeroUsize>,
}

impl Default for SplitTokenizerOptions {
    fn default() -> Self {
        Self {
            delimiter: b'\n',
            parallel: false,
            max_pool: None,
        }
    }
}

impl SplitTokenizerOptions {
    /// Gets the configured delimiter.
    pub fn delimiter(&self) -> u8 {
        self.delimiter
    }

    /// Sets the configured delimiter.
    pub fn set_delimiter(
        &mut self,
        delimiter: u8,
    ) {
        self.delimiter = delimiter;
    }

    /// Sets the configured delimiter.
    pub fn with_delimiter(
        mut self,
        delimiter: u8,
    ) -> Self {
        self.set_delimiter(delimiter);
        self
    }

    /// Gets the configured parallelism value.
    ///
    /// Enabling parallelism will request the threaded implementation.
    pub fn parallel(&self) -> bool {
        self.parallel
    }

    /// Sets the configured parallelism value.
    ///
    /// Enabling parallelism will request the threaded implementation.
    pub fn set_parallel(
        &mut self,
        parallel: bool,
    ) {
        self.parallel = parallel;
    }

    /// Sets the configured parallelism value.
    ///
    /// Enabling parallelism will request the threaded implementation.
    pub fn with_parallel(
        mut self,
        parallel: bool,
    ) -> Self {
        self.set_parallel(parallel);
        self
    }

    /// Gets the configured max pool size.
    pub fn max_pool(&self) -> Option<NonZeroUsize> {
        self.max_pool
    }

    /// Sets the configured max pool size.
    pub fn set_max_pool(
        &mut self,
        max_pool: Option<NonZeroUsize>,
    ) {
        self.max_pool = max_pool;
    }

    /// Sets the configured max pool size.
    pub fn with_max_pool(
        mut self,
        max_pool: Option<NonZeroUsize>,
    ) -> Self {
        self.set_max_pool(max_pool);
        self
    }

    /// Build a [`Tokenizer`].
    ///
    /// A parallel tokenizer gets a fresh
    /// [`default_task_pool`](crate::concurrency::default_task_pool).
    pub fn build(&self) -> BCResult<Arc<dyn Tokenizer>> {
        if self.parallel {
            let pool = default_task_pool(self.max_pool)?;
            Ok(self.build_with_pool(pool))
        } else {
            Ok(Arc::new(SplitTokenizer::new(self.delimiter)))
        }
    }

    /// Build a [`Tokenizer`] on an existing pool.
    ///
    /// The pool is only used when [`parallel`](Self::parallel) is set.
    pub fn build_with_pool(
        &self,
        pool: Arc<dyn TaskPool>,
    ) -> Arc<dyn Tokenizer> {
        if self.parallel {
            Arc::new(ParallelSplitTokenizer::new(self.delimiter, pool))
        } else {
            Arc::new(SplitTokenizer::new(self.delimiter))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::concurrency::InlineTaskPool;

    #[test]
    fn test_accessors() {
        let mut options = SplitTokenizerOptions::default();
        assert_eq!(options.delimiter(), b'\n');
        assert!(!options.parallel());
        assert_eq!(options.max_pool(), None);

        options.set_delimiter(b',');
        options.set_parallel(true);
        options.set_max_pool(NonZeroUsize::new(2));
        assert_eq!(
            options,
            SplitTokenizerOptions::default()
                .with_delimiter(b',')
                .with_parallel(true)
                .with_max_pool(NonZeroUsize::new(2))
        );
    }

    #[test]
    fn test_build() {
        let buffer = b"a,b,,c";

        for parallel in [false, true] {
            let options = SplitTokenizerOptions::default()
                .with_delimiter(b',')
                .with_parallel(parallel)
                .with_max_pool(NonZeroUsize::new(2));

            let tokenizer = options.build().unwrap();
            assert_eq!(tokenizer.num_token_types(), 2);
            let (tokens, rest) = tokenizer.tokenize_to_vec(buffer).unwrap();
            assert_eq!(tokens.len(), 6);
            assert_eq!(rest, b"c");

            let tokenizer = options.build_with_pool(Arc::new(InlineTaskPool));
            let (tokens, rest) = tokenizer.tokenize_to_vec(buffer).unwrap();
            assert_eq!(tokens.len(), 6);
            assert_eq!(rest, b"c");
        }
    }
}
