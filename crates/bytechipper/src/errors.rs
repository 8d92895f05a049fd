//! # Error Types

/// Errors from bytechipper operations.
///
/// Compilation and matching are total over well-formed automata;
/// the only runtime failures come from the task pool which drives
/// the parallel tokenizers.
#[derive(Debug, thiserror::Error)]
pub enum BytechipperError {
    /// A worker task reported a failure.
    #[error("task {task} failed: {message}")]
    TaskFailed {
        /// The submission index of the failing task.
        task: usize,

        /// The task's failure description.
        message: String,
    },

    /// A worker task panicked.
    #[error("task {task} panicked: {message}")]
    TaskPanicked {
        /// The submission index of the panicking task.
        task: usize,

        /// The panic payload, when it was a string.
        message: String,
    },

    /// The thread pool could not be constructed.
    #[error("thread pool error: {0}")]
    ThreadPool(String),

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Error from an external component.
    #[error("{0}")]
    External(String),
}

impl BytechipperError {
    /// Build a [`BytechipperError::TaskPanicked`] from a caught panic payload.
    pub fn from_panic(
        task: usize,
        payload: &(dyn core::any::Any + Send),
    ) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "<non-string panic payload>".to_string()
        };
        Self::TaskPanicked { task, message }
    }
}

/// Result type for bytechipper operations.
pub type BCResult<T> = core::result::Result<T, BytechipperError>;
