//! # Concurrency Utilities
//!
//! The [`TaskPool`] contract consumed by the parallel tokenizers, and its
//! implementations:
//! * [`InlineTaskPool`] - runs tasks on the calling thread.
//! * [`RayonTaskPool`] - runs tasks on a dedicated ``rayon`` pool (feature ``rayon``).

mod task_pool;
pub mod threads;

#[cfg(feature = "rayon")]
mod rayon_task_pool;

use core::num::NonZeroUsize;
use std::sync::Arc;

#[cfg(feature = "rayon")]
#[doc(inline)]
pub use rayon_task_pool::*;
#[doc(inline)]
pub use task_pool::*;

use crate::errors::BCResult;

/// Build the default [`TaskPool`] for this build configuration.
///
/// With ``rayon``, a [`RayonTaskPool`] sized by [`threads::resolve_max_pool`];
/// otherwise an [`InlineTaskPool`].
pub fn default_task_pool(max_pool: Option<NonZeroUsize>) -> BCResult<Arc<dyn TaskPool>> {
    cfg_if::cfg_if! {
        if #[cfg(feature = "rayon")] {
            Ok(Arc::new(RayonTaskPool::with_max_pool(max_pool)?))
        } else {
            let _ = max_pool;
            Ok(Arc::new(InlineTaskPool))
        }
    }
}
