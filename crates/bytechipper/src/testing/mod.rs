//! # Testing Utilities
//!
//! Reference implementations used to cross-check the compiled automata.

mod naive_matcher;

#[doc(inline)]
pub use naive_matcher::*;

/// Compile-time check that a value is `Send + Sync`.
pub fn assert_send_sync<S: Send + Sync>(_: &S) {}
