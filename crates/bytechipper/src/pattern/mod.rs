//! # Patterns
//!
//! Programmatic byte patterns and their compiled matchers:
//! * [`RegexSpec`] - the combinator tree.
//! * [`CompiledRegex`] - a single compiled pattern.
//! * [`PatternSet`] - many patterns matched in one pass, built by a [`PatternSetBuilder`].

mod compiled_regex;
mod pattern_set;
mod regex_spec;

#[doc(inline)]
pub use compiled_regex::*;
#[doc(inline)]
pub use pattern_set::*;
#[doc(inline)]
pub use regex_spec::*;
