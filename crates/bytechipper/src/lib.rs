//! # `bytechipper` Byte Automata and Tokenizers
//!
//! Programmatic byte-level regular expressions, compiled to DFAs, and the
//! tokenizers built on them.
//!
//! See:
//! * [`pattern`] to build patterns from combinators and compile them.
//! * [`automata`] for the NFA / DFA machinery behind compilation.
//! * [`tokenizers`] to split byte buffers into typed tokens.
//! * [`concurrency`] for the task pools driving the parallel tokenizers.
//!
//! There is no textual regex syntax; patterns are [`pattern::RegexSpec`]
//! trees. Matching is over raw bytes; there is no Unicode awareness.
//!
//! ## Crate Features
#![doc = document_features::document_features!()]
//!
//! ## Compiling a Pattern
//!
//! ```rust
//! use bytechipper::pattern::RegexSpec;
//!
//! let ident = RegexSpec::concatenate([
//!     RegexSpec::charset(b"_abcdefghijklmnopqrstuvwxyz"),
//!     RegexSpec::star(RegexSpec::alternate([
//!         RegexSpec::charset(b"_abcdefghijklmnopqrstuvwxyz"),
//!         RegexSpec::byte_range(b'0'..=b'9'),
//!     ])),
//! ]);
//!
//! let regex = ident.compile();
//! assert!(regex.matches(b"snake_case_2"));
//! assert_eq!(regex.long_match_length(b"x1 = 3"), Some(2));
//! assert_eq!(regex.find_long(b"= foo_bar;"), Some(2..9));
//! ```
//!
//! ## Lexing with a Pattern Set
//!
//! ```rust
//! use bytechipper::pattern::{PatternSetBuilder, RegexSpec};
//! use bytechipper::tokenizers::{PatternSetTokenizer, Tokenizer};
//!
//! let tokenizer: PatternSetTokenizer = PatternSetBuilder::default()
//!     .with_pattern(RegexSpec::plus(RegexSpec::byte_range(b'a'..=b'z')))
//!     .with_pattern(RegexSpec::plus(RegexSpec::byte(b' ')))
//!     .with_pattern(RegexSpec::literal("let"))
//!     .into();
//!
//! let (tokens, rest) = tokenizer.tokenize_to_vec(b"let x").unwrap();
//! assert_eq!(tokens.len(), 3);
//! assert_eq!(tokens[0].types, &[0, 2]);
//! assert!(rest.is_empty());
//! ```
#![warn(missing_docs, unused)]

pub mod automata;
pub mod concurrency;
pub mod pattern;
pub mod tokenizers;
pub mod types;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

mod errors;

#[doc(inline)]
pub use errors::*;
