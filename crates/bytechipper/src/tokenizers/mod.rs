//! # Tokenizers
//!
//! Every [`Tokenizer`] appends borrowed [`Token`]s to an output vector
//! and returns the unconsumed suffix of its input.
//!
//! * [`SplitTokenizer`] - split on a delimiter byte.
//! * [`ParallelSplitTokenizer`] - the same, sharded over a [`TaskPool`](crate::concurrency::TaskPool).
//! * [`PatternSetTokenizer`] - greedy longest match over a [`PatternSet`](crate::pattern::PatternSet).
//!
//! ## Example
//!
//! ```rust
//! use bytechipper::tokenizers::{SplitTokenType, SplitTokenizerOptions, Tokenizer};
//!
//! let tokenizer = SplitTokenizerOptions::default()
//!     .with_delimiter(b',')
//!     .build()
//!     .unwrap();
//!
//! let (tokens, rest) = tokenizer.tokenize_to_vec(b"a,b,,c").unwrap();
//! assert_eq!(tokens.len(), 6);
//! assert_eq!(tokens[4].text, b"");
//! assert_eq!(tokens[5].types, SplitTokenType::Delim.types());
//! assert_eq!(rest, b"c");
//! ```

mod parallel_split_tokenizer;
mod pattern_set_tokenizer;
mod split_token_type;
mod split_tokenizer;
mod token;
mod tokenizer;
mod tokenizer_options;

#[doc(inline)]
pub use parallel_split_tokenizer::*;
#[doc(inline)]
pub use pattern_set_tokenizer::*;
#[doc(inline)]
pub use split_token_type::*;
#[doc(inline)]
pub use split_tokenizer::*;
#[doc(inline)]
pub use token::*;
#[doc(inline)]
pub use tokenizer::*;
#[doc(inline)]
pub use tokenizer_options::*;
