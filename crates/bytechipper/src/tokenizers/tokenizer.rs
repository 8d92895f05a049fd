//! # Tokenizer Trait

use crate::{errors::BCResult, tokenizers::Token};

/// A splitter of byte buffers into [`Token`]s.
///
/// Token text and the returned remainder borrow only the buffer; token
/// types may borrow the tokenizer.
pub trait Tokenizer: Send + Sync {
    /// The number of distinct token type indices this tokenizer reports.
    fn num_token_types(&self) -> usize;

    /// Tokenize a buffer, appending to `tokens`.
    ///
    /// ## Returns
    /// The unconsumed suffix of `buffer`.
    ///
    /// On error, `tokens` is left at its original length.
    fn tokenize<'b, 't>(
        &'t self,
        buffer: &'b [u8],
        tokens: &mut Vec<Token<'b, 't>>,
    ) -> BCResult<&'b [u8]>;

    /// Tokenize a buffer into a new vector.
    ///
    /// ## Returns
    /// `(tokens, remainder)`.
    fn tokenize_to_vec<'b, 't>(
        &'t self,
        buffer: &'b [u8],
    ) -> BCResult<(Vec<Token<'b, 't>>, &'b [u8])> {
        let mut tokens = Vec::new();
        let rest = self.tokenize(buffer, &mut tokens)?;
        Ok((tokens, rest))
    }
}
