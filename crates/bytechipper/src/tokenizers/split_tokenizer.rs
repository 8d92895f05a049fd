//! # Delimiter Tokenizer

use crate::{
    errors::BCResult,
    tokenizers::{SplitTokenType, Token, Tokenizer},
};

/// Emit the `TEXT, DELIM` token pair for a delimiter at `buffer[pos]`.
#[inline(always)]
pub(crate) fn split_pair<'b, 't>(
    buffer: &'b [u8],
    text_start: usize,
    pos: usize,
) -> [Token<'b, 't>; 2] {
    [
        Token::new(&buffer[text_start..pos], SplitTokenType::Text.types()),
        Token::new(&buffer[pos..pos + 1], SplitTokenType::Delim.types()),
    ]
}

/// Splits a buffer on a single delimiter byte.
///
/// Each delimiter yields a [`SplitTokenType::Text`] token for the run
/// before it (possibly empty) and a [`SplitTokenType::Delim`] token for the
/// delimiter itself. Text after the last delimiter is the remainder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitTokenizer {
    delimiter: u8,
}

impl SplitTokenizer {
    /// Create a tokenizer splitting on `delimiter`.
    pub fn new(delimiter: u8) -> Self {
        Self { delimiter }
    }

    /// The delimiter byte.
    pub fn delimiter(&self) -> u8 {
        self.delimiter
    }

    /// Split a buffer, appending to `tokens`.
    ///
    /// Unlike [`Tokenizer::tokenize`], this cannot fail, and the tokens
    /// do not borrow the tokenizer.
    ///
    /// ## Returns
    /// The text after the last delimiter.
    pub fn split<'b, 't>(
        &self,
        buffer: &'b [u8],
        tokens: &mut Vec<Token<'b, 't>>,
    ) -> &'b [u8] {
        let mut start = 0;
        for pos in memchr::memchr_iter(self.delimiter, buffer) {
            tokens.extend(split_pair(buffer, start, pos));
            start = pos + 1;
        }
        &buffer[start..]
    }
}

impl Tokenizer for SplitTokenizer {
    fn num_token_types(&self) -> usize {
        SplitTokenType::ALL.len()
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, fields(len = buffer.len())))]
    fn tokenize<'b, 't>(
        &'t self,
        buffer: &'b [u8],
        tokens: &mut Vec<Token<'b, 't>>,
    ) -> BCResult<&'b [u8]> {
        Ok(self.split(buffer, tokens))
    }
}
