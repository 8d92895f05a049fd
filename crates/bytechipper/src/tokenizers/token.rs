//! # Tokens

use crate::types::TokenTypeId;

/// A typed span of a source buffer.
///
/// `'b` is the lifetime of the tokenized buffer; `'t` is the lifetime of
/// the type table, which for pattern-set tokens is owned by the tokenizer.
/// Delimiter tokens carry `'static` types, so they are bound only by
/// their buffer.
///
/// A token cannot outlive its buffer:
///
/// ```compile_fail
/// use bytechipper::tokenizers::SplitTokenizer;
///
/// let buffer = b"a,b".to_vec();
/// let mut tokens = Vec::new();
/// SplitTokenizer::new(b',').split(&buffer, &mut tokens);
/// drop(buffer);
/// assert_eq!(tokens[0].text, b"a");
/// ```
///
/// Nor the tokenizer whose types it borrows:
///
/// ```compile_fail
/// use bytechipper::{
///     pattern::{PatternSetBuilder, RegexSpec},
///     tokenizers::{PatternSetTokenizer, Tokenizer},
/// };
///
/// let buffer = b"ab".to_vec();
/// let tokenizer: PatternSetTokenizer = PatternSetBuilder::default()
///     .with_pattern(RegexSpec::literal("ab"))
///     .into();
/// let (tokens, _) = tokenizer.tokenize_to_vec(&buffer).unwrap();
/// drop(tokenizer);
/// assert_eq!(tokens[0].types, &[0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Token<'b, 't> {
    /// The matched bytes.
    pub text: &'b [u8],

    /// The token's type indices.
    ///
    /// Pattern-set tokens carry every pattern which accepted the span.
    pub types: &'t [TokenTypeId],
}

impl<'b, 't> Token<'b, 't> {
    /// Create a token.
    pub fn new(
        text: &'b [u8],
        types: &'t [TokenTypeId],
    ) -> Self {
        Self { text, types }
    }

    /// The span length.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Is the span empty?
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Does the token carry `token_type`?
    pub fn has_type(
        &self,
        token_type: TokenTypeId,
    ) -> bool {
        self.types.contains(&token_type)
    }
}
