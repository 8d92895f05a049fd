//! # Pattern-Set Tokenizer

use crate::{
    errors::BCResult,
    pattern::{PatternSet, PatternSetBuilder},
    tokenizers::{Token, Tokenizer},
};

/// Greedy longest-match tokenizer over a [`PatternSet`].
///
/// At each position the longest match of any pattern becomes one token,
/// typed with every pattern accepting that length. Tokenizing stops at the
/// first position where no pattern makes progress; the rest of the buffer
/// is the remainder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternSetTokenizer {
    patterns: PatternSet,
}

impl PatternSetTokenizer {
    /// Wrap a compiled pattern set.
    pub fn new(patterns: PatternSet) -> Self {
        Self { patterns }
    }

    /// The pattern set.
    pub fn patterns(&self) -> &PatternSet {
        &self.patterns
    }
}

impl From<PatternSet> for PatternSetTokenizer {
    fn from(patterns: PatternSet) -> Self {
        Self::new(patterns)
    }
}

impl From<PatternSetBuilder> for PatternSetTokenizer {
    fn from(builder: PatternSetBuilder) -> Self {
        Self::new(builder.compile())
    }
}

impl Tokenizer for PatternSetTokenizer {
    fn num_token_types(&self) -> usize {
        self.patterns.num_patterns()
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, fields(len = buffer.len())))]
    fn tokenize<'b, 't>(
        &'t self,
        buffer: &'b [u8],
        tokens: &mut Vec<Token<'b, 't>>,
    ) -> BCResult<&'b [u8]> {
        let mut rest = buffer;
        while !rest.is_empty() {
            let Some(m) = self.patterns.long_match_length(rest) else {
                break;
            };
            if m.len == 0 {
                break;
            }
            let (text, tail) = rest.split_at(m.len);
            tokens.push(Token::new(text, m.types));
            rest = tail;
        }

        if !rest.is_empty() {
            log::trace!(
                "stopped with {} of {} bytes unmatched",
                rest.len(),
                buffer.len()
            );
        }

        Ok(rest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::RegexSpec;

    fn word_tokenizer() -> PatternSetTokenizer {
        PatternSetBuilder::default()
            .with_pattern(RegexSpec::plus(RegexSpec::byte_range(b'a'..=b'z')))
            .with_pattern(RegexSpec::plus(RegexSpec::byte(b' ')))
            .with_pattern(RegexSpec::literal("if"))
            .into()
    }

    #[test]
    fn test_greedy() {
        let tokenizer: PatternSetTokenizer = PatternSetBuilder::default()
            .with_pattern(RegexSpec::literal("a"))
            .with_pattern(RegexSpec::literal("ab"))
            .into();
        assert_eq!(tokenizer.num_token_types(), 2);

        let (tokens, rest) = tokenizer.tokenize_to_vec(b"ab").unwrap();
        assert_eq!(tokens, vec![Token::new(b"ab", &[1])]);
        assert!(rest.is_empty());

        let (tokens, rest) = tokenizer.tokenize_to_vec(b"a").unwrap();
        assert_eq!(tokens, vec![Token::new(b"a", &[0])]);
        assert!(rest.is_empty());

        let (tokens, rest) = tokenizer.tokenize_to_vec(b"aaba").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::new(b"a", &[0]),
                Token::new(b"ab", &[1]),
                Token::new(b"a", &[0]),
            ]
        );
        assert!(rest.is_empty());
    }

    #[test]
    fn test_ties_and_remainder() {
        let tokenizer = word_tokenizer();
        let (tokens, rest) = tokenizer.tokenize_to_vec(b"if  iffy 42").unwrap();

        assert_eq!(
            tokens,
            vec![
                Token::new(b"if", &[0, 2]),
                Token::new(b"  ", &[1]),
                Token::new(b"iffy", &[0]),
                Token::new(b" ", &[1]),
            ]
        );
        assert_eq!(rest, b"42");
    }

    #[test]
    fn test_stops_on_empty_match() {
        let tokenizer: PatternSetTokenizer = PatternSetBuilder::default()
            .with_pattern(RegexSpec::star(RegexSpec::byte(b'x')))
            .into();

        let (tokens, rest) = tokenizer.tokenize_to_vec(b"xxy").unwrap();
        assert_eq!(tokens, vec![Token::new(b"xx", &[0])]);
        assert_eq!(rest, b"y");
    }

    #[test]
    fn test_empty_buffer() {
        let tokenizer = word_tokenizer();
        let (tokens, rest) = tokenizer.tokenize_to_vec(b"").unwrap();
        assert!(tokens.is_empty());
        assert!(rest.is_empty());
    }
}
