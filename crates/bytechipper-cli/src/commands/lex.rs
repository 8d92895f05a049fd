use std::{io::Write, time::Instant};

use bytechipper::{
    BCResult,
    pattern::{PatternSetBuilder, RegexSpec},
    tokenizers::{PatternSetTokenizer, Tokenizer},
};

use crate::{
    commands::{write_remainder, write_tokens},
    input_output::{InputArgs, OutputArgs},
};

/// The built-in lexicon, in token type order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lexeme {
    /// ASCII letters, digits and `_`, starting with a letter or `_`.
    Word,
    /// Decimal digits, with an optional fraction.
    Number,
    /// Runs of spaces, tabs and line breaks.
    Whitespace,
    /// A single ASCII punctuation byte.
    Punct,
}

impl Lexeme {
    pub const ALL: [Lexeme; 4] = [Self::Word, Self::Number, Self::Whitespace, Self::Punct];

    /// A short display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Word => "WORD",
            Self::Number => "NUMBER",
            Self::Whitespace => "SPACE",
            Self::Punct => "PUNCT",
        }
    }

    /// The pattern for this lexeme.
    pub fn spec(self) -> RegexSpec {
        let digit = RegexSpec::byte_range(b'0'..=b'9');
        match self {
            Self::Word => {
                let head = RegexSpec::alternate([
                    RegexSpec::byte_range(b'a'..=b'z'),
                    RegexSpec::byte_range(b'A'..=b'Z'),
                    RegexSpec::byte(b'_'),
                ]);
                let tail = RegexSpec::alternate([head.clone(), digit]);
                RegexSpec::concatenate([head, RegexSpec::star(tail)])
            }
            Self::Number => RegexSpec::concatenate([
                RegexSpec::plus(digit.clone()),
                RegexSpec::optional(RegexSpec::concatenate([
                    RegexSpec::byte(b'.'),
                    RegexSpec::plus(digit),
                ])),
            ]),
            Self::Whitespace => RegexSpec::plus(RegexSpec::charset(" \t\r\n")),
            Self::Punct => {
                RegexSpec::Charset((0..=u8::MAX).filter(u8::is_ascii_punctuation).collect())
            }
        }
    }

    /// Build the lexicon tokenizer.
    pub fn tokenizer() -> PatternSetTokenizer {
        Self::ALL
            .iter()
            .map(|lexeme| lexeme.spec())
            .collect::<PatternSetBuilder>()
            .into()
    }
}

/// Args for the lex command.
#[derive(clap::Args, Debug)]
pub struct LexArgs {
    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl LexArgs {
    /// Run the lex command.
    pub fn run(&self) -> BCResult<()> {
        let t0 = Instant::now();
        let tokenizer = Lexeme::tokenizer();
        log::info!(
            "compiled lexicon: {} states in {:?}",
            tokenizer.patterns().num_states(),
            t0.elapsed()
        );

        let buffer = self.input.read_all()?;
        let mut writer = self.output.open_writer()?;

        let t0 = Instant::now();
        let (tokens, rest) = tokenizer.tokenize_to_vec(&buffer)?;
        log::info!(
            "lexed {} of {} bytes into {} tokens in {:?}",
            buffer.len() - rest.len(),
            buffer.len(),
            tokens.len(),
            t0.elapsed()
        );
        if !rest.is_empty() {
            log::warn!(
                "stopped at byte {}: no lexeme matches",
                buffer.len() - rest.len()
            );
        }

        let end = write_tokens(&mut writer, &tokens, |t| {
            t.types
                .iter()
                .map(|&id| Lexeme::ALL[id].name())
                .collect::<Vec<_>>()
                .join("|")
        })?;
        write_remainder(&mut writer, end, rest)?;

        writer.flush()?;
        Ok(())
    }
}
