use std::io::Write;

use bytechipper::{BCResult, tokenizers::Token};

use crate::commands::{lex::LexArgs, split::SplitArgs};

pub mod lex;
pub mod split;

/// Subcommands for bytechipper-cli
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Split input on a delimiter byte.
    Split(SplitArgs),

    /// Lex input with the built-in word/number/space/punctuation lexicon.
    Lex(LexArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> BCResult<()> {
        match self {
            Commands::Split(cmd) => cmd.run(),
            Commands::Lex(cmd) => cmd.run(),
        }
    }
}

/// Write one `KIND<TAB>start..end<TAB>escaped-text` line per token.
///
/// Tokens must be contiguous from the start of the buffer.
///
/// ## Returns
/// The offset just past the last token.
pub fn write_tokens(
    writer: &mut dyn Write,
    tokens: &[Token],
    kind_name: impl Fn(&Token) -> String,
) -> std::io::Result<usize> {
    let mut offset = 0;
    for token in tokens {
        let end = offset + token.len();
        writeln!(
            writer,
            "{}\t{}..{}\t{}",
            kind_name(token),
            offset,
            end,
            token.text.escape_ascii()
        )?;
        offset = end;
    }
    Ok(offset)
}

/// Write the trailing unconsumed bytes, if any.
pub fn write_remainder(
    writer: &mut dyn Write,
    offset: usize,
    rest: &[u8],
) -> std::io::Result<()> {
    if !rest.is_empty() {
        writeln!(
            writer,
            "REST\t{}..{}\t{}",
            offset,
            offset + rest.len(),
            rest.escape_ascii()
        )?;
    }
    Ok(())
}
