use std::{io::Write, num::NonZeroUsize, sync::Arc, time::Instant};

use bytechipper::{
    BCResult,
    tokenizers::{SplitTokenType, SplitTokenizerOptions, Tokenizer},
};

use crate::{
    commands::{write_remainder, write_tokens},
    input_output::{InputArgs, OutputArgs},
};

/// Parse a delimiter byte.
///
/// Accepts a single ASCII character, one of the escapes `\n`, `\t`, `\r`,
/// `\0`, `\\`, or a hex byte such as `0x1e`.
pub fn parse_delimiter(s: &str) -> Result<u8, String> {
    match s {
        "\\n" => return Ok(b'\n'),
        "\\t" => return Ok(b'\t'),
        "\\r" => return Ok(b'\r'),
        "\\0" => return Ok(0),
        "\\\\" => return Ok(b'\\'),
        _ => {}
    }

    if let Some(hex) = s.strip_prefix("0x") {
        return u8::from_str_radix(hex, 16).map_err(|e| format!("bad hex byte {s:?}: {e}"));
    }

    match s.as_bytes() {
        [byte] => Ok(*byte),
        _ => Err(format!("delimiter must be a single byte: {s:?}")),
    }
}

/// Args for the split command.
#[derive(clap::Args, Debug)]
pub struct SplitArgs {
    /// The delimiter byte.
    #[arg(short, long, default_value = "\\n", value_parser = parse_delimiter)]
    delimiter: u8,

    /// Use the parallel tokenizer.
    #[arg(long)]
    parallel: bool,

    /// Max worker pool size for --parallel.
    #[arg(long)]
    max_pool: Option<NonZeroUsize>,

    /// Only print token counts.
    #[arg(long)]
    summary: bool,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl SplitArgs {
    /// Run the split command.
    pub fn run(&self) -> BCResult<()> {
        let tokenizer: Arc<dyn Tokenizer> = SplitTokenizerOptions::default()
            .with_delimiter(self.delimiter)
            .with_parallel(self.parallel)
            .with_max_pool(self.max_pool)
            .build()?;

        let buffer = self.input.read_all()?;
        let mut writer = self.output.open_writer()?;

        let t0 = Instant::now();
        let (tokens, rest) = tokenizer.tokenize_to_vec(&buffer)?;
        log::info!(
            "split {} bytes into {} tokens in {:?}",
            buffer.len(),
            tokens.len(),
            t0.elapsed()
        );

        if self.summary {
            let delims = tokens.len() / 2;
            writeln!(writer, "delimiters\t{delims}")?;
            writeln!(writer, "remainder\t{}", rest.len())?;
        } else {
            let end = write_tokens(&mut writer, &tokens, |t| {
                t.types
                    .first()
                    .and_then(|&id| SplitTokenType::from_id(id))
                    .map_or("?", SplitTokenType::name)
                    .to_string()
            })?;
            write_remainder(&mut writer, end, rest)?;
        }

        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_delimiter() {
        assert_eq!(parse_delimiter(","), Ok(b','));
        assert_eq!(parse_delimiter("\\n"), Ok(b'\n'));
        assert_eq!(parse_delimiter("\\t"), Ok(b'\t'));
        assert_eq!(parse_delimiter("0x1e"), Ok(0x1e));
        assert!(parse_delimiter("0xzz").is_err());
        assert!(parse_delimiter("ab").is_err());
        assert!(parse_delimiter("").is_err());
    }
}
