use std::{
    fs::File,
    io::{BufWriter, Read, Write},
};

use bytechipper::BCResult;

fn squash_standard_io(path: &Option<String>) -> Option<&str> {
    match path.as_deref() {
        Some("-") | None => None,
        Some(p) => Some(p),
    }
}

/// Input argument group.
#[derive(clap::Args, Debug)]
pub struct InputArgs {
    /// Optional input file; "-" may be used to indicate stdin.
    #[clap(long, default_value = None)]
    pub input: Option<String>,
}

impl InputArgs {
    /// Read the whole input into memory.
    pub fn read_all(&self) -> BCResult<Vec<u8>> {
        let mut buffer = Vec::new();
        match squash_standard_io(&self.input) {
            None => std::io::stdin().lock().read_to_end(&mut buffer)?,
            Some(p) => File::open(p)?.read_to_end(&mut buffer)?,
        };
        log::info!("read {} bytes", buffer.len());
        Ok(buffer)
    }
}

/// Output argument group.
#[derive(clap::Args, Debug)]
pub struct OutputArgs {
    /// Optional output file; "-" may be used to indicate stdout.
    #[clap(long, default_value = None)]
    pub output: Option<String>,
}

impl OutputArgs {
    /// Open a writer for the output.
    pub fn open_writer(&self) -> BCResult<Box<dyn Write>> {
        Ok(match squash_standard_io(&self.output) {
            Some(p) => Box::new(BufWriter::new(File::create(p)?)),
            None => Box::new(BufWriter::new(std::io::stdout().lock())),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_squash_standard_io() {
        assert_eq!(squash_standard_io(&None), None);
        assert_eq!(squash_standard_io(&Some("-".to_string())), None);
        assert_eq!(squash_standard_io(&Some("a.txt".to_string())), Some("a.txt"));
    }

    #[test]
    fn test_missing_input_is_io_error() {
        let args = InputArgs {
            input: Some("/nonexistent/bytechipper/input.txt".to_string()),
        };
        let err = args.read_all().unwrap_err();
        assert!(matches!(err, bytechipper::BytechipperError::Io(_)));
    }
}
