use bytechipper::{BCResult, BytechipperError};
use stderrlog::{LogLevelNum, Timestamp};

/// Logging setup arg group.
///
/// Verbosity steps through the library's log levels:
/// * default - warnings only.
/// * `-v` - command statistics (input size, token counts, timings).
/// * `-vv` - automaton compilation statistics.
/// * `-vvv` - tokenizer phase details.
#[derive(clap::Args, Debug)]
pub struct LogArgs {
    /// Silence log messages.
    #[clap(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v, -vv, -vvv).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Enable timestamped logging.
    #[clap(long, global = true)]
    pub ts: bool,
}

impl LogArgs {
    /// The stderr log level selected by `-q` and `-v`.
    pub fn level(&self) -> LogLevelNum {
        if self.quiet {
            return LogLevelNum::Off;
        }
        match self.verbose {
            0 => LogLevelNum::Warn,
            1 => LogLevelNum::Info,
            2 => LogLevelNum::Debug,
            _ => LogLevelNum::Trace,
        }
    }

    /// Install the stderr logger.
    pub fn setup_logging(&self) -> BCResult<()> {
        stderrlog::new()
            .quiet(self.quiet)
            .verbosity(self.level())
            .timestamp(if self.ts {
                Timestamp::Second
            } else {
                Timestamp::Off
            })
            .init()
            .map_err(|e| BytechipperError::External(format!("logger setup failed: {e}")))
    }
}
