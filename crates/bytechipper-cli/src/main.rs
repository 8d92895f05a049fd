mod commands;
mod input_output;
mod logging;

use bytechipper::BCResult;
use clap::Parser;
use commands::Commands;

/// bytechipper-cli
#[derive(clap::Parser, Debug)]
pub struct Args {
    #[command(flatten)]
    logging: logging::LogArgs,

    /// Subcommand to run.
    #[clap(subcommand)]
    pub command: Commands,
}

fn main() -> BCResult<()> {
    let args = Args::parse();
    args.logging.setup_logging()?;

    args.command.run()
}
