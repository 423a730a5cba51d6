use std::io;

use anyhow::Result;
use clap::Parser;

use norgate_cli::{logging, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    cli.execute(&mut out)
}
