use anyhow::Result;
use clap::Parser;

use steamfetch::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.run()
}
