// src/bin/cli.rs
use clan_analyzer::cli::{self, Args};
use clap::Parser;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    clan_analyzer::log::init(&args.log_path());
    cli::run(&args)?;
    Ok(())
}
