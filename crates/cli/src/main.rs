use anyhow::Result;
use clap::Parser;
use color_onboard_cli::cli::Cli;
use env_logger::init;

fn main() -> Result<()> {
    init();
    Cli::parse().run()
}
