use clap::Parser;
use wordgen::config::Cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Cli::parse().into_config()?;

    // Runs the TUI; the terminal is restored before this returns
    wordgen::run(config)?;

    Ok(())
}
