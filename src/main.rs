use std::io::{self, Write};

use clap::Parser;
use tracing_subscriber::EnvFilter;
use webp_sticker::cli::Cli;
use webp_sticker::config::StickerConfig;
use webp_sticker::error::Result;
use webp_sticker::{pipeline, staging};

fn main() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    if let Err(err) = run(&cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let data = staging::read_all(io::stdin().lock())?;
    let webp = pipeline::run(cli.mode(), &data, &StickerConfig::default())?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(&webp)?;
    stdout.flush()?;
    Ok(())
}
