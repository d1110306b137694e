//! Binary entrypoint for chromasampler.
//!
//! Delegates all logic to the library crate; no local modules here.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt};

/// Simple CLI
#[derive(Debug, Parser)]
#[command(name = "chromasampler", about = "Finds the average color of an image")]
struct Cli {
    /// Path to the image
    #[arg(short, long, value_name = "FILE")]
    file: PathBuf,

    /// Also print the average as rgb(r, g, b)
    #[arg(short, long)]
    rgb: bool,

    /// Print elapsed time for the averaging step (ms)
    #[arg(short, long)]
    time: bool,

    /// Emit a gradient of N darkened shades of the average color
    #[arg(
        short = 'n',
        long,
        value_name = "N",
        num_args = 0..=1,
        default_missing_value = "10"
    )]
    shades: Option<u32>,

    /// Increase log verbosity (repeatable)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbosity: u8) {
    // map -v to log level
    let level = match verbosity {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let filter = EnvFilter::from_default_env()
        .add_directive(format!("chromasampler={}", level).parse().unwrap());
    fmt().with_env_filter(filter).with_target(false).init();
}

fn main() -> Result<()> {
    // Usage errors exit 1 rather than clap's default 2; help/version stay 0.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = if err.use_stderr() { 1 } else { 0 };
            err.print().expect("write clap message");
            std::process::exit(code);
        }
    };
    init_tracing(cli.verbose);

    let image = chromasampler::decode::decode(&cli.file)
        .with_context(|| format!("loading image from {}", cli.file.display()))?;

    let start = Instant::now();
    let average = chromasampler::average::average(image).context("averaging pixels")?;
    let elapsed = start.elapsed();

    if cli.rgb {
        println!("{average}");
    }
    println!("{}", average.to_hex());

    if let Some(count) = cli.shades {
        let palette = chromasampler::shade::shades(average, count);
        // The list is darkest-first; shade 0 is the base color on screen.
        for (k, shade) in palette.iter().rev().enumerate() {
            println!("Shade {k}: {shade}");
            println!("Shade {k}: {}", shade.to_hex());
        }
    }

    if cli.time {
        println!("Elapsed time: {} ms", elapsed.as_millis());
    }

    Ok(())
}
