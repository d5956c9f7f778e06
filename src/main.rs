//! spex-stats CLI

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use spex_stats::SpectrumPair;

#[derive(Parser)]
#[command(name = "spex-stats")]
#[command(about = "Evaluate the fit statistic of a data/model spectrum pair")]
#[command(version)]
struct Cli {
    /// Spectrum pair (JSON with data_y, model_y and optional statistic)
    input: PathBuf,

    /// Log verbosity level (trace, debug, info, warn, error)
    #[arg(long, env = "SPEX_LOG", default_value = "warn")]
    log_level: tracing::Level,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .init();

    let pair = match SpectrumPair::load_json(&cli.input) {
        Ok(pair) => pair,
        Err(e) => {
            tracing::error!(path = %cli.input.display(), error = %e, "failed to load spectrum pair");
            eprintln!("error: {}", e);
            return ExitCode::from(1);
        }
    };
    tracing::info!(
        name = pair.name.as_deref().unwrap_or("-"),
        bins = pair.data_y.len(),
        "spectrum pair loaded"
    );

    match pair.evaluate() {
        Ok(value) => {
            if !value.is_finite() {
                tracing::warn!(value, "statistic is not finite; fit diverged");
            }
            tracing::info!(statistic = pair.statistic.name(), value, "evaluated");
            println!("{}", value);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "evaluation failed");
            eprintln!("error: {}", e);
            ExitCode::from(1)
        }
    }
}
