//! `lazymole [config-dir]`

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info, Level};

/// Minimum hydraulic resistance of heterogeneous conductivity fields.
#[derive(Parser)]
#[command(name = "lazymole")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Minimum hydraulic resistance of heterogeneous fields", long_about = None)]
struct Cli {
    /// Directory holding config.json
    #[arg(default_value = ".")]
    config_dir: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "LAZYMOLE_LOG", default_value = "info")]
    log_level: Level,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = tracing_subscriber::fmt()
        .with_max_level(cli.log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
    {
        eprintln!("cannot install logger: {e}");
    }

    info!("The Lazy Mole {}", env!("CARGO_PKG_VERSION"));
    info!("computing minimum hydraulic resistance of a heterogeneous field");

    match mole_cli::execute(&cli.config_dir) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
