//! `archigrid` binary: lays out one diagram file and exits non-zero on failure.

use std::process::ExitCode;

use clap::Parser;
use log::{LevelFilter, debug, info, warn};

use archigrid_cli::{Args, error_adapter::render_reports};

fn main() -> ExitCode {
    miette::set_panic_hook();

    let args = Args::parse();
    init_logger(&args.log_level);
    debug!(args:?; "Parsed arguments");

    match archigrid_cli::run(&args) {
        Ok(()) => {
            info!("Layout written");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprint!("{}", render_reports(&err));
            ExitCode::FAILURE
        }
    }
}

/// Logs at `level`, or at `info` if it does not name a level.
/// `RUST_LOG` module filters still apply on top.
fn init_logger(level: &str) {
    let parsed = level.parse::<LevelFilter>().ok();

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(parsed.unwrap_or(LevelFilter::Info))
        .init();

    if parsed.is_none() {
        warn!(log_level = level; "Unknown log level, using info");
    }
}
