//! C++ Bundler - Main Entry Point
//!
//! Bundles a C++ source tree into a single file.

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::{debug, error};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cpp_bundler::cli::Cli;
use cpp_bundler::{BundleConfig, BundleError, Bundler};

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    if let Err(e) = init_tracing(cli.verbose) {
        eprintln!("Failed to initialize logging: {e}");
    }

    // CLI values override the environment
    let config = cli.into_config(BundleConfig::from_env());

    if let Ok(json) = serde_json::to_string(&config) {
        debug!(config = %json, "Effective configuration");
    }

    let base_dir = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(source) => {
            return fail(BundleError::Root {
                path: config.root_dir.clone(),
                source,
            })
        }
    };

    match Bundler::new(config, base_dir).run() {
        Ok(report) => {
            if let Ok(json) = serde_json::to_string(&report) {
                debug!(report = %json, "Run report");
            }
            ExitCode::SUCCESS
        }
        Err(e) => fail(e),
    }
}

fn fail(e: BundleError) -> ExitCode {
    error!("{e}");
    ExitCode::from(e.exit_code())
}

/// Log to stderr. `RUST_LOG` wins over `--verbose`; `BUNDLER_LOG_FORMAT=json`
/// selects JSON lines.
fn init_tracing(verbose: bool) -> Result<()> {
    let default_level = if verbose { "cpp_bundler=debug" } else { "cpp_bundler=info" };
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| default_level.into()),
    );
    let json = std::env::var("BUNDLER_LOG_FORMAT")
        .map(|f| f.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(json.then(|| {
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
        }))
        .with((!json).then(|| {
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_target(false)
                .with_writer(std::io::stderr)
        }))
        .try_init()?;

    Ok(())
}
