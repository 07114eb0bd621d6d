//! Equipment Dashboard - Main Entry Point
//!
//! Command line client for the chemical equipment CSV backend

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

use equipment_dashboard::app::application::run_app;
use equipment_dashboard::app::cli::Cli;
use equipment_dashboard::connection::{DashboardConfig, LoggingConfig, load_config, load_config_from};
use equipment_dashboard::constants::API_URL_ENV;
use equipment_dashboard::helpers::get_or_create_data_dir;

/// Install stderr logging, plus a daily file when configured
fn init_tracing(logging: &LoggingConfig) -> anyhow::Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let (file_layer, guard) = if logging.file {
        let dir = get_or_create_data_dir()?.join("logs");
        let appender = tracing_appender::rolling::daily(dir, "equipment-dashboard.log");
        let (writer, guard) = tracing_appender::non_blocking(appender);
        (
            Some(fmt::layer().with_ansi(false).with_writer(writer)),
            Some(guard),
        )
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr))
        .with(file_layer)
        .try_init()?;

    Ok(guard)
}

fn load(cli: &Cli) -> anyhow::Result<DashboardConfig> {
    let config = match &cli.config {
        Some(path) => load_config_from(path)?,
        None => load_config()?,
    };
    Ok(config
        .override_base_url(std::env::var(API_URL_ENV).ok())
        .override_base_url(cli.api_url.clone()))
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let _guard = match init_tracing(&config.logging) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e:#}");
            None
        }
    };

    tracing::info!("Starting Equipment Dashboard...");

    match run_app(cli, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Command failed");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
