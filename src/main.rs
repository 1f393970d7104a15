//! Bootstrap binary: downloads the latest launcher build and promotes it
//! into the binaries directory.

use anyhow::{Context, Result};
use launcher_bootstrap::config::BootstrapConfig;
use launcher_bootstrap::downloader::{self, Downloader};
use launcher_bootstrap::error::BootstrapError;
use launcher_bootstrap::launch::LogHandoff;
use launcher_bootstrap::presenter::LogPresenter;
use log::{error, info, warn};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("bootstrap.json"));

    let runtime = match tokio::runtime::Builder::new_multi_thread().enable_all().build() {
        Ok(runtime) => runtime,
        Err(err) => {
            error!("Failed to create runtime: {err}");
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(bootstrap(&config_path)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => match err.downcast_ref::<BootstrapError>() {
            // A user-requested stop is not a fault.
            Some(BootstrapError::Interrupted) => ExitCode::SUCCESS,
            _ => {
                error!("Failed to download launcher: {err:#}");
                ExitCode::FAILURE
            }
        },
    }
}

async fn bootstrap(config_path: &Path) -> Result<()> {
    let config = BootstrapConfig::load(config_path)?;

    let swept = downloader::sweep_stale_temps(&config.binaries_dir).await;
    if swept > 0 {
        info!("Removed {swept} stale temp file(s) from {}", config.binaries_dir.display());
    }

    let downloader = Downloader::new(config).context("Failed to set up the downloader")?;

    // Ctrl-C maps to a cooperative cancel request; the worker unwinds at
    // its next checkpoint or mid-stream.
    let bridge = downloader.bridge();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Cancellation requested");
            bridge.request_cancel();
        }
    });

    let presenter = LogPresenter::default();
    let binary = downloader.run(&presenter, &LogHandoff).await?;
    info!("Launcher binary ready at {}", binary.path().display());

    Ok(())
}
