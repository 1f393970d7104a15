//! Update orchestrator: resolves the latest-release pointer, downloads
//! the binary to a temp file and promotes it atomically into place.

pub mod http;
pub mod models;
pub mod progress;

use crate::config::BootstrapConfig;
use crate::error::{BootstrapError, Result};
use crate::launch::LaunchHandoff;
use crate::presenter::ProgressPresenter;
use crate::progress_bridge::ProgressBridge;
use http::HttpClient;
use log::{info, warn};
use models::{DownloadTask, LauncherBinary, TaskState};
use std::path::Path;
use url::Url;

/// Drives one end-to-end update attempt. The whole sequence runs
/// synchronously on the caller's task; status consumers observe it
/// through the [`ProgressBridge`] from wherever they are scheduled.
pub struct Downloader {
    config: BootstrapConfig,
    client: HttpClient,
    bridge: ProgressBridge,
}

impl Downloader {
    pub fn new(config: BootstrapConfig) -> Result<Self> {
        let client = HttpClient::new()?;
        let bridge = ProgressBridge::new(config.product_name.clone());
        Ok(Self {
            config,
            client,
            bridge,
        })
    }

    /// Handle for status reads and cancel requests.
    pub fn bridge(&self) -> ProgressBridge {
        self.bridge.clone()
    }

    /// Runs the full sequence: resolve pointer, download, promote, hand
    /// off. The presenter is shown on entry and disposed on every exit
    /// path; the bridge ends in a terminal state with no transfer
    /// registered.
    pub async fn run(
        &self,
        presenter: &dyn ProgressPresenter,
        handoff: &dyn LaunchHandoff,
    ) -> Result<LauncherBinary> {
        presenter.show(self.bridge.clone());
        let outcome = self.execute().await;
        presenter.dispose();
        self.bridge.clear_transfer();

        match outcome {
            Ok(binary) => {
                self.bridge.set_state(TaskState::Completed);
                info!("Promoted launcher binary to {}", binary.path().display());
                handoff.launch_existing(vec![binary.clone()], false);
                Ok(binary)
            }
            Err(BootstrapError::Interrupted) => {
                self.bridge.set_state(TaskState::Cancelled);
                warn!("Update download interrupted");
                Err(BootstrapError::Interrupted)
            }
            Err(err) => {
                self.bridge.set_state(TaskState::Failed);
                Err(err)
            }
        }
    }

    async fn execute(&self) -> Result<LauncherBinary> {
        self.bridge.set_state(TaskState::ResolvingPointer);
        let binary_url = self.resolve_pointer().await?;

        // Cooperative checkpoint between the two stages.
        if self.bridge.is_cancel_requested() {
            return Err(BootstrapError::Interrupted);
        }

        let task = DownloadTask::new(self.config.latest_url.clone(), &self.config.binaries_dir);

        self.bridge.set_state(TaskState::DownloadingBinary);
        self.download_binary(&task, &binary_url).await?;

        self.bridge.set_state(TaskState::Finalizing);
        self.promote(&task).await?;

        Ok(LauncherBinary::new(task.final_path))
    }

    /// Fetch the pointer resource and parse its trimmed body as the
    /// binary's URL.
    async fn resolve_pointer(&self) -> Result<Url> {
        let body = self
            .client
            .get(&self.config.latest_url)
            .execute()
            .await?
            .expect_status(200)?
            .text()
            .await?;

        let trimmed = body.trim();
        Url::parse(trimmed).map_err(|source| BootstrapError::MalformedPointer {
            body: trimmed.to_string(),
            source,
        })
    }

    /// Stream the binary to the task's temp path, publishing progress
    /// through the bridge for the duration of the stage.
    async fn download_binary(&self, task: &DownloadTask, url: &Url) -> Result<()> {
        tokio::fs::create_dir_all(&self.config.binaries_dir)
            .await
            .map_err(|source| BootstrapError::Io {
                path: self.config.binaries_dir.clone(),
                source,
            })?;

        info!("Downloading {} to {}", url, task.temp_path.display());

        let transfer = self.bridge.begin_transfer();
        let outcome = async {
            self.client
                .get(url)
                .execute()
                .await?
                .expect_status(200)?
                .save_to(&task.temp_path, &transfer, self.bridge.cancel_token())
                .await
        }
        .await;
        self.bridge.clear_transfer();

        outcome
    }

    /// Atomic replace: drop any previous file at the final path, then
    /// rename the temp file into place. The rename is atomic only on a
    /// single volume; the binaries directory is assumed to live on one.
    async fn promote(&self, task: &DownloadTask) -> Result<()> {
        match tokio::fs::remove_file(&task.final_path).await {
            Ok(()) => {}
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
            Err(source) => {
                return Err(BootstrapError::Io {
                    path: task.final_path.clone(),
                    source,
                });
            }
        }

        tokio::fs::rename(&task.temp_path, &task.final_path)
            .await
            .map_err(|source| BootstrapError::Io {
                path: task.temp_path.clone(),
                source,
            })
    }
}

/// Best-effort sweep of `*.jar.pack.tmp` leftovers from prior cancelled
/// runs. Returns the number of files removed.
pub async fn sweep_stale_temps(binaries_dir: &Path) -> usize {
    let mut removed = 0;

    let Ok(mut entries) = tokio::fs::read_dir(binaries_dir).await else {
        return 0;
    };

    while let Ok(Some(entry)) = entries.next_entry().await {
        let path = entry.path();
        let is_temp = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.ends_with(".jar.pack.tmp"));
        if !is_temp {
            continue;
        }

        match tokio::fs::remove_file(&path).await {
            Ok(()) => removed += 1,
            Err(err) => warn!("Failed to remove stale temp file {}: {err}", path.display()),
        }
    }

    removed
}
