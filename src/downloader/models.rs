//! Task and artifact types for the update downloader.

use std::path::{Path, PathBuf};
use url::Url;

/// Lifecycle of one update attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum TaskState {
    Idle = 0,
    ResolvingPointer = 1,
    DownloadingBinary = 2,
    Finalizing = 3,
    Completed = 4,
    Failed = 5,
    Cancelled = 6,
}

impl TaskState {
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Failed | Self::Cancelled)
    }

    pub(crate) const fn from_u8(raw: u8) -> Self {
        match raw {
            1 => Self::ResolvingPointer,
            2 => Self::DownloadingBinary,
            3 => Self::Finalizing,
            4 => Self::Completed,
            5 => Self::Failed,
            6 => Self::Cancelled,
            _ => Self::Idle,
        }
    }
}

/// One end-to-end update attempt with its generated artifact paths.
///
/// Paths are timestamped so repeated attempts never collide; the temp
/// name is the final name plus a `.tmp` suffix, and only the final path
/// is ever handed onward.
#[derive(Debug)]
pub struct DownloadTask {
    pub pointer_url: Url,
    pub final_path: PathBuf,
    pub temp_path: PathBuf,
}

impl DownloadTask {
    pub fn new(pointer_url: Url, binaries_dir: &Path) -> Self {
        let stamp = chrono::Utc::now().timestamp_millis();
        let final_path = binaries_dir.join(format!("{stamp}.jar.pack"));
        let temp_path = binaries_dir.join(format!("{stamp}.jar.pack.tmp"));
        Self {
            pointer_url,
            final_path,
            temp_path,
        }
    }
}

/// A promoted launcher binary, ready to hand to the launch side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LauncherBinary {
    path: PathBuf,
}

impl LauncherBinary {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
