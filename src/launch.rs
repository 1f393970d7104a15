//! Handoff contract for promoted binaries.

use crate::downloader::models::LauncherBinary;
use log::info;

/// Receives the promoted binaries once the download completes. The
/// process that actually executes them lives outside the bootstrap core;
/// `already_running` is `false` on the download path, which never hands
/// off a binary belonging to a live instance.
pub trait LaunchHandoff: Send + Sync {
    fn launch_existing(&self, binaries: Vec<LauncherBinary>, already_running: bool);
}

/// Handoff that records the result in the log. Stands in wherever no
/// launch side is wired up.
pub struct LogHandoff;

impl LaunchHandoff for LogHandoff {
    fn launch_existing(&self, binaries: Vec<LauncherBinary>, already_running: bool) {
        for binary in &binaries {
            info!(
                "Handing off launcher binary {} (already running: {already_running})",
                binary.path().display()
            );
        }
    }
}
