//! Core of the launcher bootstrap: resolves the latest-release pointer,
//! downloads the launcher binary and promotes it into the binaries
//! directory, reporting progress and honoring cancellation along the way.

pub mod config;
pub mod downloader;
pub mod error;
pub mod launch;
pub mod presenter;
pub mod progress_bridge;
