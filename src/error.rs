//! Error taxonomy for the bootstrap core.

use std::path::PathBuf;
use thiserror::Error;
use url::Url;

pub type Result<T> = std::result::Result<T, BootstrapError>;

/// Everything that can abort an update attempt. None of these are retried
/// internally; each one surfaces once to the caller with its cause chain.
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// Transport-level failure: connect, TLS, or a broken body stream.
    #[error("network error")]
    Network(#[from] reqwest::Error),

    /// The server answered, but not with the status we require.
    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: Url },

    /// The pointer resource's trimmed body did not parse as a URL.
    #[error("malformed pointer body {body:?}")]
    MalformedPointer {
        body: String,
        #[source]
        source: url::ParseError,
    },

    /// Local read, write, or rename failure.
    #[error("I/O error on {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Cooperative cancellation was observed at a checkpoint or inside
    /// the streaming read loop.
    #[error("download interrupted")]
    Interrupted,
}
