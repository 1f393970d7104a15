//! Thin fluent wrapper around reqwest: one GET, exact-status validation,
//! and two terminal consumption modes (buffer text, stream to file).

use crate::downloader::progress::TransferProgress;
use crate::error::{BootstrapError, Result};
use futures_util::StreamExt;
use log::debug;
use std::path::Path;
use std::time::Duration;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tokio_util::sync::CancellationToken;
use url::Url;

const USER_AGENT: &str = concat!("launcher-bootstrap/", env!("CARGO_PKG_VERSION"));

pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    /// Only the connect phase is bounded; a full binary download on a
    /// slow link may legitimately take minutes.
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .connect_timeout(Duration::from_secs(10))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self { client })
    }

    pub fn get(&self, url: &Url) -> Request {
        Request {
            builder: self.client.get(url.clone()),
            url: url.clone(),
        }
    }
}

/// A GET request ready to execute.
pub struct Request {
    builder: reqwest::RequestBuilder,
    url: Url,
}

impl Request {
    pub async fn execute(self) -> Result<Response> {
        debug!("GET {}", self.url);
        let inner = self.builder.send().await?;
        Ok(Response {
            url: self.url,
            inner,
        })
    }
}

/// An executed response, not yet consumed.
pub struct Response {
    url: Url,
    inner: reqwest::Response,
}

impl Response {
    /// Require an exact status code.
    pub fn expect_status(self, expected: u16) -> Result<Self> {
        let status = self.inner.status().as_u16();
        if status != expected {
            return Err(BootstrapError::UnexpectedStatus {
                status,
                url: self.url,
            });
        }
        Ok(self)
    }

    /// Buffer the whole body as UTF-8 text. Used for the small pointer
    /// resource only.
    pub async fn text(self) -> Result<String> {
        Ok(self.inner.text().await?)
    }

    /// Stream the body to `path`, updating `progress` as chunks arrive.
    /// A cancel request aborts the transfer within one chunk.
    pub async fn save_to(
        self,
        path: &Path,
        progress: &TransferProgress,
        cancel: &CancellationToken,
    ) -> Result<()> {
        if let Some(len) = self.inner.content_length() {
            progress.set_total(len);
        }

        let mut file = File::create(path).await.map_err(|source| BootstrapError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut stream = self.inner.bytes_stream();

        loop {
            let next = tokio::select! {
                _ = cancel.cancelled() => return Err(BootstrapError::Interrupted),
                next = stream.next() => next,
            };
            let Some(chunk) = next else { break };
            let chunk = chunk?;

            file.write_all(&chunk).await.map_err(|source| BootstrapError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            progress.add_received(chunk.len() as u64);
        }

        file.flush().await.map_err(|source| BootstrapError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(())
    }
}
