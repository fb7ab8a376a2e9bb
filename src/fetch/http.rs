//! reqwest-backed fetcher.

use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use super::{ResourceBody, ResourceFetcher};

/// Fetches identifiers as URLs with a shared `reqwest::Client`.
///
/// Any HTTP status counts as a successful `open`; only transport failures
/// (bad URL, DNS, refused connection, timeout if configured) are errors.
#[derive(Clone)]
pub struct HttpFetcher {
    client: Arc<reqwest::Client>,
}

impl HttpFetcher {
    /// Creates a fetcher around an already configured client.
    pub fn new(client: Arc<reqwest::Client>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ResourceFetcher for HttpFetcher {
    type Body = HttpBody;

    async fn open(&self, identifier: &str) -> anyhow::Result<HttpBody> {
        let response = self.client.get(identifier).send().await?;
        debug!("{} responded with {}", identifier, response.status());
        Ok(HttpBody { response })
    }
}

/// Body of an HTTP response, read chunk by chunk.
pub struct HttpBody {
    response: reqwest::Response,
}

impl HttpBody {
    /// Reads the rest of the body into memory.
    pub async fn read_all(&mut self) -> anyhow::Result<Vec<u8>> {
        let mut body = Vec::new();
        while let Some(chunk) = self.response.chunk().await? {
            body.extend_from_slice(&chunk);
        }
        Ok(body)
    }
}

#[async_trait]
impl ResourceBody for HttpBody {
    async fn transfer(&mut self) -> anyhow::Result<u64> {
        let mut total = 0u64;
        while let Some(chunk) = self.response.chunk().await? {
            total += chunk.len() as u64;
        }
        Ok(total)
    }

    async fn close(self) -> anyhow::Result<()> {
        // Dropping a fully read response hands the connection back to the pool.
        drop(self.response);
        Ok(())
    }
}
