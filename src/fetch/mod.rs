//! Resource retrieval.
//!
//! The engine talks to the network only through these two traits, so a batch
//! can be driven by the reqwest-backed [`HttpFetcher`] or by any scripted
//! implementation. A retrieval has three fallible steps, each mapped to a
//! [`FetchStage`](crate::FetchStage) by the engine:
//!
//! 1. [`ResourceFetcher::open`] issues the request
//! 2. [`ResourceBody::transfer`] reads the whole body, returning its size
//! 3. [`ResourceBody::close`] releases the transport

mod http;

use async_trait::async_trait;

pub use http::{HttpBody, HttpFetcher};

/// Opens a retrieval for one identifier.
#[async_trait]
pub trait ResourceFetcher: Send + Sync + 'static {
    /// Body handle returned by a successful `open`.
    type Body: ResourceBody;

    /// Issues the request for `identifier`.
    async fn open(&self, identifier: &str) -> anyhow::Result<Self::Body>;
}

/// An opened retrieval whose body has not been read yet.
#[async_trait]
pub trait ResourceBody: Send + 'static {
    /// Reads the body to the end, discarding it, and returns the byte count.
    async fn transfer(&mut self) -> anyhow::Result<u64>;

    /// Releases the underlying transport.
    async fn close(self) -> anyhow::Result<()>;
}
