//! Transport capability subsystem.
//!
//! # Data Flow
//! ```text
//! caller
//!     → outermost decorator (middleware/*)
//!     → … inner decorators …
//!     → client.rs (hyper exchange, deadline enforcement)
//!     → response / error propagated back up the same chain
//! ```
//!
//! # Design Decisions
//! - One capability: `send(Request) -> Outcome`; every layer implements it
//! - Request bodies are buffered `Bytes` so an attempt can be re-issued
//! - Response bodies stay streaming; ownership moves to the caller
//! - Cancellation travels with the request via extensions, not a parameter

pub mod client;
pub mod context;
pub mod error;

pub use client::HttpTransport;
pub use context::{RequestContext, X_REQUEST_ID};
pub use error::TransportError;

use std::sync::Arc;

use bytes::Bytes;
use http_body_util::combinators::UnsyncBoxBody;
use http_body_util::{BodyExt, Full};

/// Outbound request with its body fully buffered.
pub type Request = http::Request<Bytes>;

/// Streaming response body shared by every transport layer.
pub type ResponseBody = UnsyncBoxBody<Bytes, hyper::Error>;

/// Response as produced by a transport. Ownership of the body stream
/// transfers to whoever receives it; a layer that discards a response is
/// responsible for draining it first.
pub type Response = http::Response<ResponseBody>;

/// What one attempt produced: a response or a transport-level error.
pub type Outcome = Result<Response, TransportError>;

/// The capability that turns a [`Request`] into an [`Outcome`].
///
/// The base transport and every decorator implement this one contract, so
/// any subset of decorators can be nested in any order. Decorators hold an
/// inner `Arc<dyn Transport>` and delegate.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: Request) -> Outcome;
}

#[async_trait::async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn send(&self, request: Request) -> Outcome {
        self.as_ref().send(request).await
    }
}

/// Box a fully-buffered payload as a response body.
pub fn buffered_body(payload: impl Into<Bytes>) -> ResponseBody {
    Full::new(payload.into())
        .map_err(|never| match never {})
        .boxed_unsync()
}
