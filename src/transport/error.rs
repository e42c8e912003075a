//! Transport error taxonomy.

use std::time::Duration;

use thiserror::Error;

/// Errors produced by a transport exchange.
///
/// Only [`Timeout`](TransportError::Timeout) is classified as transient by
/// the retry decorator; every other variant is final.
/// [`Cancelled`](TransportError::Cancelled) is raised by the retry decorator
/// itself when the request's cancellation signal fires during an
/// inter-attempt wait and is never retried.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The exchange did not complete within the configured deadline.
    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    /// The request's cancellation signal fired while the pipeline was
    /// waiting between attempts.
    #[error("request cancelled")]
    Cancelled,

    /// The connection to the remote endpoint could not be established.
    #[error("connection failed: {0}")]
    Connect(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The exchange started but failed before a complete response was
    /// produced.
    #[error("exchange failed: {0}")]
    Exchange(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl TransportError {
    /// Whether this error is a timeout, the only transport error class the
    /// retry decorator re-attempts.
    pub fn is_timeout(&self) -> bool {
        matches!(self, TransportError::Timeout(_))
    }

    /// Whether the request was cancelled rather than failed.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, TransportError::Cancelled)
    }
}

impl From<hyper_util::client::legacy::Error> for TransportError {
    fn from(err: hyper_util::client::legacy::Error) -> Self {
        if err.is_connect() {
            TransportError::Connect(Box::new(err))
        } else {
            TransportError::Exchange(Box::new(err))
        }
    }
}
