//! Logging decorator.

use std::sync::Arc;
use std::time::Instant;

use crate::observability::logging::{ExchangeRecord, LogSink, TracingSink};
use crate::transport::{context, Outcome, Request, Transport};

/// Decorator that records one structured entry per delegated exchange.
///
/// The record carries method, URL, status code and canonical reason (absent
/// when the inner transport produced no response), elapsed duration, and the
/// request id header when present. Recording is a side effect only; the
/// outcome passes through unchanged.
pub struct LoggingTransport {
    inner: Arc<dyn Transport>,
    sink: Arc<dyn LogSink>,
}

impl LoggingTransport {
    /// Wrap `inner`, recording through the default tracing-backed sink.
    pub fn new(inner: Arc<dyn Transport>) -> Self {
        Self::with_sink(inner, Arc::new(TracingSink))
    }

    /// Wrap `inner`, recording through the supplied sink.
    pub fn with_sink(inner: Arc<dyn Transport>, sink: Arc<dyn LogSink>) -> Self {
        Self { inner, sink }
    }
}

#[async_trait::async_trait]
impl Transport for LoggingTransport {
    async fn send(&self, request: Request) -> Outcome {
        let method = request.method().clone();
        let uri = request.uri().to_string();
        let request_id = request
            .headers()
            .get(context::X_REQUEST_ID)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);

        tracing::debug!(method = %method, uri = %uri, "sending request");

        let start = Instant::now();
        let outcome = self.inner.send(request).await;
        let elapsed = start.elapsed();

        let (status, error) = match &outcome {
            Ok(response) => (Some(response.status()), None),
            Err(err) => (None, Some(err.to_string())),
        };
        self.sink.record(&ExchangeRecord {
            method,
            uri,
            status,
            error,
            elapsed,
            request_id,
        });

        outcome
    }
}
