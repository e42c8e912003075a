//! Structured logging: subscriber setup and the exchange log sink.

use std::sync::Mutex;
use std::time::Duration;

use http::{Method, StatusCode};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber, honoring `RUST_LOG` with a fallback
/// filter.
pub fn init(default_filter: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// One completed exchange as seen by the logging decorator.
#[derive(Debug, Clone)]
pub struct ExchangeRecord {
    pub method: Method,
    pub uri: String,
    /// Status of the response, absent when the exchange produced none.
    pub status: Option<StatusCode>,
    /// Error text when the exchange failed without a response.
    pub error: Option<String>,
    pub elapsed: Duration,
    pub request_id: Option<String>,
}

impl ExchangeRecord {
    /// Canonical reason phrase for the recorded status, if any.
    pub fn status_text(&self) -> Option<&'static str> {
        self.status.and_then(|status| status.canonical_reason())
    }
}

/// Sink for exchange records.
///
/// Each call receives one complete record; implementations must be safe for
/// concurrent writers and must emit every record as a single unit.
pub trait LogSink: Send + Sync {
    fn record(&self, record: &ExchangeRecord);
}

/// Default sink: one structured tracing event per exchange.
pub struct TracingSink;

impl LogSink for TracingSink {
    fn record(&self, record: &ExchangeRecord) {
        match record.status {
            Some(status) => tracing::info!(
                method = %record.method,
                uri = %record.uri,
                status = status.as_u16(),
                reason = record.status_text().unwrap_or(""),
                elapsed_ms = record.elapsed.as_millis() as u64,
                request_id = record.request_id.as_deref().unwrap_or(""),
                "request completed"
            ),
            None => tracing::info!(
                method = %record.method,
                uri = %record.uri,
                error = record.error.as_deref().unwrap_or(""),
                elapsed_ms = record.elapsed.as_millis() as u64,
                request_id = record.request_id.as_deref().unwrap_or(""),
                "request failed"
            ),
        }
    }
}

/// Capturing sink for tests and diagnostics.
#[derive(Default)]
pub struct MemorySink {
    records: Mutex<Vec<ExchangeRecord>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far.
    pub fn records(&self) -> Vec<ExchangeRecord> {
        self.records.lock().unwrap().clone()
    }
}

impl LogSink for MemorySink {
    fn record(&self, record: &ExchangeRecord) {
        self.records.lock().unwrap().push(record.clone());
    }
}
