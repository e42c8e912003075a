//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! middleware/logging.rs produces one ExchangeRecord per exchange
//!     → LogSink (TracingSink by default, MemorySink for capture)
//!     → tracing subscriber (stdout, EnvFilter-controlled)
//! ```
//!
//! # Design Decisions
//! - The sink is injected at construction; no implicit global sink
//! - One record per exchange, written atomically
//! - Request ID flows through records for correlation

pub mod logging;

pub use logging::{ExchangeRecord, LogSink, MemorySink, TracingSink};
