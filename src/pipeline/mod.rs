//! Pipeline assembly.
//!
//! # Data Flow
//! ```text
//! ClientConfig ── from_config ──┐
//!                               ▼
//! PipelineBuilder::new(base) → logging() → basic_auth() → retry() → build()
//!     (each call wraps the stack built so far; later calls sit further out)
//! ```
//!
//! # Design Decisions
//! - Composition only; no request logic of its own
//! - Order determines semantics: retry outside logging logs every attempt,
//!   logging outside retry logs only the final outcome
//! - `from_config` puts retry outermost so each attempt is visible in logs

use std::sync::Arc;

use crate::config::ClientConfig;
use crate::middleware::{BasicAuthTransport, Credentials, LoggingTransport, RetryTransport};
use crate::observability::logging::LogSink;
use crate::resilience::RetryPolicy;
use crate::transport::{HttpTransport, Transport};

/// Builder nesting decorators around a base transport in caller-chosen
/// order.
pub struct PipelineBuilder {
    stack: Arc<dyn Transport>,
}

impl PipelineBuilder {
    /// Start a pipeline from the given base transport.
    pub fn new(base: impl Transport + 'static) -> Self {
        Self {
            stack: Arc::new(base),
        }
    }

    /// Wrap the current stack with the logging decorator (default sink).
    pub fn logging(self) -> Self {
        Self {
            stack: Arc::new(LoggingTransport::new(self.stack)),
        }
    }

    /// Wrap the current stack with the logging decorator and a custom sink.
    pub fn logging_with(self, sink: Arc<dyn LogSink>) -> Self {
        Self {
            stack: Arc::new(LoggingTransport::with_sink(self.stack, sink)),
        }
    }

    /// Wrap the current stack with Basic credential injection.
    pub fn basic_auth(self, credentials: Credentials) -> Self {
        Self {
            stack: Arc::new(BasicAuthTransport::new(self.stack, credentials)),
        }
    }

    /// Wrap the current stack with the retry decorator.
    pub fn retry(self, policy: RetryPolicy) -> Self {
        Self {
            stack: Arc::new(RetryTransport::new(self.stack, policy)),
        }
    }

    /// Finish, exposing the whole stack as one transport capability.
    pub fn build(self) -> Arc<dyn Transport> {
        self.stack
    }
}

/// Assemble the default stack from a validated configuration:
/// base → logging → auth → retry (outermost).
pub fn from_config(config: &ClientConfig) -> Arc<dyn Transport> {
    let mut builder = PipelineBuilder::new(HttpTransport::new(&config.timeouts));
    if config.observability.log_requests {
        builder = builder.logging();
    }
    if let Some(auth) = &config.auth {
        builder = builder.basic_auth(Credentials::new(&auth.username, &auth.password));
    }
    if config.retries.enabled {
        builder = builder.retry(config.retries.policy());
    }
    builder.build()
}
