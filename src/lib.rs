//! Composable outbound-HTTP request pipeline.
//!
//! A chain of decorators wraps a base transport to add structured logging,
//! credential injection, and retry with a fixed inter-attempt delay on
//! transient failures. Every layer implements the same one-method
//! [`Transport`] contract, so any subset can be stacked in any order.

pub mod config;
pub mod middleware;
pub mod observability;
pub mod pipeline;
pub mod resilience;
pub mod transport;

pub use config::ClientConfig;
pub use middleware::{BasicAuthTransport, Credentials, LoggingTransport, RetryTransport};
pub use pipeline::{from_config, PipelineBuilder};
pub use resilience::RetryPolicy;
pub use transport::{
    HttpTransport, Outcome, Request, RequestContext, Response, Transport, TransportError,
};
