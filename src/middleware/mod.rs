//! Request-processing decorators.
//!
//! # Data Flow
//! ```text
//! send(request)
//!     → retry.rs (attempt loop, classification, bounded waits)
//!     → auth.rs (inject Authorization header)
//!     → logging.rs (start event, completion record)
//!     → base transport
//! (any subset, in any order; the pipeline assembler picks the nesting)
//! ```
//!
//! # Design Decisions
//! - Each decorator implements the same `Transport` contract it wraps
//! - Decorators are immutable after construction; safe for concurrent calls
//! - Order determines semantics: retry outside logging logs every attempt

pub mod auth;
pub mod logging;
pub mod retry;

pub use auth::{BasicAuthTransport, Credentials};
pub use logging::LoggingTransport;
pub use retry::RetryTransport;
