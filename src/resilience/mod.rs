//! Resilience subsystem.
//!
//! # Data Flow
//! ```text
//! attempt outcome
//!     → retries.rs (classify: transient or final)
//!     → transient: middleware/retry.rs waits and re-issues
//!     → final: returned to the caller unchanged
//! ```
//!
//! # Design Decisions
//! - Classification is a pure function over the outcome
//! - Only timeouts and HTTP 429/500-504 are worth re-attempting
//! - The policy is fixed-delay; the attempt budget counts the first attempt

pub mod retries;

pub use retries::{is_retry_eligible, RetryPolicy};
