//! Retry policy and outcome classification.

use std::time::Duration;

use crate::transport::Outcome;

/// Immutable retry configuration for one retry decorator instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first.
    pub max_attempts: u32,

    /// Fixed wait before every attempt after the first.
    pub delay: Duration,
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, delay: Duration) -> Self {
        Self {
            max_attempts,
            delay,
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            delay: Duration::from_millis(100),
        }
    }
}

/// Whether the previous attempt's outcome is worth re-attempting.
///
/// Transient: a transport timeout, HTTP 429, and HTTP 500-504. Everything
/// else (other errors, other status codes) is final and returned to the
/// caller as-is.
pub fn is_retry_eligible(outcome: &Outcome) -> bool {
    match outcome {
        Ok(response) => {
            let status = response.status().as_u16();
            status == 429 || (500..=504).contains(&status)
        }
        Err(err) => err.is_timeout(),
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::transport::{buffered_body, TransportError};

    fn response_outcome(status: u16) -> Outcome {
        Ok(http::Response::builder()
            .status(status)
            .body(buffered_body(""))
            .unwrap())
    }

    #[test]
    fn transient_statuses_are_eligible() {
        for status in [429, 500, 501, 502, 503, 504] {
            assert!(is_retry_eligible(&response_outcome(status)), "{status}");
        }
    }

    #[test]
    fn final_statuses_are_not_eligible() {
        for status in [200, 201, 301, 400, 404, 418, 505] {
            assert!(!is_retry_eligible(&response_outcome(status)), "{status}");
        }
    }

    #[test]
    fn only_timeouts_are_eligible_errors() {
        let timeout = TransportError::Timeout(Duration::from_secs(1));
        assert!(is_retry_eligible(&Err(timeout)));
        assert!(!is_retry_eligible(&Err(TransportError::Cancelled)));
        assert!(!is_retry_eligible(&Err(TransportError::Exchange(
            "connection reset".into()
        ))));
    }
}
