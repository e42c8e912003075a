//! Retry decorator.

use std::sync::Arc;

use bytes::Bytes;
use http::request::Parts;
use http_body_util::BodyExt;

use crate::resilience::{is_retry_eligible, RetryPolicy};
use crate::transport::{
    Outcome, Request, RequestContext, Response, Transport, TransportError,
};

/// Decorator that re-issues a request while its outcome stays transient.
///
/// The first attempt always fires. Before every later attempt the previous
/// outcome is classified; a final outcome is returned immediately without
/// spending the remaining budget. The fixed inter-attempt wait races the
/// request's cancellation token, and a superseded response body is drained
/// in full before the next attempt goes out.
///
/// Eligibility looks at the outcome only: the decorator does not inspect
/// the method, so a non-idempotent request whose attempt produced a
/// transient outcome is re-issued too. Callers that must not repeat
/// state-mutating calls should leave this decorator out of their stack.
///
/// When the budget runs out, the most recent outcome is returned as-is; a
/// trailing 503 or timeout after N attempts is indistinguishable from a
/// single-attempt failure except through the per-retry tracing events.
pub struct RetryTransport {
    inner: Arc<dyn Transport>,
    policy: RetryPolicy,
}

impl RetryTransport {
    pub fn new(inner: Arc<dyn Transport>, policy: RetryPolicy) -> Self {
        Self { inner, policy }
    }
}

#[async_trait::async_trait]
impl Transport for RetryTransport {
    async fn send(&self, request: Request) -> Outcome {
        let context = RequestContext::of(request.extensions());
        let cancelled = context.cancellation();
        let (parts, body) = request.into_parts();

        // A zero budget would mean answering without ever sending.
        let max_attempts = self.policy.max_attempts.max(1);

        let mut outcome = self.inner.send(next_attempt(&parts, &body, &context)).await;
        for attempt in 2..=max_attempts {
            if !is_retry_eligible(&outcome) {
                return outcome;
            }
            let cause = describe(&outcome);
            if let Ok(response) = outcome {
                discard(response).await;
            }
            tracing::info!(
                attempt,
                delay_ms = self.policy.delay.as_millis() as u64,
                cause = %cause,
                uri = %parts.uri,
                "retrying request"
            );
            tokio::select! {
                biased;
                () = cancelled.cancelled() => return Err(TransportError::Cancelled),
                () = tokio::time::sleep(self.policy.delay) => {}
            }
            outcome = self.inner.send(next_attempt(&parts, &body, &context)).await;
        }

        // Budget exhausted: surface whatever the final attempt produced.
        outcome
    }
}

/// Rebuild the request for one attempt from the retained parts.
fn next_attempt(parts: &Parts, body: &Bytes, context: &RequestContext) -> Request {
    let mut request = Request::new(body.clone());
    *request.method_mut() = parts.method.clone();
    *request.uri_mut() = parts.uri.clone();
    *request.version_mut() = parts.version;
    *request.headers_mut() = parts.headers.clone();
    context.attach(&mut request);
    request
}

/// Fully release a superseded response body before the next attempt.
async fn discard(response: Response) {
    let _ = response.into_body().collect().await;
}

fn describe(outcome: &Outcome) -> String {
    match outcome {
        Ok(response) => format!("status {}", response.status()),
        Err(err) => err.to_string(),
    }
}
