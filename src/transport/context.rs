//! Per-request context: cancellation and request identity.

use http::HeaderValue;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use crate::transport::Request;

/// Header carrying the request correlation id.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Cancellation context attached to an outbound request through its
/// extensions.
///
/// The token is observed by the retry decorator during its inter-attempt
/// wait; a request without an attached context is treated as never
/// cancelled.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    cancel: CancellationToken,
}

impl RequestContext {
    /// Fresh context with a token nobody cancels.
    pub fn new() -> Self {
        Self::default()
    }

    /// Context driven by an externally-owned token.
    pub fn with_token(cancel: CancellationToken) -> Self {
        Self { cancel }
    }

    /// Handle to this context's cancellation token.
    pub fn cancellation(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Attach this context to a request, replacing any previous one.
    pub fn attach(&self, request: &mut Request) {
        request.extensions_mut().insert(self.clone());
    }

    /// Context attached to `extensions`, or a never-cancelled default.
    pub fn of(extensions: &http::Extensions) -> Self {
        extensions.get::<RequestContext>().cloned().unwrap_or_default()
    }
}

/// Ensure the request carries an `x-request-id` header, generating a UUID v4
/// when absent. Returns the id the request ends up with.
pub fn tag_request(request: &mut Request) -> String {
    if let Some(existing) = request.headers().get(X_REQUEST_ID) {
        if let Ok(value) = existing.to_str() {
            return value.to_string();
        }
    }
    let id = Uuid::new_v4().to_string();
    if let Ok(value) = HeaderValue::from_str(&id) {
        request.headers_mut().insert(X_REQUEST_ID, value);
    }
    id
}
