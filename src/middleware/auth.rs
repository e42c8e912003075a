//! Credential injection decorator.

use std::fmt;
use std::sync::Arc;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use http::header::AUTHORIZATION;
use http::HeaderValue;

use crate::transport::{Outcome, Request, Transport};

/// Static username/password pair for Basic authentication.
///
/// The password never appears in `Debug` output, and the computed header
/// value is marked sensitive so header dumps elide it.
#[derive(Clone)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// `Basic` authorization header value for this pair.
    fn authorization(&self) -> HeaderValue {
        let encoded = STANDARD.encode(format!("{}:{}", self.username, self.password));
        // Base64 output is always valid ASCII, so this cannot fail.
        let mut value = HeaderValue::from_str(&format!("Basic {encoded}")).unwrap();
        value.set_sensitive(true);
        value
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Decorator that sets the `Authorization` header before delegating.
///
/// Overwrites any prior value for that header and touches nothing else;
/// outcomes from the inner transport pass through unchanged.
pub struct BasicAuthTransport {
    inner: Arc<dyn Transport>,
    header: HeaderValue,
}

impl BasicAuthTransport {
    pub fn new(inner: Arc<dyn Transport>, credentials: Credentials) -> Self {
        Self {
            inner,
            header: credentials.authorization(),
        }
    }
}

#[async_trait::async_trait]
impl Transport for BasicAuthTransport {
    async fn send(&self, mut request: Request) -> Outcome {
        request.headers_mut().insert(AUTHORIZATION, self.header.clone());
        self.inner.send(request).await
    }
}
