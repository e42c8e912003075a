//! Base transport over the hyper legacy client.

use std::time::Duration;

use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::client::legacy::Client;
use hyper_util::rt::TokioExecutor;

use crate::config::TimeoutConfig;
use crate::transport::{Outcome, Request, Transport, TransportError};

/// The base transport: performs the real network exchange.
///
/// Connection establishment is bounded by the connect timeout on the
/// connector; the whole exchange is bounded by the request timeout. An
/// elapsed request deadline surfaces as [`TransportError::Timeout`], the
/// only transport error class the retry decorator treats as transient.
pub struct HttpTransport {
    client: Client<HttpConnector, Full<Bytes>>,
    request_timeout: Duration,
}

impl HttpTransport {
    /// Create a base transport with the given timeout configuration.
    pub fn new(timeouts: &TimeoutConfig) -> Self {
        let mut connector = HttpConnector::new();
        connector.set_connect_timeout(Some(Duration::from_secs(timeouts.connect_secs)));
        let client = Client::builder(TokioExecutor::new()).build(connector);
        Self {
            client,
            request_timeout: Duration::from_secs(timeouts.request_secs),
        }
    }
}

#[async_trait::async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: Request) -> Outcome {
        let request = request.map(Full::new);
        match tokio::time::timeout(self.request_timeout, self.client.request(request)).await {
            Ok(Ok(response)) => Ok(response.map(|body| body.boxed_unsync())),
            Ok(Err(err)) => Err(TransportError::from(err)),
            Err(_) => Err(TransportError::Timeout(self.request_timeout)),
        }
    }
}
