//! Shared utilities for integration testing the pipeline.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use bytes::Bytes;
use http::HeaderMap;
use outbound_client::transport::{buffered_body, Outcome, Request, Transport, TransportError};
use tokio::io::AsyncWriteExt;
use tokio::net::TcpListener;

/// Build a buffered GET request to the given URI.
#[allow(dead_code)]
pub fn request_to(uri: &str) -> Request {
    let mut request = Request::new(Bytes::new());
    *request.uri_mut() = uri.parse().unwrap();
    request
}

/// Start a programmable mock backend speaking raw HTTP/1.1 and return its
/// address.
#[allow(dead_code)]
pub async fn start_programmable_backend<F, Fut>(f: F) -> SocketAddr
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = (u16, String)> + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let f = std::sync::Arc::new(f);

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let f = f.clone();
                    tokio::spawn(async move {
                        let (status, body) = f().await;
                        let status_text = match status {
                            200 => "200 OK",
                            404 => "404 Not Found",
                            429 => "429 Too Many Requests",
                            500 => "500 Internal Server Error",
                            502 => "502 Bad Gateway",
                            503 => "503 Service Unavailable",
                            _ => "200 OK",
                        };

                        let response_str = format!(
                            "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            status_text,
                            body.len(),
                            body
                        );
                        let _ = socket.write_all(response_str.as_bytes()).await;
                        let _ = socket.shutdown().await;
                        tokio::time::sleep(Duration::from_millis(10)).await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    addr
}

/// What a scripted attempt should produce.
#[allow(dead_code)]
pub enum Scripted {
    Status(u16),
    Timeout,
    Error(&'static str),
}

/// In-memory transport that replays a script, repeating the final step once
/// the script runs out. Records every request's headers and counts attempts.
#[allow(dead_code)]
pub struct ScriptedTransport {
    script: Vec<Scripted>,
    attempts: AtomicU32,
    seen_headers: Mutex<Vec<HeaderMap>>,
}

#[allow(dead_code)]
impl ScriptedTransport {
    pub fn new(script: Vec<Scripted>) -> Self {
        Self {
            script,
            attempts: AtomicU32::new(0),
            seen_headers: Mutex::new(Vec::new()),
        }
    }

    pub fn attempts(&self) -> u32 {
        self.attempts.load(Ordering::SeqCst)
    }

    pub fn seen_headers(&self) -> Vec<HeaderMap> {
        self.seen_headers.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl Transport for ScriptedTransport {
    async fn send(&self, request: Request) -> Outcome {
        let attempt = self.attempts.fetch_add(1, Ordering::SeqCst) as usize;
        self.seen_headers.lock().unwrap().push(request.headers().clone());

        let step = self
            .script
            .get(attempt)
            .or_else(|| self.script.last())
            .expect("script must not be empty");
        match step {
            Scripted::Status(status) => Ok(http::Response::builder()
                .status(*status)
                .body(buffered_body(""))
                .unwrap()),
            Scripted::Timeout => Err(TransportError::Timeout(Duration::from_millis(10))),
            Scripted::Error(message) => Err(TransportError::Exchange((*message).into())),
        }
    }
}
