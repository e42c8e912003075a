//! One-shot demo client: send a single request through the configured
//! pipeline and print the result.

use std::path::PathBuf;

use bytes::Bytes;
use clap::Parser;
use http::Method;
use http_body_util::BodyExt;

use outbound_client::config::{load_config, ClientConfig};
use outbound_client::pipeline;
use outbound_client::transport::{context, Request, RequestContext, Transport};

#[derive(Parser)]
#[command(name = "outbound-client")]
#[command(about = "Send one request through the configured pipeline", long_about = None)]
struct Cli {
    /// Target URL.
    url: String,

    /// HTTP method.
    #[arg(short, long, default_value = "GET")]
    method: String,

    /// Request body.
    #[arg(short, long)]
    body: Option<String>,

    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print a JSON summary instead of the raw body.
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    outbound_client::observability::logging::init("outbound_client=info");

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ClientConfig::default(),
    };

    let url = url::Url::parse(&cli.url)?;
    let method: Method = cli.method.to_uppercase().parse()?;

    let transport = pipeline::from_config(&config);

    let mut request = Request::new(Bytes::from(cli.body.unwrap_or_default()));
    *request.method_mut() = method;
    *request.uri_mut() = url.as_str().parse()?;
    RequestContext::new().attach(&mut request);
    let request_id = context::tag_request(&mut request);

    tracing::info!(request_id = %request_id, url = %url, "sending request");

    match transport.send(request).await {
        Ok(response) => {
            let status = response.status();
            let collected = response.into_body().collect().await?;
            let body_bytes = collected.to_bytes();
            let body = String::from_utf8_lossy(&body_bytes);

            if cli.json {
                let summary = serde_json::json!({
                    "request_id": request_id,
                    "status": status.as_u16(),
                    "reason": status.canonical_reason().unwrap_or(""),
                    "body": body,
                });
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!("{} {}", status.as_u16(), status.canonical_reason().unwrap_or(""));
                if !body.is_empty() {
                    println!("{body}");
                }
            }
            Ok(())
        }
        Err(err) => {
            eprintln!("request failed: {err}");
            std::process::exit(1);
        }
    }
}
