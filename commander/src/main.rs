mod client;
mod transport;

use std::process::ExitCode;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use actuator_shared::{limits, now_ms, Args, CommandRequest, CommandResponse};
use anyhow::{bail, Context, Result};
use clap::Parser;
use serde_json::{json, Value};
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use transport::{TcpConnector, TransportConnector, TransportStream};

static REQUEST_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Send one command to an actuator
#[derive(Parser, Debug)]
#[command(name = "commander", version, about)]
struct Cli {
    /// Actuator address
    #[arg(long, default_value_t = format!("127.0.0.1:{}", limits::DEFAULT_PORT))]
    addr: String,

    /// Action domain, e.g. scan, locate, deny, query
    action: String,

    /// Target key within the action domain
    target: String,

    /// Target specifier (repeatable)
    #[arg(short, long = "specifier")]
    specifiers: Vec<String>,

    /// Arguments as a JSON object
    #[arg(long)]
    args: Option<String>,

    /// Response timeout in milliseconds
    #[arg(long, default_value_t = limits::COMMAND_RESPONSE_TIMEOUT_MS)]
    timeout_ms: u64,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(log_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref()))
        .init();

    let cli = Cli::parse();
    let request = build_request(&cli)?;

    let connector = TcpConnector::new(cli.addr.clone());
    let mut stream = connector
        .connect()
        .await
        .with_context(|| format!("failed to connect to {} via {}", cli.addr, connector.name()))?;
    info!("Connected to {} via {}", cli.addr, connector.name());

    let response = client::send_command(
        &mut stream,
        &request,
        Duration::from_millis(cli.timeout_ms),
    )
    .await?;

    if let Err(e) = stream.shutdown().await {
        debug!("Shutdown failed: {}", e);
    }

    println!("{}", serde_json::to_string_pretty(&render(&response))?);

    Ok(if response.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// `RUST_LOG` when set and valid, otherwise warnings only
fn log_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"))
}

fn next_request_id() -> String {
    let n = REQUEST_COUNTER.fetch_add(1, Ordering::SeqCst) + 1;
    format!("cmd-{}-{}", now_ms(), n)
}

fn build_request(cli: &Cli) -> Result<CommandRequest> {
    let args = match &cli.args {
        Some(raw) => {
            let value: Value = serde_json::from_str(raw).context("--args is not valid JSON")?;
            match value {
                Value::Object(map) => map,
                _ => bail!("--args must be a JSON object"),
            }
        }
        None => Args::new(),
    };

    Ok(CommandRequest::new(next_request_id(), &cli.action, &cli.target)
        .with_specifiers(cli.specifiers.clone())
        .with_args(&args))
}

fn render(response: &CommandResponse) -> Value {
    let mut out = json!({
        "request_id": response.request_id,
        "actuator_id": response.actuator_id,
        "status": response.status,
        "status_text": response.status_text,
        "processing_time_ms": response.processing_time_ms,
    });
    if let Some(results) = response.results() {
        out["results"] = results;
    }
    out
}
