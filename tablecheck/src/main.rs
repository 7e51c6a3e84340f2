mod process;
mod remote;

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::prelude::*;

use occupancy_common::mock::StubProvider;
use occupancy_common::provider::DetectOptions;

use crate::remote::HttpProvider;

#[derive(Debug, Parser)]
pub struct Args {
    /// Path to the input floor image (.jpeg/.png).
    /// May be omitted when --demo is given.
    input: Option<PathBuf>,
    /// Render the built-in synthetic floor scene instead of reading a file.
    #[arg(long, action, default_value = "false")]
    demo: bool,
    /// Detection backend: "stub" (canned results) or "http" (model server).
    #[arg(long, default_value = "stub")]
    provider: String,
    /// Base URL of the detection service, for the http backend.
    #[arg(long, default_value = "http://localhost:8080")]
    endpoint: String,
    /// Minimum confidence for reported detections.
    #[arg(long, default_value_t = 0.5)]
    confidence: f32,
    /// Non-maximum-suppression IoU threshold, for the http backend.
    #[arg(long, default_value_t = 0.5)]
    iou: f32,
    /// Simulated inference latency of the stub backend, in milliseconds.
    #[arg(long, default_value_t = 1500)]
    latency_ms: u64,
    /// Where to write the annotated image.
    /// Defaults to the input path with extension "out.png".
    #[arg(long, short)]
    output: Option<PathBuf>,
    /// Where to write the detection records as JSON.
    /// Defaults to the input path with extension "records.json".
    #[arg(long)]
    records: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,tablecheck=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let opts = DetectOptions {
        confidence: args.confidence,
        iou: args.iou,
    };

    match args.provider.as_str() {
        "stub" => {
            let provider = StubProvider::with_latency(Duration::from_millis(args.latency_ms));
            process::run(&args, provider, opts).await
        }
        "http" => {
            let provider = HttpProvider::new(args.endpoint.clone());
            if !provider.check_health().await.unwrap_or(false) {
                log::warn!("Detection service health check failed, proceeding anyway");
            }
            process::run(&args, provider, opts).await
        }
        unk => anyhow::bail!("unknown provider {unk:?}, expected \"stub\" or \"http\""),
    }
}
