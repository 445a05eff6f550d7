// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::io::{AsyncWrite, AsyncWriteExt, BufReader};
use tracing_subscriber::{fmt, EnvFilter};

use churn_dashboard::artifact::cached_artifact;
use churn_dashboard::config::{load_with_artifact_override, OutputFormat};
use churn_dashboard::dashboard::{render, run_interactive, Dashboard};
use churn_dashboard::form::{CustomerRecord, FormSession};
use churn_dashboard::pipeline::ChurnPipeline;

/// Predict customer churn from a trained model artifact.
#[derive(Parser, Debug)]
#[command(name = "churn-dashboard", version)]
#[command(about = "Terminal dashboard predicting whether a telecom customer will churn")]
struct Cli {
    /// Dashboard config file (YAML, or TOML by extension).
    config: PathBuf,

    /// Predict once for the customer in this YAML or JSON file instead of prompting.
    #[arg(long)]
    record: Option<PathBuf>,

    /// Model artifact to use instead of the one named in the config.
    #[arg(long)]
    artifact: Option<PathBuf>,

    /// Output format, overriding the config.
    #[arg(long)]
    format: Option<OutputFormat>,

    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // stdout belongs to the dashboard.
    fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = load_with_artifact_override(&cli.config, cli.artifact.as_deref())
        .with_context(|| format!("Failed to load config {}", cli.config.display()))?;
    let format = cli.format.unwrap_or(config.display.format);

    let artifact_path = config.artifact_path();
    let artifact = cached_artifact(&artifact_path)
        .with_context(|| format!("Error loading model {}", artifact_path.display()))?;

    let pipeline = ChurnPipeline::new(artifact);
    let dashboard = Dashboard::new(&config.display);

    match &cli.record {
        Some(path) => {
            let record = CustomerRecord::from_file(path)
                .with_context(|| format!("Failed to read record {}", path.display()))?;
            let result = pipeline.predict(&record);
            let report = dashboard.report(&pipeline, Some(&result));
            println!("{}", render(&report, format)?);
            Ok(())
        }
        None => interactive(&pipeline, &dashboard, format).await,
    }
}

/// Prompt, predict and render until the user quits, input ends or Ctrl-C.
async fn interactive(
    pipeline: &ChurnPipeline<'_>,
    dashboard: &Dashboard,
    format: OutputFormat,
) -> Result<()> {
    // Prompts move to stderr so JSON on stdout stays parseable.
    let prompts: Box<dyn AsyncWrite + Unpin + Send> = match format {
        OutputFormat::Text => Box::new(tokio::io::stdout()),
        OutputFormat::Json => Box::new(tokio::io::stderr()),
    };
    let mut session = FormSession::new(BufReader::new(tokio::io::stdin()), prompts);
    let mut stdout = tokio::io::stdout();

    tokio::select! {
        finished = run_interactive(&mut session, pipeline, dashboard, format, &mut stdout) => finished?,
        _ = tokio::signal::ctrl_c() => {}
    }

    if format == OutputFormat::Text {
        stdout.write_all(b"\nGoodbye.\n").await?;
        stdout.flush().await?;
    }
    Ok(())
}
