use std::fs::{self, OpenOptions};
use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;
use kn_export::{run_export, util, Cli, Config, ExportError, KubeServingClient};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    util::init_data_dir(cli.data_dir.clone());

    // Initialize logging to file (~/.kn-export/logs/kn-export.log)
    fs::create_dir_all(util::logs_dir())?;

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(util::log_file_path())?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("KN_EXPORT_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(log_file)
        .with_ansi(false) // Disable ANSI colors in log file
        .init();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let request = cli.into_request(&config)?;

    let client =
        KubeServingClient::connect(request.context.as_deref(), request.namespace.as_deref())
            .await?;

    let rendered = tokio::select! {
        result = run_export(&client, &request) => result?,
        _ = tokio::signal::ctrl_c() => return Err(ExportError::Cancelled.into()),
    };

    let mut stdout = io::stdout().lock();
    stdout.write_all(&rendered)?;
    stdout.flush()?;
    Ok(())
}
