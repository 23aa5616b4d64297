// Copyright (c) 2025 Pratik Barhate
// Licensed under the MIT License. See the LICENSE file in the project root for more information.

use config::ConvertConfig;
use gazelite_io::{reader_for, BoxError};
use std::env;
use tracing_subscriber::EnvFilter;

pub(crate) mod config;
pub(crate) mod conversion;

/// Reads the JSON configuration named on the command line, falling back to the
/// built-in paths when no argument is given.
async fn load_config(config_path: Option<&String>) -> Result<ConvertConfig, BoxError> {
    match config_path {
        Some(path) => {
            let reader = reader_for(path).await;
            ConvertConfig::from_json(&reader.read_string(path).await?)
        }
        None => Ok(ConvertConfig::default()),
    }
}

pub fn main() -> Result<(), BoxError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .thread_name("gazelite-convert")
        .enable_all()
        .build()?;

    let report = runtime.block_on(async {
        let config = load_config(args.get(1)).await?;
        conversion::convert(&config).await
    })?;

    tracing::info!(
        input_bytes = report.input_bytes,
        output_bytes = report.output_bytes,
        nodes = report.node_count,
        "conversion finished"
    );
    Ok(())
}
