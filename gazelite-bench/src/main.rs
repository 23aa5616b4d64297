// Copyright (c) 2025 Pratik Barhate
// Licensed under the MIT License. See the LICENSE file in the project root for more information.

use config::BenchmarkConfig;
use gazelite_io::{reader_for, BoxError};
use std::env;
use tracing_subscriber::EnvFilter;

pub(crate) mod benchmark;
pub(crate) mod config;
pub(crate) mod io;

/// Reads the JSON configuration named on the command line, falling back to the
/// built-in model path and run count when no argument is given.
async fn load_config(config_path: Option<&String>) -> Result<BenchmarkConfig, BoxError> {
    match config_path {
        Some(path) => {
            let reader = reader_for(path).await;
            BenchmarkConfig::from_json(&reader.read_string(path).await?)
        }
        None => Ok(BenchmarkConfig::default()),
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
        .thread_name("gazelite-bench")
        .enable_all()
        .build()?;

    let config = runtime.block_on(load_config(args.get(1)))?;
    let summary = runtime.block_on(benchmark::run_benchmark(&config))?;

    println!("{}", summary.to_json()?);

    if let Some(namespace) = &config.cloudwatch_namespace {
        runtime.block_on(async {
            let aws_config = aws_config::load_from_env().await;
            let cloudwatch_client = aws_sdk_cloudwatch::Client::new(&aws_config);
            io::publish_summary(&cloudwatch_client, namespace, &summary).await
        })?;
    }
    Ok(())
}
