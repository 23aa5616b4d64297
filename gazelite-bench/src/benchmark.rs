// Copyright (c) 2025 Pratik Barhate
// Licensed under the MIT License. See the LICENSE file in the project root for more information.

//! Benchmark module loads a model, feeds it synthetic input and measures it.
//!
//! 1. Read the model bytes and decode them in the format named by the extension.
//! 2. Describe every input and output tensor.
//! 3. Synthesize random inputs matching the declared input facts.
//! 4. Plan the model and time a fixed number of sequential invocations.

use gazelite_io::{reader_for, BoxError};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tract_onnx::prelude::*;

use crate::config::BenchmarkConfig;
use crate::io::{load_model, prepare, ModelFormat};

pub(crate) mod descriptor;
pub(crate) mod summary;
pub(crate) mod synthetic;
pub(crate) mod timing;

pub(crate) use descriptor::*;
pub(crate) use summary::*;
pub(crate) use synthetic::*;
pub(crate) use timing::*;

pub(crate) type TractRunnableModel =
    RunnableModel<TypedFact, Box<dyn TypedOp>, Graph<TypedFact, Box<dyn TypedOp>>>;

/// Reads the configured model from its storage and benchmarks it.
pub async fn run_benchmark(config: &BenchmarkConfig) -> Result<BenchmarkSummary, BoxError> {
    let format = ModelFormat::from_path(&config.model_path)?;
    let reader = reader_for(&config.model_path).await;
    let model_bytes = reader.read_bytes(&config.model_path).await?;
    tracing::info!(
        path = %config.model_path,
        bytes = model_bytes.len(),
        ?format,
        "loaded model"
    );
    benchmark_bytes(&model_bytes, format, config)
}

/// Benchmarks an in-memory model.
pub fn benchmark_bytes(
    model_bytes: &[u8],
    format: ModelFormat,
    config: &BenchmarkConfig,
) -> Result<BenchmarkSummary, BoxError> {
    let model = load_model(model_bytes, format)?;
    let input_details = describe_inputs(&model)?;
    let output_details = describe_outputs(&model)?;

    let inputs = match config.seed {
        Some(seed) => {
            synthetic_inputs(&model, config.dynamic_dim, &mut StdRng::seed_from_u64(seed))?
        }
        None => synthetic_inputs(&model, config.dynamic_dim, &mut rand::rng())?,
    };

    let runnable = prepare(model)?;
    let total = time_invocations(&runnable, &inputs, config.num_runs, config.warmup_runs)?;
    let mean_ms = mean_latency_ms(total, config.num_runs);
    tracing::info!(
        runs = config.num_runs,
        warmup = config.warmup_runs,
        total_ms = total.as_secs_f64() * 1000.0,
        mean_ms,
        "benchmark finished"
    );

    Ok(BenchmarkSummary::new(
        model_bytes.len(),
        input_details,
        output_details,
        mean_ms,
    ))
}


#[cfg(test)]
mod tests {
    use super::test_support::{archive, nnef_bytes, symbolic_abs_model};
    use super::*;
    use std::env;
    use std::fs;

    fn quick_config(model_path: &str) -> BenchmarkConfig {
        BenchmarkConfig {
            model_path: model_path.to_string(),
            num_runs: 5,
            warmup_runs: 1,
            seed: Some(42),
            ..BenchmarkConfig::default()
        }
    }

    #[test]
    fn test_benchmark_bytes_summary() {
        let bytes = nnef_bytes(false);

        let summary =
            benchmark_bytes(&bytes, ModelFormat::Nnef, &quick_config("abs.nnef.tar")).unwrap();

        let expected = vec![TensorDescriptor {
            shape: vec![1, 3],
            dtype: "float32".to_string(),
        }];
        assert_eq!(summary.input_details, expected);
        assert_eq!(summary.output_details, expected);
        assert!(summary.avg_inference_time_ms >= 0.0);
        assert!(summary.model_size_mb >= 0.0);
    }

    #[test]
    fn test_descriptors_stable_across_runs() {
        let bytes = nnef_bytes(true);
        let config = BenchmarkConfig {
            seed: None,
            ..quick_config("abs.nnef.tgz")
        };

        let first = benchmark_bytes(&bytes, ModelFormat::Nnef, &config).unwrap();
        let second = benchmark_bytes(&bytes, ModelFormat::Nnef, &config).unwrap();

        assert_eq!(first.input_details, second.input_details);
        assert_eq!(first.output_details, second.output_details);
        assert_eq!(first.model_size_mb, second.model_size_mb);
    }

    #[test]
    fn test_benchmark_symbolic_batch() {
        let bytes = archive(&symbolic_abs_model(), false);
        let config = BenchmarkConfig {
            dynamic_dim: 4,
            ..quick_config("abs_batch.nnef.tar")
        };

        let summary = benchmark_bytes(&bytes, ModelFormat::Nnef, &config).unwrap();

        assert_eq!(summary.input_details[0].shape, vec![-1, 3]);
        assert_eq!(summary.output_details[0].shape, vec![-1, 3]);
        assert_eq!(summary.input_details[0].dtype, "float32");
        assert!(summary.avg_inference_time_ms >= 0.0);
    }

    #[test]
    fn test_benchmark_bytes_rejects_corrupt_model() {
        let result = benchmark_bytes(b"not a tarball", ModelFormat::Nnef, &quick_config("x.tar"));

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_run_benchmark_from_file() {
        let path = env::temp_dir()
            .join(format!("gazelite_bench_{}.nnef.tar", std::process::id()))
            .to_string_lossy()
            .into_owned();
        fs::write(&path, nnef_bytes(false)).unwrap();

        let summary = run_benchmark(&quick_config(&path)).await.unwrap();

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json.as_object().unwrap().len(), 4);
        assert_eq!(summary.input_details[0].shape, vec![1, 3]);

        fs::remove_file(path).unwrap();
    }

    #[tokio::test]
    async fn test_run_benchmark_unknown_extension() {
        let result = run_benchmark(&quick_config("gaze_estimation.tflite")).await;

        assert!(result.is_err());
    }
}
