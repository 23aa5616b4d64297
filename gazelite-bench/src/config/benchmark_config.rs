// Copyright (c) 2025 Pratik Barhate
// Licensed under the MIT License. See the LICENSE file in the project root for more information.

//! Benchmark configuration module to read the configurations from JSON string.

use gazelite_io::BoxError;
use serde::Deserialize;

fn default_model_path() -> String {
    "assets/models/gaze_estimation_model_optimized.nnef.tar".to_string()
}

fn default_num_runs() -> u32 {
    100
}

fn default_dynamic_dim() -> usize {
    1
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct BenchmarkConfig {
    /// Model to measure, local path or `s3://bucket/key`.
    #[serde(default = "default_model_path")]
    pub model_path: String,
    /// Number of timed inference calls.
    #[serde(default = "default_num_runs")]
    pub num_runs: u32,
    /// Untimed calls made before the measurement starts.
    #[serde(default)]
    pub warmup_runs: u32,
    /// Size given to every symbolic dimension of the synthetic inputs.
    #[serde(default = "default_dynamic_dim")]
    pub dynamic_dim: usize,
    /// Fixes the synthetic input when set.
    #[serde(default)]
    pub seed: Option<u64>,
    /// CloudWatch namespace to publish the summary metrics to.
    #[serde(default)]
    pub cloudwatch_namespace: Option<String>,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        BenchmarkConfig {
            model_path: default_model_path(),
            num_runs: default_num_runs(),
            warmup_runs: 0,
            dynamic_dim: default_dynamic_dim(),
            seed: None,
            cloudwatch_namespace: None,
        }
    }
}

impl BenchmarkConfig {
    pub fn from_json(json_str: &str) -> Result<Self, BoxError> {
        let config: BenchmarkConfig = serde_json::from_str(json_str)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), BoxError> {
        if self.model_path.is_empty() {
            return Err("model_path must not be empty".into());
        }
        if self.num_runs == 0 {
            return Err("num_runs must be at least 1".into());
        }
        if self.dynamic_dim == 0 {
            return Err("dynamic_dim must be at least 1".into());
        }
        if let Some(namespace) = &self.cloudwatch_namespace {
            if namespace.is_empty() {
                return Err("cloudwatch_namespace must not be empty when set".into());
            }
        }
        Ok(())
    }
}
