// Copyright (c) 2025 Pratik Barhate
// Licensed under the MIT License. See the LICENSE file in the project root for more information.

use gazelite_io::BoxError;
use serde::{Deserialize, Serialize};

use crate::benchmark::TensorDescriptor;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Outcome of one benchmark run, printed once and discarded.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkSummary {
    #[serde(rename = "Model Size (MB)")]
    pub model_size_mb: f64,
    #[serde(rename = "Input Details")]
    pub input_details: Vec<TensorDescriptor>,
    #[serde(rename = "Output Details")]
    pub output_details: Vec<TensorDescriptor>,
    #[serde(rename = "Avg Inference Time (ms)")]
    pub avg_inference_time_ms: f64,
}

impl BenchmarkSummary {
    /// Size and latency are rounded to two decimals.
    pub fn new(
        model_bytes: usize,
        input_details: Vec<TensorDescriptor>,
        output_details: Vec<TensorDescriptor>,
        avg_inference_time_ms: f64,
    ) -> Self {
        BenchmarkSummary {
            model_size_mb: round2(model_bytes as f64 / BYTES_PER_MB),
            input_details,
            output_details,
            avg_inference_time_ms: round2(avg_inference_time_ms),
        }
    }

    pub fn to_json(&self) -> Result<String, BoxError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Rounds to two decimals, ties to even.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}
