// Copyright (c) 2025 Pratik Barhate
// Licensed under the MIT License. See the LICENSE file in the project root for more information.

//! Converter configuration module to read the configurations from JSON string.

use gazelite_io::BoxError;
use serde::Deserialize;

fn default_input_path() -> String {
    "gaze_estimation_mpiigaze.onnx".to_string()
}

fn default_output_path() -> String {
    "gaze_estimation_mpiigaze.nnef.tar".to_string()
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConvertConfig {
    /// ONNX model to convert, local path or `s3://bucket/key`.
    #[serde(default = "default_input_path")]
    pub input_path: String,
    /// Local destination of the NNEF archive. A `.tgz` or `.tar.gz` suffix
    /// selects gzip compression.
    #[serde(default = "default_output_path")]
    pub output_path: String,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        ConvertConfig {
            input_path: default_input_path(),
            output_path: default_output_path(),
        }
    }
}

impl ConvertConfig {
    pub fn from_json(json_str: &str) -> Result<Self, BoxError> {
        let config: ConvertConfig = serde_json::from_str(json_str)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), BoxError> {
        if self.input_path.is_empty() {
            return Err("input_path must not be empty".into());
        }
        if self.output_path.is_empty() {
            return Err("output_path must not be empty".into());
        }
        if self.input_path == self.output_path {
            return Err(format!(
                "output_path {} would overwrite the source model",
                self.output_path
            )
            .into());
        }
        Ok(())
    }
}
