// Copyright (c) 2025 Pratik Barhate
// Licensed under the MIT License. See the LICENSE file in the project root for more information.

//! Decodes model bytes into a tract graph and builds the execution plan.

use gazelite_io::BoxError;
use std::io::Cursor;
use tract_onnx::prelude::*;
use tract_onnx::WithOnnx;

use crate::benchmark::TractRunnableModel;

/// Serialized model formats the benchmarker can read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModelFormat {
    Onnx,
    Nnef,
}

impl ModelFormat {
    /// Infers the format from the file extension.
    pub fn from_path(path: &str) -> Result<Self, BoxError> {
        let lower = path.to_ascii_lowercase();
        if lower.ends_with(".onnx") {
            Ok(ModelFormat::Onnx)
        } else if lower.ends_with(".tar") || lower.ends_with(".tgz") || lower.ends_with(".tar.gz")
        {
            Ok(ModelFormat::Nnef)
        } else {
            Err(format!(
                "Unsupported model file {}: expected .onnx, .nnef.tar or .nnef.tgz",
                path
            )
            .into())
        }
    }
}

/// Loads a typed model from its serialized bytes.
///
/// NNEF archives may be plain or gzip-compressed tarballs.
pub fn load_model(model_bytes: &[u8], format: ModelFormat) -> Result<TypedModel, BoxError> {
    let mut reader = Cursor::new(model_bytes);
    let model = match format {
        ModelFormat::Onnx => tract_onnx::onnx().model_for_read(&mut reader)?.into_typed()?,
        ModelFormat::Nnef => tract_nnef::nnef()
            .with_tract_core()
            .with_onnx()
            .model_for_read(&mut reader)?,
    };
    Ok(model)
}

/// Optimizes the graph and plans its execution, ready to be invoked.
pub fn prepare(model: TypedModel) -> Result<TractRunnableModel, BoxError> {
    Ok(model.into_optimized()?.into_runnable()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::benchmark::test_support::{abs_model, nnef_bytes};

    #[test]
    fn test_format_from_path() {
        assert_eq!(ModelFormat::from_path("gaze.onnx").unwrap(), ModelFormat::Onnx);
        assert_eq!(ModelFormat::from_path("GAZE.ONNX").unwrap(), ModelFormat::Onnx);
        assert_eq!(
            ModelFormat::from_path("assets/models/gaze.nnef.tar").unwrap(),
            ModelFormat::Nnef
        );
        assert_eq!(ModelFormat::from_path("gaze.nnef.tgz").unwrap(), ModelFormat::Nnef);
        assert_eq!(
            ModelFormat::from_path("s3://bucket/gaze.nnef.tar.gz").unwrap(),
            ModelFormat::Nnef
        );
    }

    #[test]
    fn test_format_from_unknown_extension() {
        let err = ModelFormat::from_path("gaze.tflite").unwrap_err();

        assert!(err.to_string().contains("gaze.tflite"));
    }

    #[test]
    fn test_load_nnef_tar() {
        let model = load_model(&nnef_bytes(false), ModelFormat::Nnef).unwrap();

        assert_eq!(model.inputs.len(), 1);
        assert_eq!(model.outputs.len(), 1);
    }

    #[test]
    fn test_load_nnef_tar_gz() {
        let model = load_model(&nnef_bytes(true), ModelFormat::Nnef).unwrap();

        assert_eq!(model.inputs.len(), 1);
    }

    #[test]
    fn test_load_rejects_wrong_format() {
        let result = load_model(&nnef_bytes(false), ModelFormat::Onnx);

        assert!(result.is_err());
    }

    #[test]
    fn test_prepare_runs() {
        let runnable = prepare(abs_model()).unwrap();
        let input = tensor2(&[[-1.0f32, 2.0, -3.0]]);

        let outputs = runnable.run(tvec!(TValue::Const(input.into_arc_tensor()))).unwrap();

        assert_eq!(
            outputs[0].as_slice::<f32>().unwrap(),
            &[1.0f32, 2.0, 3.0]
        );
    }
}
