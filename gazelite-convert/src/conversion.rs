// Copyright (c) 2025 Pratik Barhate
// Licensed under the MIT License. See the LICENSE file in the project root for more information.

//! Conversion of ONNX models into NNEF archives.
//!
//! The source graph is decoded, typed and decluttered, then handed to the NNEF
//! serializer. No optimisation pass runs here: the archive keeps a portable
//! graph and the runtime optimises it when the model is loaded for inference.

use flate2::write::GzEncoder;
use gazelite_io::{reader_for, BoxError};
use std::fs;
use std::io::Cursor;
use std::path::Path;
use tract_onnx::prelude::*;
use tract_onnx::WithOnnx;

use crate::config::ConvertConfig;

/// Container layout of the written NNEF archive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Compression {
    Tar,
    TarGz,
}

impl Compression {
    /// Picks the layout from the destination file name.
    pub fn for_path(path: &str) -> Self {
        if path.ends_with(".tgz") || path.ends_with(".tar.gz") {
            Compression::TarGz
        } else {
            Compression::Tar
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct ConversionReport {
    pub input_bytes: usize,
    pub output_bytes: usize,
    pub node_count: usize,
}

/// Decodes ONNX bytes into a decluttered typed model.
pub fn load_source_model(model_bytes: &[u8]) -> Result<TypedModel, BoxError> {
    let mut reader = Cursor::new(model_bytes);
    let model = tract_onnx::onnx()
        .model_for_read(&mut reader)?
        .into_typed()?
        .into_decluttered()?;
    Ok(model)
}

/// Serializes the model as an NNEF archive held in memory.
///
/// Operators outside the NNEF standard set are written through the tract-core
/// and ONNX extension registries.
pub fn export_nnef(model: &TypedModel, compression: Compression) -> Result<Vec<u8>, BoxError> {
    let nnef = tract_nnef::nnef().with_tract_core().with_onnx();
    let mut bytes = Vec::new();
    match compression {
        Compression::Tar => {
            nnef.write_to_tar(model, &mut bytes)?;
        }
        Compression::TarGz => {
            let encoder = GzEncoder::new(&mut bytes, flate2::Compression::default());
            nnef.write_to_tar(model, encoder)?.finish()?;
        }
    }
    Ok(bytes)
}

/// Writes the archive bytes verbatim, creating the parent directory if needed.
pub fn write_artifact(path: &str, bytes: &[u8]) -> Result<(), BoxError> {
    if bytes.is_empty() {
        return Err(format!("Refusing to write an empty model archive to {}", path).into());
    }
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, bytes).map_err(|e| format!("Failed to write {}: {}", path, e))?;
    Ok(())
}

/// Reads the source model, converts it and writes the NNEF archive.
pub async fn convert(config: &ConvertConfig) -> Result<ConversionReport, BoxError> {
    let reader = reader_for(&config.input_path).await;
    let source_bytes = reader.read_bytes(&config.input_path).await?;
    tracing::info!(
        path = %config.input_path,
        bytes = source_bytes.len(),
        "loaded source model"
    );

    let model = load_source_model(&source_bytes)?;
    let compression = Compression::for_path(&config.output_path);
    let archive = export_nnef(&model, compression)?;
    write_artifact(&config.output_path, &archive)?;
    tracing::info!(
        path = %config.output_path,
        bytes = archive.len(),
        ?compression,
        "wrote NNEF archive"
    );

    Ok(ConversionReport {
        input_bytes: source_bytes.len(),
        output_bytes: archive.len(),
        node_count: model.nodes.len(),
    })
}
