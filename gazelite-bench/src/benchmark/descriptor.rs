// Copyright (c) 2025 Pratik Barhate
// Licensed under the MIT License. See the LICENSE file in the project root for more information.

use gazelite_io::BoxError;
use serde::{Deserialize, Serialize};
use tract_onnx::prelude::*;

/// Shape and element type of one model input or output.
///
/// Symbolic dimensions are reported as `-1`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TensorDescriptor {
    pub shape: Vec<i64>,
    pub dtype: String,
}

impl TensorDescriptor {
    pub fn from_fact(fact: &TypedFact) -> Self {
        TensorDescriptor {
            shape: fact
                .shape
                .iter()
                .map(|dim| dim.to_i64().unwrap_or(-1))
                .collect(),
            dtype: dtype_name(fact.datum_type),
        }
    }
}

/// Conventional numeric name of an element type, e.g. `float32`.
pub fn dtype_name(datum_type: DatumType) -> String {
    let name = match datum_type {
        DatumType::Bool => "bool",
        DatumType::U8 => "uint8",
        DatumType::U16 => "uint16",
        DatumType::U32 => "uint32",
        DatumType::U64 => "uint64",
        DatumType::I8 => "int8",
        DatumType::I16 => "int16",
        DatumType::I32 => "int32",
        DatumType::I64 => "int64",
        DatumType::F16 => "float16",
        DatumType::F32 => "float32",
        DatumType::F64 => "float64",
        DatumType::String => "string",
        other => return format!("{:?}", other).to_lowercase(),
    };
    name.to_string()
}

pub fn describe_inputs(model: &TypedModel) -> Result<Vec<TensorDescriptor>, BoxError> {
    (0..model.inputs.len())
        .map(|ix| -> Result<TensorDescriptor, BoxError> {
            Ok(TensorDescriptor::from_fact(model.input_fact(ix)?))
        })
        .collect()
}

pub fn describe_outputs(model: &TypedModel) -> Result<Vec<TensorDescriptor>, BoxError> {
    (0..model.outputs.len())
        .map(|ix| -> Result<TensorDescriptor, BoxError> {
            Ok(TensorDescriptor::from_fact(model.output_fact(ix)?))
        })
        .collect()
}
