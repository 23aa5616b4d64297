// Copyright (c) 2025 Pratik Barhate
// Licensed under the MIT License. See the LICENSE file in the project root for more information.

//! Random model inputs shaped after the declared input facts.
//!
//! Values are sampled uniformly from `[0, 1)` as f64 and cast to the declared
//! element type, so integer inputs come out as zeros.

use gazelite_io::BoxError;
use rand::Rng;
use tract_nnef::internal::DimLike;
use tract_onnx::prelude::*;

/// Resolves a fact's shape, giving `dynamic_dim` to every symbolic dimension.
pub fn concrete_shape(fact: &TypedFact, dynamic_dim: usize) -> Vec<usize> {
    fact.shape
        .iter()
        .map(|dim| dim.to_usize().unwrap_or(dynamic_dim))
        .collect()
}

pub fn random_tensor<R: Rng>(
    rng: &mut R,
    shape: &[usize],
    datum_type: DatumType,
) -> Result<Tensor, BoxError> {
    let len = shape.iter().product();
    let values: Vec<f64> = (0..len).map(|_| rng.random::<f64>()).collect();
    let tensor = tract_ndarray::ArrayD::from_shape_vec(tract_ndarray::IxDyn(shape), values)
        .map_err(|e| format!("Failed to shape synthetic input: {}", e))?
        .into_tensor();
    Ok(tensor.cast_to_dt(datum_type)?.into_owned())
}

/// Builds one random tensor per model input, in input order.
pub fn synthetic_inputs<R: Rng>(
    model: &TypedModel,
    dynamic_dim: usize,
    rng: &mut R,
) -> Result<TVec<TValue>, BoxError> {
    let mut inputs = TVec::with_capacity(model.inputs.len());
    for ix in 0..model.inputs.len() {
        let fact = model.input_fact(ix)?;
        let shape = concrete_shape(fact, dynamic_dim);
        let tensor = random_tensor(&mut *rng, &shape, fact.datum_type)?;
        tracing::debug!(input = ix, ?shape, dtype = ?fact.datum_type, "synthesized input");
        inputs.push(TValue::Const(tensor.into_arc_tensor()));
    }
    Ok(inputs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::benchmark::test_support::{abs_model, symbolic_abs_model};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_concrete_shape() {
        let fact = f32::fact([2, 36, 60, 1]);

        assert_eq!(concrete_shape(&fact, 8), vec![2, 36, 60, 1]);
    }

    #[test]
    fn test_concrete_shape_fills_symbolic_dims() {
        let model = symbolic_abs_model();
        let fact = model.input_fact(0).unwrap();

        assert_eq!(concrete_shape(fact, 4), vec![4, 3]);
        assert_eq!(concrete_shape(fact, 1), vec![1, 3]);
    }

    #[test]
    fn test_symbolic_inputs_use_dynamic_dim() {
        let model = symbolic_abs_model();

        let inputs = synthetic_inputs(&model, 4, &mut StdRng::seed_from_u64(5)).unwrap();

        assert_eq!(inputs.len(), 1);
        assert_eq!(inputs[0].shape(), &[4, 3]);
        assert_eq!(inputs[0].datum_type(), f32::datum_type());
    }

    #[test]
    fn test_random_f32_in_unit_interval() {
        let mut rng = StdRng::seed_from_u64(3);

        let tensor = random_tensor(&mut rng, &[4, 5], f32::datum_type()).unwrap();

        assert_eq!(tensor.shape(), &[4, 5]);
        assert_eq!(tensor.datum_type(), f32::datum_type());
        assert!(tensor
            .as_slice::<f32>()
            .unwrap()
            .iter()
            .all(|v| (0.0..1.0).contains(v)));
    }

    #[test]
    fn test_random_integer_input_is_zero() {
        let mut rng = StdRng::seed_from_u64(3);

        let tensor = random_tensor(&mut rng, &[2, 2], i64::datum_type()).unwrap();

        assert_eq!(tensor.as_slice::<i64>().unwrap(), &[0, 0, 0, 0]);
    }

    #[test]
    fn test_scalar_input() {
        let mut rng = StdRng::seed_from_u64(3);

        let tensor = random_tensor(&mut rng, &[], f64::datum_type()).unwrap();

        assert_eq!(tensor.len(), 1);
        assert_eq!(tensor.rank(), 0);
    }

    #[test]
    fn test_seeded_inputs_are_reproducible() {
        let model = abs_model();

        let first = synthetic_inputs(&model, 1, &mut StdRng::seed_from_u64(11)).unwrap();
        let second = synthetic_inputs(&model, 1, &mut StdRng::seed_from_u64(11)).unwrap();

        assert_eq!(first.len(), 1);
        assert_eq!(*first[0], *second[0]);
    }
}
