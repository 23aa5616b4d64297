// Copyright (c) 2025 Pratik Barhate
// Licensed under the MIT License. See the LICENSE file in the project root for more information.

use gazelite_io::BoxError;
use std::time::{Duration, Instant};
use tract_onnx::prelude::*;

use crate::benchmark::TractRunnableModel;

/// A model that can be invoked on a fixed set of inputs.
pub trait Invoke {
    fn invoke(&self, inputs: &TVec<TValue>) -> Result<(), BoxError>;
}

impl Invoke for TractRunnableModel {
    fn invoke(&self, inputs: &TVec<TValue>) -> Result<(), BoxError> {
        self.run(inputs.clone())?;
        Ok(())
    }
}

/// Runs `warmup_runs` untimed invocations, then returns the wall-clock time
/// taken by `num_runs` sequential invocations on the same inputs.
pub fn time_invocations<M: Invoke + ?Sized>(
    model: &M,
    inputs: &TVec<TValue>,
    num_runs: u32,
    warmup_runs: u32,
) -> Result<Duration, BoxError> {
    for _ in 0..warmup_runs {
        model.invoke(inputs)?;
    }
    let start_time = Instant::now();
    for _ in 0..num_runs {
        model.invoke(inputs)?;
    }
    Ok(start_time.elapsed())
}

pub fn mean_latency_ms(total: Duration, num_runs: u32) -> f64 {
    if num_runs == 0 {
        return 0.0;
    }
    total.as_secs_f64() * 1000.0 / num_runs as f64
}
