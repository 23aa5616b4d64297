// Copyright (c) 2025 Pratik Barhate
// Licensed under the MIT License. See the LICENSE file in the project root for more information.

use aws_sdk_cloudwatch::types::{MetricDatum, StandardUnit};
use gazelite_io::BoxError;

pub(crate) mod model_loader;

pub(crate) use model_loader::*;

use crate::benchmark::BenchmarkSummary;

/// Publishes the headline numbers of a benchmark run to CloudWatch.
pub(crate) async fn publish_summary(
    cloudwatch_client: &aws_sdk_cloudwatch::Client,
    namespace: &str,
    summary: &BenchmarkSummary,
) -> Result<(), BoxError> {
    cloudwatch_client
        .put_metric_data()
        .namespace(namespace)
        .metric_data(
            MetricDatum::builder()
                .metric_name("AvgInferenceTime")
                .value(summary.avg_inference_time_ms)
                .unit(StandardUnit::Milliseconds)
                .build(),
        )
        .metric_data(
            MetricDatum::builder()
                .metric_name("ModelSize")
                .value(summary.model_size_mb)
                .unit(StandardUnit::Megabytes)
                .build(),
        )
        .send()
        .await?;
    tracing::info!(namespace, "published benchmark metrics");
    Ok(())
}
