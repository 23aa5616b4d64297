// Copyright (c) 2025 Pratik Barhate
// Licensed under the MIT License. See the LICENSE file in the project root for more information.

//! Storage access shared by the converter and the benchmarker.
//!
//! Configuration files and model artifacts can live on the local filesystem
//! or in S3; both tools go through [`reader_for`] so the path prefix alone
//! decides where the bytes come from.

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;
pub type FileReaderResult<T> = Result<T, BoxError>;

pub mod file_reader;

pub use file_reader::*;
