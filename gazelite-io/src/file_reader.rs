// Copyright (c) 2025 Pratik Barhate
// Licensed under the MIT License. See the LICENSE file in the project root for more information.

//! File Reader module that abstracts reading files from different storage types.
//!
//! This module provides functionality to read files from either local filesystem
//! or an S3 bucket through a unified trait interface.

use std::fs::File;
use std::future::Future;
use std::io::Read;
use std::pin::Pin;
use std::sync::Arc;

use crate::FileReaderResult;

const S3_SCHEME: &str = "s3://";

/// Trait defining the interface for reading files from different storage types
pub trait FileReader: Send + Sync {
    /// Reads the content of a file as a String
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the file (format depends on the implementation)
    fn read_string<'a>(
        &'a self,
        path: &'a str,
    ) -> Pin<Box<dyn Future<Output = FileReaderResult<String>> + Send + 'a>>;

    /// Reads the content of a file as bytes
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the file (format depends on the implementation)
    fn read_bytes<'a>(
        &'a self,
        path: &'a str,
    ) -> Pin<Box<dyn Future<Output = FileReaderResult<Vec<u8>>> + Send + 'a>>;
}

/// Returns true when the path points into an S3 bucket.
pub fn is_s3_path(path: &str) -> bool {
    path.starts_with(S3_SCHEME)
}

/// Picks the reader matching the storage the path points to.
///
/// AWS credentials are only resolved when the path is an S3 location, so local
/// runs never touch the AWS environment.
pub async fn reader_for(path: &str) -> Box<dyn FileReader> {
    if is_s3_path(path) {
        let aws_config = aws_config::load_from_env().await;
        tracing::debug!(path, "reading through S3");
        Box::new(S3Reader::new(aws_sdk_s3::Client::new(&aws_config)))
    } else {
        Box::new(LocalReader::new())
    }
}

/// Reader for local filesystem files
#[derive(Debug, Default)]
pub struct LocalReader;

impl LocalReader {
    pub fn new() -> Self {
        LocalReader
    }
}

impl FileReader for LocalReader {
    fn read_string<'a>(
        &'a self,
        path: &'a str,
    ) -> Pin<Box<dyn Future<Output = FileReaderResult<String>> + Send + 'a>> {
        Box::pin(async move {
            let mut file = File::open(path)
                .map_err(|e| format!("Failed to open {}: {}", path, e))?;
            let mut content = String::new();
            file.read_to_string(&mut content)?;
            Ok(content)
        })
    }

    fn read_bytes<'a>(
        &'a self,
        path: &'a str,
    ) -> Pin<Box<dyn Future<Output = FileReaderResult<Vec<u8>>> + Send + 'a>> {
        Box::pin(async move {
            let mut file = File::open(path)
                .map_err(|e| format!("Failed to open {}: {}", path, e))?;
            let mut content = Vec::new();
            file.read_to_end(&mut content)?;
            Ok(content)
        })
    }
}

/// Reader for files stored in S3
#[derive(Debug)]
pub struct S3Reader {
    client: Arc<aws_sdk_s3::Client>,
}

impl S3Reader {
    /// Creates a new S3Reader
    ///
    /// # Arguments
    ///
    /// * `client` - An initialized AWS S3 client
    pub fn new(client: aws_sdk_s3::Client) -> Self {
        S3Reader {
            client: Arc::new(client),
        }
    }

    /// Parses an S3 path in the format "s3://bucket-name/key/path"
    ///
    /// # Returns
    ///
    /// A tuple (bucket, key) if the path is valid
    fn parse_s3_path(s3_path: &str) -> FileReaderResult<(String, String)> {
        let path = s3_path
            .strip_prefix(S3_SCHEME)
            .ok_or("S3 path must start with s3://")?;
        let mut parts = path.splitn(2, '/');

        let bucket = parts
            .next()
            .filter(|b| !b.is_empty())
            .ok_or("Invalid S3 path format, missing bucket name")?;
        let key = parts
            .next()
            .filter(|k| !k.is_empty())
            .ok_or("Invalid S3 path format, missing key")?;

        Ok((bucket.to_string(), key.to_string()))
    }

    async fn fetch(client: &aws_sdk_s3::Client, path: &str) -> FileReaderResult<Vec<u8>> {
        let (bucket, key) = Self::parse_s3_path(path)?;
        let s3_response = client.get_object().bucket(bucket).key(key).send().await?;
        let bytes = s3_response.body.collect().await?;
        Ok(bytes.into_bytes().to_vec())
    }
}

impl FileReader for S3Reader {
    fn read_string<'a>(
        &'a self,
        path: &'a str,
    ) -> Pin<Box<dyn Future<Output = FileReaderResult<String>> + Send + 'a>> {
        let client = Arc::clone(&self.client);
        Box::pin(async move {
            let bytes = Self::fetch(&client, path).await?;
            Ok(String::from_utf8(bytes)?)
        })
    }

    fn read_bytes<'a>(
        &'a self,
        path: &'a str,
    ) -> Pin<Box<dyn Future<Output = FileReaderResult<Vec<u8>>> + Send + 'a>> {
        let client = Arc::clone(&self.client);
        Box::pin(async move { Self::fetch(&client, path).await })
    }
}
