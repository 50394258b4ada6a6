// Dweve APIDSL - API Description DSL
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Structured error types for the APIDSL CLI.
//!
//! All CLI operations return `Result<T, CliError>`.

use apidsl_core::DslError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for APIDSL CLI operations.
///
/// Implements `Clone` so batch results can be collected from worker
/// threads.
#[derive(Error, Debug, Clone)]
pub enum CliError {
    /// I/O operation failed (file read, write, or metadata access).
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The file path that caused the error
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// File size exceeds the configured limit.
    #[error("File '{path}' is too large ({actual} bytes). Maximum allowed: {max} bytes ({max_mb} MB)")]
    FileTooLarge {
        path: PathBuf,
        actual: u64,
        max: u64,
        max_mb: u64,
    },

    /// The source failed to parse. Displays as `name:line:col: message`.
    #[error("{0}")]
    Parse(#[from] DslError),

    #[error("JSON conversion error: {0}")]
    JsonConversion(String),

    #[error("YAML conversion error: {0}")]
    YamlConversion(String),

    /// One or more files of a batch failed.
    #[error("{failed} of {total} files failed validation")]
    BatchFailed { failed: usize, total: usize },
}

impl CliError {
    /// Create an I/O error with path context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use apidsl_cli::error::CliError;
    /// use std::io;
    ///
    /// let err = CliError::io_error("api.dsl", io::Error::new(io::ErrorKind::NotFound, "missing"));
    /// assert!(err.to_string().contains("api.dsl"));
    /// ```
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    pub fn file_too_large(path: impl Into<PathBuf>, actual: u64, max: u64) -> Self {
        Self::FileTooLarge {
            path: path.into(),
            actual,
            max,
            max_mb: max / (1024 * 1024),
        }
    }
}

impl From<apidsl_json::JsonError> for CliError {
    fn from(err: apidsl_json::JsonError) -> Self {
        Self::JsonConversion(err.to_string())
    }
}

impl From<apidsl_yaml::YamlError> for CliError {
    fn from(err: apidsl_yaml::YamlError) -> Self {
        Self::YamlConversion(err.to_string())
    }
}
