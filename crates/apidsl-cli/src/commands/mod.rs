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

//! CLI command implementations

mod batch_commands;
mod convert;
mod inspect;
mod validate;

pub use batch_commands::batch_validate;
pub use convert::{to_json, to_yaml};
pub use inspect::inspect;
pub use validate::validate;

use crate::error::CliError;
use apidsl_core::{parse, Document};
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tracing::debug;

/// Default maximum file size (64 MB), matching the parser's input limit.
/// Can be overridden via the APIDSL_MAX_FILE_SIZE environment variable.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 64 * 1024 * 1024;

/// Get the maximum file size from environment or use default.
fn get_max_file_size() -> u64 {
    std::env::var("APIDSL_MAX_FILE_SIZE")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_MAX_FILE_SIZE)
}

/// Read a file from disk with size validation.
///
/// The size is checked through metadata before any bytes are read.
/// Contents are returned as raw bytes; the parser reports invalid UTF-8
/// with a position.
///
/// # Errors
///
/// Returns `CliError::Io` if the file cannot be accessed or read and
/// `CliError::FileTooLarge` if it exceeds `APIDSL_MAX_FILE_SIZE`.
pub fn read_file(path: impl AsRef<Path>) -> Result<Vec<u8>, CliError> {
    let path = path.as_ref();
    let metadata = fs::metadata(path).map_err(|e| CliError::io_error(path, e))?;

    let max_file_size = get_max_file_size();
    if metadata.len() > max_file_size {
        return Err(CliError::file_too_large(path, metadata.len(), max_file_size));
    }

    fs::read(path).map_err(|e| CliError::io_error(path, e))
}

/// Read and parse a source file. The path is used as the source name in
/// error locations.
pub fn parse_file(path: impl AsRef<Path>) -> Result<Document, CliError> {
    let path = path.as_ref();
    let content = read_file(path)?;
    let name = path.display().to_string();
    debug!(file = %name, "parsing file");
    Ok(parse(&name, &content)?)
}

/// Write content to a file or stdout.
///
/// # Examples
///
/// ```no_run
/// use apidsl_cli::commands::write_output;
///
/// # fn main() -> Result<(), apidsl_cli::error::CliError> {
/// write_output("{}", None)?;
/// write_output("{}", Some("openapi.json"))?;
/// # Ok(())
/// # }
/// ```
pub fn write_output(content: &str, path: Option<&str>) -> Result<(), CliError> {
    match path {
        Some(p) => fs::write(p, content).map_err(|e| CliError::io_error(p, e)),
        None => io::stdout()
            .write_all(content.as_bytes())
            .map_err(|e| CliError::io_error("<stdout>", e)),
    }
}
