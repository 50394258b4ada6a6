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

//! Decoding of embedded object blocks.
//!
//! The reader only finds where an object block starts and ends. Turning
//! the captured bytes into a value is delegated to an [`ObjectDecoder`].
//!
//! Two decoders are provided. [`RelaxedObjectDecoder`] is the default and
//! accepts JSON5: unquoted keys, trailing commas, single-quoted strings
//! and comments. [`JsonObjectDecoder`] accepts strict JSON only.
//!
//! # Examples
//!
//! ```
//! use apidsl_core::{JsonObjectDecoder, ObjectDecoder, RelaxedObjectDecoder};
//!
//! let body = b"{\n// widget\ntype: 'object',\n}";
//! let value = RelaxedObjectDecoder.decode(body).unwrap();
//! assert_eq!(value["type"], "object");
//! assert!(JsonObjectDecoder.decode(body).is_err());
//!
//! let err = JsonObjectDecoder.decode(b"{\n\"type\" \"object\"\n}").unwrap_err();
//! assert_eq!(err.offset(), Some(9));
//! ```

use serde_json::error::Category;
use serde_json::Value;
use thiserror::Error;

/// Turns a captured object block into a generic value.
pub trait ObjectDecoder: Send + Sync {
    /// Decode `input`, which starts with `{` and ends with the `}` that
    /// terminated the block.
    fn decode(&self, input: &[u8]) -> Result<Value, DecodeError>;
}

/// A decode failure, optionally carrying a byte offset into the input
/// that was handed to the decoder.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct DecodeError {
    message: String,
    offset: Option<usize>,
}

impl DecodeError {
    /// Create an error with no position.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            offset: None,
        }
    }

    /// Create an error at a byte offset local to the decoded input.
    pub fn at_offset(message: impl Into<String>, offset: usize) -> Self {
        Self {
            message: message.into(),
            offset: Some(offset),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn offset(&self) -> Option<usize> {
        self.offset
    }
}

/// Strict JSON decoder backed by `serde_json`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonObjectDecoder;

impl ObjectDecoder for JsonObjectDecoder {
    fn decode(&self, input: &[u8]) -> Result<Value, DecodeError> {
        serde_json::from_slice(input).map_err(|err| {
            let message = strip_position(&err.to_string());
            match err.classify() {
                Category::Syntax | Category::Eof => {
                    let offset = line_column_to_offset(input, err.line(), err.column());
                    DecodeError::at_offset(message, offset)
                }
                Category::Io | Category::Data => DecodeError::new(message),
            }
        })
    }
}

/// JSON5 decoder backed by `json5`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RelaxedObjectDecoder;

impl ObjectDecoder for RelaxedObjectDecoder {
    fn decode(&self, input: &[u8]) -> Result<Value, DecodeError> {
        let text = std::str::from_utf8(input).map_err(|e| {
            DecodeError::at_offset("invalid UTF-8 in object", e.valid_up_to())
        })?;
        json5::from_str(text).map_err(|err| match err {
            json5::Error::Message { msg, location } => {
                let message = last_line(&msg);
                match location {
                    Some(loc) => DecodeError::at_offset(
                        message,
                        char_line_column_to_offset(text, loc.line, loc.column),
                    ),
                    None => DecodeError::new(message),
                }
            }
        })
    }
}

/// json5 syntax errors render a multi-line excerpt ending in
/// `= expected ...`; keep only that final line.
fn last_line(message: &str) -> String {
    let line = message
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .last()
        .unwrap_or(message);
    line.strip_prefix("= ").unwrap_or(line).to_string()
}

/// Like [`line_column_to_offset`], for a column counted in characters.
fn char_line_column_to_offset(text: &str, line: usize, column: usize) -> usize {
    let line_start = line_column_to_offset(text.as_bytes(), line, 1);
    text[line_start..]
        .char_indices()
        .nth(column.saturating_sub(1))
        .map_or(text.len(), |(idx, _)| line_start + idx)
}

/// serde_json appends " at line L column C" relative to the object block;
/// that position is replaced by an absolute one, so drop it here.
fn strip_position(message: &str) -> String {
    match message.rfind(" at line ") {
        Some(idx) => message[..idx].to_string(),
        None => message.to_string(),
    }
}

/// Converts serde_json's 1-based line and column into a byte offset.
fn line_column_to_offset(input: &[u8], line: usize, column: usize) -> usize {
    let line_start = if line <= 1 {
        0
    } else {
        memchr::memchr_iter(b'\n', input)
            .nth(line - 2)
            .map_or(input.len(), |nl| nl + 1)
    };
    (line_start + column.saturating_sub(1)).min(input.len())
}
