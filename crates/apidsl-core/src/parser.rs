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

//! Record assembly for APIDSL sources.
//!
//! A source is a sequence of records:
//!
//! ```text
//! info {
//! "title": "Widgets"
//! }
//! schema Widget {
//! "type": "object"
//! }
//! path /widgets get {
//! "summary": "list widgets"
//! }
//! ```
//!
//! Each record is a keyword, zero or more arguments and an object. The
//! first error stops the parse; no partial document is returned.
//!
//! End of input is a normal end both between records and after the
//! arguments of a record that has no object yet. Such a trailing record
//! is dropped.

use crate::decode::{ObjectDecoder, RelaxedObjectDecoder};
use crate::document::{arity_error, Document, Record};
use crate::error::{DslError, DslResult};
use crate::kinds::Keyword;
use crate::lex::{Reader, Source, SourcePos, Location, Token};
use crate::limits::Limits;
use tracing::{debug, trace};

/// Parsing options.
///
/// # Examples
///
/// ```
/// use apidsl_core::ParseOptions;
///
/// let opts = ParseOptions::builder()
///     .max_input_size(1024 * 1024)
///     .max_args(4)
///     .build();
/// assert_eq!(opts.limits.max_args, 4);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    /// Resource limits.
    pub limits: Limits,
}

impl ParseOptions {
    /// Create a new builder for ParseOptions.
    pub fn builder() -> ParseOptionsBuilder {
        ParseOptionsBuilder::new()
    }
}

/// Builder for ParseOptions.
#[derive(Debug, Clone, Default)]
pub struct ParseOptionsBuilder {
    limits: Limits,
}

impl ParseOptionsBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum input size in bytes.
    pub fn max_input_size(mut self, size: usize) -> Self {
        self.limits.max_input_size = size;
        self
    }

    /// Set the maximum size of a single embedded object in bytes.
    pub fn max_object_size(mut self, size: usize) -> Self {
        self.limits.max_object_size = size;
        self
    }

    /// Set the maximum number of arguments a record may carry.
    pub fn max_args(mut self, count: usize) -> Self {
        self.limits.max_args = count;
        self
    }

    /// Replace all limits at once.
    pub fn limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    pub fn build(self) -> ParseOptions {
        ParseOptions {
            limits: self.limits,
        }
    }
}

/// Parse a source with default options and the JSON5 object decoder.
///
/// `name` is used only in error locations.
///
/// # Examples
///
/// ```
/// use apidsl_core::{parse, Method};
///
/// let doc = parse("api.dsl", b"path /widgets get {\n\"summary\": \"list\"\n}\n").unwrap();
/// assert!(doc.operation("/widgets", Method::Get).is_some());
///
/// let err = parse("api.dsl", b"info {\n}\nfoo {\n}\n").unwrap_err();
/// assert_eq!(err.to_string(), "api.dsl:3:1: unknown keyword \"foo\"");
/// ```
pub fn parse(name: &str, input: &[u8]) -> DslResult<Document> {
    parse_with_options(name, input, &ParseOptions::default())
}

/// Parse a source with custom options and the JSON5 object decoder.
pub fn parse_with_options(name: &str, input: &[u8], options: &ParseOptions) -> DslResult<Document> {
    parse_with_decoder(name, input, options, &RelaxedObjectDecoder)
}

/// Parse a source with custom options and object decoder.
pub fn parse_with_decoder<D: ObjectDecoder + ?Sized>(
    name: &str,
    input: &[u8],
    options: &ParseOptions,
    decoder: &D,
) -> DslResult<Document> {
    let limits = &options.limits;
    if input.len() > limits.max_input_size {
        return Err(DslError::security(format!(
            "input size {} exceeds maximum {}",
            input.len(),
            limits.max_input_size
        ))
        .at(Location::new(name, SourcePos::new(1, 1))));
    }

    let text = std::str::from_utf8(input).map_err(|e| {
        let offset = e.valid_up_to();
        DslError::lexical("invalid UTF-8 in input")
            .at(Location::new(name, crate::lex::offset_to_pos(input, offset)))
    })?;

    debug!(source = name, bytes = input.len(), "parsing");
    let mut reader = Reader::new(Source::new(name, text), decoder, limits);
    let mut doc = Document::new();

    while let Some((anchor, record)) = read_record(&mut reader, limits)? {
        trace!(keyword = %record.keyword, args = ?record.args, "record");
        doc.insert(record).map_err(|e| e.at(reader.location(anchor)))?;
    }

    debug!(
        source = name,
        records = doc.record_count(),
        "parsed"
    );
    Ok(doc)
}

/// Read one record, returning it with the offset of its keyword.
fn read_record<D: ObjectDecoder + ?Sized>(
    reader: &mut Reader<'_, D>,
    limits: &Limits,
) -> DslResult<Option<(usize, Record)>> {
    let keyword = match reader.next_token()? {
        None => return Ok(None),
        Some(Token::Ident(ident)) => Keyword::from_ident(&ident).ok_or_else(|| {
            DslError::grammar(format!("unknown keyword {:?}", ident))
                .at(reader.location(reader.token_start()))
        })?,
        Some(other) => {
            return Err(DslError::grammar(format!(
                "unexpected {} where a keyword was expected",
                other.kind()
            ))
            .at(reader.location(reader.token_start())))
        }
    };
    let anchor = reader.token_start();

    // arguments past the limit are counted but not kept
    let mut args = Vec::new();
    let mut count = 0usize;
    let object = loop {
        match reader.next_token()? {
            None => return Ok(None),
            Some(Token::Object(value)) => break value,
            Some(Token::Ident(arg)) => {
                count += 1;
                if count <= limits.max_args {
                    args.push(arg);
                }
            }
        }
    };

    if count > limits.max_args {
        let err = if count == keyword.arity() {
            DslError::security(format!(
                "{} record has {} arguments, maximum is {}",
                keyword, count, limits.max_args
            ))
        } else {
            arity_error(keyword, count)
        };
        return Err(err.at(reader.location(anchor)));
    }

    Ok(Some((anchor, Record::new(keyword, args, object))))
}
