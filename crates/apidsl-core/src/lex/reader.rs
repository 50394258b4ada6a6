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

//! Token reader.
//!
//! The reader walks a [`Source`] left to right and yields identifiers and
//! decoded objects. Whitespace between tokens is skipped.
//!
//! An object starts at `{` and runs up to the first `}` that is the first
//! character of its line. Braces anywhere else, including nested ones, do
//! not end the object:
//!
//! ```text
//! schema Widget {
//!   "properties": {"id": {"type": "string"}}
//! }
//! ```
//!
//! A body whose own text starts a line with `}` before the real end is
//! cut short at that line.

use super::span::{Location, Source};
use super::tokens::Token;
use crate::decode::ObjectDecoder;
use crate::error::{DslError, DslResult};
use crate::limits::Limits;
use memchr::memmem;

/// Line break immediately followed by the closing brace.
const OBJECT_TERMINATOR: &[u8] = b"\n}";

/// Reads tokens from a source buffer.
pub struct Reader<'a, D: ?Sized> {
    source: Source<'a>,
    decoder: &'a D,
    limits: &'a Limits,
    offset: usize,
    token_start: usize,
}

impl<'a, D: ObjectDecoder + ?Sized> Reader<'a, D> {
    pub fn new(source: Source<'a>, decoder: &'a D, limits: &'a Limits) -> Self {
        Self {
            source,
            decoder,
            limits,
            offset: 0,
            token_start: 0,
        }
    }

    /// Byte offset where the most recent token started.
    pub fn token_start(&self) -> usize {
        self.token_start
    }

    /// Byte offset of the next unread byte.
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn source(&self) -> Source<'a> {
        self.source
    }

    /// Location of a byte offset in the source.
    pub fn location(&self, offset: usize) -> Location {
        self.source.location(offset)
    }

    /// Read the next token.
    ///
    /// Returns `Ok(None)` once the input is exhausted. An identifier cut
    /// off by the end of input is still returned; the following call
    /// reports the end.
    pub fn next_token(&mut self) -> DslResult<Option<Token>> {
        self.skip_space();
        self.token_start = self.offset;

        let rest = &self.source.text()[self.offset..];
        match rest.chars().next() {
            None => Ok(None),
            Some('{') => self.read_object().map(Some),
            Some(_) => {
                let len = rest.find(char::is_whitespace).unwrap_or(rest.len());
                self.offset += len;
                Ok(Some(Token::Ident(rest[..len].to_string())))
            }
        }
    }

    fn skip_space(&mut self) {
        let rest = &self.source.text()[self.offset..];
        self.offset += rest.len() - rest.trim_start().len();
    }

    fn read_object(&mut self) -> DslResult<Token> {
        let start = self.offset;
        let rest = &self.source.bytes()[start..];

        let len = match memmem::find(rest, OBJECT_TERMINATOR) {
            Some(idx) => idx + OBJECT_TERMINATOR.len(),
            None => {
                return Err(DslError::lexical("unexpected end of input in object")
                    .at(self.location(start)))
            }
        };
        if len > self.limits.max_object_size {
            return Err(DslError::security(format!(
                "object size {} exceeds maximum {}",
                len, self.limits.max_object_size
            ))
            .at(self.location(start)));
        }

        self.offset = start + len;
        match self.decoder.decode(&rest[..len]) {
            Ok(value) => Ok(Token::Object(value)),
            Err(err) => {
                let at = start + err.offset().unwrap_or(0);
                Err(DslError::decode(format!("invalid object: {}", err.message()))
                    .at(self.location(at)))
            }
        }
    }
}
