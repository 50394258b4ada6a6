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

//! Source buffers and byte-offset to position mapping.
//!
//! Every diagnostic produced by the reader and the record assembler is
//! anchored at a byte offset into the input. This module turns such an
//! offset into a human-readable `name:line:column` location.
//!
//! # Examples
//!
//! ```
//! use apidsl_core::lex::Source;
//!
//! let source = Source::new("api.dsl", "info {\n}\nfoo {\n}\n");
//! assert_eq!(source.location(9).to_string(), "api.dsl:3:1");
//! ```

use std::fmt;

/// A position in source code.
///
/// Lines and columns are 1-indexed. Columns count bytes within the line.
/// The column is absent when no line break follows the offset, in which
/// case only the last line number is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourcePos {
    line: usize,
    column: Option<usize>,
}

impl SourcePos {
    /// Creates a position with both line and column.
    #[inline]
    pub const fn new(line: usize, column: usize) -> Self {
        Self {
            line,
            column: Some(column),
        }
    }

    /// Creates a position that only knows its line.
    #[inline]
    pub const fn line_only(line: usize) -> Self {
        Self { line, column: None }
    }

    /// Returns the line number.
    #[inline]
    pub const fn line(&self) -> usize {
        self.line
    }

    /// Returns the column number, if known.
    #[inline]
    pub const fn column(&self) -> Option<usize> {
        self.column
    }
}

impl fmt::Display for SourcePos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.column {
            Some(column) => write!(f, "{}:{}", self.line, column),
            None => write!(f, "{}", self.line),
        }
    }
}

/// A named position, as embedded in error messages.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Location {
    source: String,
    pos: SourcePos,
}

impl Location {
    /// Creates a location in the named source.
    pub fn new(source: impl Into<String>, pos: SourcePos) -> Self {
        Self {
            source: source.into(),
            pos,
        }
    }

    /// Returns the source name (usually a file name).
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the line number.
    pub fn line(&self) -> usize {
        self.pos.line()
    }

    /// Returns the column number, if known.
    pub fn column(&self) -> Option<usize> {
        self.pos.column()
    }

    /// Returns the underlying position.
    pub fn pos(&self) -> SourcePos {
        self.pos
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.source, self.pos)
    }
}

/// Maps a byte offset in `buf` to a line and column.
///
/// Offsets with no line break at or after them, such as those on an
/// unterminated final line, map to the last line without a column.
pub fn offset_to_pos(buf: &[u8], offset: usize) -> SourcePos {
    let mut line = 1;
    let mut line_start = 0;
    for newline in memchr::memchr_iter(b'\n', buf) {
        if newline >= offset {
            return SourcePos::new(line, offset - line_start + 1);
        }
        line += 1;
        line_start = newline + 1;
    }
    SourcePos::line_only(line)
}

/// A named, UTF-8 validated input buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Source<'a> {
    name: &'a str,
    text: &'a str,
}

impl<'a> Source<'a> {
    /// Creates a source from a name and its contents.
    pub const fn new(name: &'a str, text: &'a str) -> Self {
        Self { name, text }
    }

    /// Returns the source name.
    pub const fn name(&self) -> &'a str {
        self.name
    }

    /// Returns the source text.
    pub const fn text(&self) -> &'a str {
        self.text
    }

    /// Returns the source text as bytes.
    pub const fn bytes(&self) -> &'a [u8] {
        self.text.as_bytes()
    }

    /// Returns the length of the source in bytes.
    pub const fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns true if the source is empty.
    pub const fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Maps a byte offset to a position.
    pub fn position(&self, offset: usize) -> SourcePos {
        offset_to_pos(self.bytes(), offset)
    }

    /// Maps a byte offset to a named location.
    pub fn location(&self, offset: usize) -> Location {
        Location::new(self.name, self.position(offset))
    }
}
