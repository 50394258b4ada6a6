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

//! Error types for APIDSL parsing.

use crate::lex::Location;
use std::fmt;
use thiserror::Error;

/// The kind of error that occurred during parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DslErrorKind {
    /// Unterminated object block or undecodable input bytes.
    Lexical,
    /// Embedded object failed to decode.
    Decode,
    /// Wrong token type or unknown keyword.
    Grammar,
    /// Wrong number of arguments for a keyword.
    Arity,
    /// A slot of the document was written twice.
    Redefinition,
    /// HTTP method outside the allowed set.
    UnknownMethod,
    /// Resource limit exceeded.
    Security,
}

impl fmt::Display for DslErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lexical => write!(f, "LexicalError"),
            Self::Decode => write!(f, "DecodeError"),
            Self::Grammar => write!(f, "GrammarError"),
            Self::Arity => write!(f, "ArityError"),
            Self::Redefinition => write!(f, "RedefinitionError"),
            Self::UnknownMethod => write!(f, "UnknownMethodError"),
            Self::Security => write!(f, "SecurityError"),
        }
    }
}

/// An error that occurred while parsing an APIDSL source.
///
/// Displays as `<source>:<line>:<column>: <message>` when a location is
/// attached, and as the bare message otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}{}", location_prefix(.location), .message)]
pub struct DslError {
    /// The kind of error.
    pub kind: DslErrorKind,
    /// Human-readable error message.
    pub message: String,
    /// Where in the source the error was detected.
    pub location: Option<Location>,
}

fn location_prefix(location: &Option<Location>) -> String {
    match location {
        Some(loc) => format!("{}: ", loc),
        None => String::new(),
    }
}

impl DslError {
    /// Create a new error without location.
    pub fn new(kind: DslErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            location: None,
        }
    }

    /// Anchor the error at a location, replacing any previous one.
    pub fn at(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    // Convenience constructors for each error kind
    pub fn lexical(message: impl Into<String>) -> Self {
        Self::new(DslErrorKind::Lexical, message)
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::new(DslErrorKind::Decode, message)
    }

    pub fn grammar(message: impl Into<String>) -> Self {
        Self::new(DslErrorKind::Grammar, message)
    }

    pub fn arity(message: impl Into<String>) -> Self {
        Self::new(DslErrorKind::Arity, message)
    }

    pub fn redefinition(message: impl Into<String>) -> Self {
        Self::new(DslErrorKind::Redefinition, message)
    }

    pub fn unknown_method(message: impl Into<String>) -> Self {
        Self::new(DslErrorKind::UnknownMethod, message)
    }

    pub fn security(message: impl Into<String>) -> Self {
        Self::new(DslErrorKind::Security, message)
    }

    /// Line of the attached location, if any.
    pub fn line(&self) -> Option<usize> {
        self.location.as_ref().map(Location::line)
    }
}

/// Result type for APIDSL operations.
pub type DslResult<T> = Result<T, DslError>;
