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

//! Tokens produced by the [`Reader`](super::Reader).

use serde_json::Value;
use std::fmt;

/// A single token read from the input.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// A whitespace-delimited run of non-space characters.
    Ident(String),
    /// A decoded embedded object.
    Object(Value),
}

impl Token {
    /// Returns the kind of this token.
    pub fn kind(&self) -> TokenKind {
        match self {
            Self::Ident(_) => TokenKind::Ident,
            Self::Object(_) => TokenKind::Object,
        }
    }

    /// Try to get as identifier text.
    pub fn as_ident(&self) -> Option<&str> {
        match self {
            Self::Ident(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get as a decoded object.
    pub fn as_object(&self) -> Option<&Value> {
        match self {
            Self::Object(v) => Some(v),
            _ => None,
        }
    }
}

/// The kind of a [`Token`], used in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Ident,
    Object,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ident => write!(f, "identifier"),
            Self::Object => write!(f, "object"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_token_kind() {
        assert_eq!(Token::Ident("info".to_string()).kind(), TokenKind::Ident);
        assert_eq!(Token::Object(json!({})).kind(), TokenKind::Object);
    }

    #[test]
    fn test_token_accessors() {
        let ident = Token::Ident("schema".to_string());
        assert_eq!(ident.as_ident(), Some("schema"));
        assert!(ident.as_object().is_none());

        let obj = Token::Object(json!({"type": "object"}));
        assert!(obj.as_ident().is_none());
        assert_eq!(obj.as_object(), Some(&json!({"type": "object"})));
    }

    #[test]
    fn test_token_kind_display() {
        assert_eq!(TokenKind::Ident.to_string(), "identifier");
        assert_eq!(TokenKind::Object.to_string(), "object");
    }
}
