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

//! Lexical analysis for APIDSL.
//!
//! # Module Structure
//!
//! - [`span`] - Source buffers and offset to line/column mapping
//! - [`tokens`] - Token vocabulary
//! - [`reader`] - The token reader, including object block capture
//!
//! # Examples
//!
//! ```
//! use apidsl_core::lex::{Reader, Source, Token};
//! use apidsl_core::{JsonObjectDecoder, Limits};
//!
//! let limits = Limits::default();
//! let source = Source::new("api.dsl", "schema Widget {\n\"type\": \"object\"\n}\n");
//! let mut reader = Reader::new(source, &JsonObjectDecoder, &limits);
//!
//! assert_eq!(reader.next_token().unwrap(), Some(Token::Ident("schema".into())));
//! assert_eq!(reader.next_token().unwrap(), Some(Token::Ident("Widget".into())));
//! assert!(matches!(reader.next_token().unwrap(), Some(Token::Object(_))));
//! assert_eq!(reader.next_token().unwrap(), None);
//! ```

pub mod reader;
pub mod span;
pub mod tokens;

pub use reader::Reader;
pub use span::{offset_to_pos, Location, Source, SourcePos};
pub use tokens::{Token, TokenKind};
