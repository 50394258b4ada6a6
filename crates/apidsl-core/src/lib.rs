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

//! Core parser and document model for the APIDSL format.
//!
//! APIDSL describes an HTTP API as a flat list of records, each made of a
//! keyword, positional arguments and an embedded JSON5 object:
//!
//! ```text
//! info {
//! "title": "Widgets", "version": "1.0"
//! }
//! security apiKey {
//! "type": "apiKey", "name": "X-Key", "in": "header"
//! }
//! schema Widget {
//! "type": "object"
//! }
//! path /widgets get {
//! "summary": "list widgets"
//! }
//! ```
//!
//! [`parse`] turns such a source into a [`Document`], rejecting unknown
//! keywords, wrong argument counts, disallowed methods and redefinitions.
//! Errors carry a `name:line:column` location.
//!
//! The embedded objects are decoded by an [`ObjectDecoder`];
//! [`RelaxedObjectDecoder`] is used unless another one, such as the strict
//! [`JsonObjectDecoder`], is supplied through [`parse_with_decoder`].

mod decode;
mod document;
mod error;
mod kinds;
pub mod lex;
mod limits;
mod parser;

pub use decode::{DecodeError, JsonObjectDecoder, ObjectDecoder, RelaxedObjectDecoder};
pub use document::{Document, Operations, Record};
pub use error::{DslError, DslErrorKind, DslResult};
pub use kinds::{Keyword, Method};
pub use limits::Limits;
pub use parser::{parse, parse_with_decoder, parse_with_options, ParseOptions, ParseOptionsBuilder};

// Re-export the generic value type stored in documents
pub use serde_json::Value;
