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

//! APIDSL JSON Conversion
//!
//! Emits a parsed APIDSL [`Document`](apidsl_core::Document) as an
//! OpenAPI-shaped JSON document.
//!
//! # Examples
//!
//! ```rust
//! use apidsl_json::{to_json, ToJsonConfig};
//!
//! let doc = apidsl_core::parse("api.dsl", b"info {\n\"title\": \"x\"\n}\n").unwrap();
//! let config = ToJsonConfig::default().with_openapi_version("3.0.0");
//!
//! let json = to_json(&doc, &config).unwrap();
//! assert_eq!(
//!     json,
//!     r#"{"openapi":"3.0.0","info":{"title":"x"},"components":{}}"#
//! );
//! ```

mod to_json;

pub use to_json::{to_json, to_json_value, Components, JsonError, OpenApiDocument, ToJsonConfig};
