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

//! APIDSL YAML Conversion
//!
//! Emits a parsed APIDSL document as an OpenAPI-shaped YAML document.
//!
//! # Examples
//!
//! ```rust
//! use apidsl_yaml::{to_yaml, ToYamlConfig};
//!
//! let doc = apidsl_core::parse("api.dsl", b"schema Widget {\n\"type\": \"object\"\n}\n").unwrap();
//! let yaml = to_yaml(&doc, &ToYamlConfig::default()).unwrap();
//! assert!(yaml.contains("Widget:"));
//! ```

pub mod error;
mod to_yaml;

pub use error::YamlError;
pub use to_yaml::{to_yaml, to_yaml_value, ToYamlConfig};
