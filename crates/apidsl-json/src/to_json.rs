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

//! APIDSL to JSON conversion

use apidsl_core::{Document, Value};
use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

/// Errors raised while emitting JSON.
#[derive(Debug, Error)]
pub enum JsonError {
    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Configuration for JSON output
#[derive(Debug, Clone, Default)]
pub struct ToJsonConfig {
    /// Indent the output
    pub pretty: bool,
    /// Value of the top-level `openapi` field; omitted when `None`
    pub openapi_version: Option<String>,
}

impl ToJsonConfig {
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn with_openapi_version(mut self, version: impl Into<String>) -> Self {
        self.openapi_version = Some(version.into());
        self
    }
}

/// Borrowed OpenAPI layout of a document.
///
/// Top-level fields serialize in declaration order; map keys are sorted.
#[derive(Debug, Serialize)]
pub struct OpenApiDocument<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub openapi: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<&'a Value>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub paths: BTreeMap<&'a str, BTreeMap<&'static str, &'a Value>>,
    pub components: Components<'a>,
}

/// The `components` section. Always present, possibly empty.
#[derive(Debug, Serialize)]
pub struct Components<'a> {
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub schemas: BTreeMap<&'a str, &'a Value>,
    #[serde(rename = "securitySchemes", skip_serializing_if = "BTreeMap::is_empty")]
    pub security_schemes: BTreeMap<&'a str, &'a Value>,
}

impl<'a> OpenApiDocument<'a> {
    pub fn new(doc: &'a Document, openapi_version: Option<&'a str>) -> Self {
        let paths = doc
            .paths
            .iter()
            .map(|(path, ops)| {
                let methods = ops.iter().map(|(m, op)| (m.as_str(), op)).collect();
                (path.as_str(), methods)
            })
            .collect();

        Self {
            openapi: openapi_version,
            info: doc.info(),
            paths,
            components: Components {
                schemas: borrow_map(&doc.schemas),
                security_schemes: borrow_map(&doc.security_schemes),
            },
        }
    }
}

fn borrow_map(map: &BTreeMap<String, Value>) -> BTreeMap<&str, &Value> {
    map.iter().map(|(k, v)| (k.as_str(), v)).collect()
}

/// Convert Document to JSON string
pub fn to_json(doc: &Document, config: &ToJsonConfig) -> Result<String, JsonError> {
    let view = OpenApiDocument::new(doc, config.openapi_version.as_deref());
    let out = if config.pretty {
        serde_json::to_string_pretty(&view)?
    } else {
        serde_json::to_string(&view)?
    };
    Ok(out)
}

/// Convert Document to serde_json::Value
///
/// Object keys of the returned value are sorted, including the top level.
pub fn to_json_value(doc: &Document, config: &ToJsonConfig) -> Result<Value, JsonError> {
    let view = OpenApiDocument::new(doc, config.openapi_version.as_deref());
    Ok(serde_json::to_value(view)?)
}
