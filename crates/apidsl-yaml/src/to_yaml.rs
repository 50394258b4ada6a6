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

//! APIDSL to YAML conversion

use crate::error::YamlError;
use apidsl_core::Document;
use serde_yaml::{Mapping, Value as YamlValue};

/// Configuration for YAML output
#[derive(Debug, Clone, Default)]
pub struct ToYamlConfig {
    /// Value of the top-level `openapi` field; omitted when `None`
    pub openapi_version: Option<String>,
}

impl ToYamlConfig {
    pub fn with_openapi_version(mut self, version: impl Into<String>) -> Self {
        self.openapi_version = Some(version.into());
        self
    }
}

/// Convert Document to YAML string
pub fn to_yaml(doc: &Document, config: &ToYamlConfig) -> Result<String, YamlError> {
    let value = to_yaml_value(doc, config)?;
    Ok(serde_yaml::to_string(&value)?)
}

/// Convert Document to serde_yaml::Value
///
/// Top-level keys keep the OpenAPI order: `openapi`, `info`, `paths`,
/// `components`. Nested keys are sorted.
pub fn to_yaml_value(doc: &Document, config: &ToYamlConfig) -> Result<YamlValue, YamlError> {
    let mut root = Mapping::new();

    if let Some(version) = &config.openapi_version {
        root.insert(key("openapi"), YamlValue::String(version.clone()));
    }
    if let Some(info) = doc.info() {
        root.insert(key("info"), serde_yaml::to_value(info)?);
    }
    if !doc.paths.is_empty() {
        let mut paths = Mapping::new();
        for (path, ops) in &doc.paths {
            let mut methods = Mapping::new();
            for (method, op) in ops {
                methods.insert(key(method.as_str()), serde_yaml::to_value(op)?);
            }
            paths.insert(key(path), YamlValue::Mapping(methods));
        }
        root.insert(key("paths"), YamlValue::Mapping(paths));
    }

    let mut components = Mapping::new();
    if !doc.schemas.is_empty() {
        components.insert(key("schemas"), serde_yaml::to_value(&doc.schemas)?);
    }
    if !doc.security_schemes.is_empty() {
        components.insert(
            key("securitySchemes"),
            serde_yaml::to_value(&doc.security_schemes)?,
        );
    }
    root.insert(key("components"), YamlValue::Mapping(components));

    Ok(YamlValue::Mapping(root))
}

fn key(name: &str) -> YamlValue {
    YamlValue::String(name.to_string())
}
