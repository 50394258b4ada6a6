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

//! Conversion commands - APIDSL to OpenAPI JSON and YAML

use super::{parse_file, write_output};
use crate::error::CliError;
use apidsl_json::ToJsonConfig;
use apidsl_yaml::ToYamlConfig;

/// Convert an APIDSL file to OpenAPI JSON.
///
/// # Arguments
///
/// * `file` - Source file path
/// * `output` - Output path; stdout when `None`
/// * `pretty` - Indent the output
/// * `openapi` - Value for the top-level `openapi` field
pub fn to_json(
    file: &str,
    output: Option<&str>,
    pretty: bool,
    openapi: Option<&str>,
) -> Result<(), CliError> {
    let doc = parse_file(file)?;
    let config = ToJsonConfig {
        pretty,
        openapi_version: openapi.map(str::to_string),
    };
    let mut json = apidsl_json::to_json(&doc, &config)?;
    json.push('\n');
    write_output(&json, output)
}

/// Convert an APIDSL file to OpenAPI YAML.
pub fn to_yaml(file: &str, output: Option<&str>, openapi: Option<&str>) -> Result<(), CliError> {
    let doc = parse_file(file)?;
    let config = ToYamlConfig {
        openapi_version: openapi.map(str::to_string),
    };
    let yaml = apidsl_yaml::to_yaml(&doc, &config)?;
    write_output(&yaml, output)
}
