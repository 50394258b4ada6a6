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

//! Validate command - APIDSL source validation

use super::parse_file;
use crate::error::CliError;
use colored::Colorize;

/// Validate an APIDSL source file.
///
/// Prints `✓ FILE` followed by record counts when the file parses, or
/// `✗ FILE` and returns the positioned parse error otherwise.
///
/// # Examples
///
/// ```no_run
/// use apidsl_cli::commands::validate;
///
/// # fn main() -> Result<(), apidsl_cli::error::CliError> {
/// validate("api.dsl")?;
/// # Ok(())
/// # }
/// ```
pub fn validate(file: &str) -> Result<(), CliError> {
    match parse_file(file) {
        Ok(doc) => {
            println!("{} {}", "✓".green().bold(), file);
            println!("  Info: {}", if doc.info().is_some() { "yes" } else { "no" });
            println!("  Paths: {}", doc.paths.len());
            println!("  Operations: {}", doc.operation_count());
            println!("  Schemas: {}", doc.schemas.len());
            println!("  Security schemes: {}", doc.security_schemes.len());
            Ok(())
        }
        Err(e) => {
            println!("{} {}", "✗".red().bold(), file);
            Err(e)
        }
    }
}
