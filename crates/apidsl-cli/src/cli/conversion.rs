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

//! Conversion commands from APIDSL to OpenAPI documents.

use crate::commands;
use crate::error::CliError;
use clap::Subcommand;

/// Format conversion commands.
///
/// Output layout: `openapi` (when given), `info`, `paths` and
/// `components` with `schemas` and `securitySchemes`.
#[derive(Subcommand)]
pub enum ConversionCommands {
    /// Convert APIDSL to OpenAPI JSON
    ToJson {
        /// Input APIDSL file
        #[arg(value_name = "FILE")]
        file: String,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Pretty print JSON
        #[arg(short, long)]
        pretty: bool,

        /// Value of the top-level `openapi` field
        #[arg(long, value_name = "VERSION")]
        openapi: Option<String>,
    },

    /// Convert APIDSL to OpenAPI YAML
    ToYaml {
        /// Input APIDSL file
        #[arg(value_name = "FILE")]
        file: String,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Value of the top-level `openapi` field
        #[arg(long, value_name = "VERSION")]
        openapi: Option<String>,
    },
}

impl ConversionCommands {
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            ConversionCommands::ToJson {
                file,
                output,
                pretty,
                openapi,
            } => commands::to_json(&file, output.as_deref(), pretty, openapi.as_deref()),
            ConversionCommands::ToYaml {
                file,
                output,
                openapi,
            } => commands::to_yaml(&file, output.as_deref(), openapi.as_deref()),
        }
    }
}
