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

//! Core commands operating on a single APIDSL file.

use crate::commands;
use crate::error::CliError;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum CoreCommands {
    /// Validate an APIDSL file
    ///
    /// Parses the file and prints its record counts, or the first error
    /// with its file:line:column position.
    Validate {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: String,
    },

    /// Print parsed structure
    ///
    /// Displays info, paths with their methods, schemas and security
    /// schemes as a tree.
    Inspect {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: String,

        /// Also print each object
        #[arg(short = 'd', long)]
        detailed: bool,
    },
}

impl CoreCommands {
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            CoreCommands::Validate { file } => commands::validate(&file),
            CoreCommands::Inspect { file, detailed } => commands::inspect(&file, detailed),
        }
    }
}
