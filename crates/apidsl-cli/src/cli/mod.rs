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

//! CLI command definitions and argument parsing.
//!
//! - [`core`]: validate, inspect
//! - [`conversion`]: to-json, to-yaml
//! - [`batch`]: batch-validate

mod batch;
mod conversion;
mod core;

use crate::error::CliError;
use clap::Subcommand;

pub use batch::BatchCommands;
pub use conversion::ConversionCommands;
pub use core::CoreCommands;

/// Top-level CLI commands enum.
///
/// Each category is flattened so that all subcommands appear at the top
/// level:
///
/// ```text
/// Commands
/// ├── Core (validate, inspect)
/// ├── Conversion (to-json, to-yaml)
/// └── Batch (batch-validate)
/// ```
#[derive(Subcommand)]
pub enum Commands {
    #[command(flatten)]
    Core(CoreCommands),

    #[command(flatten)]
    Conversion(ConversionCommands),

    #[command(flatten)]
    Batch(BatchCommands),
}

impl Commands {
    /// Execute the command with the provided arguments.
    pub fn execute(self, verbose: bool) -> Result<(), CliError> {
        match self {
            Commands::Core(cmd) => cmd.execute(),
            Commands::Conversion(cmd) => cmd.execute(),
            Commands::Batch(cmd) => cmd.execute(verbose),
        }
    }
}
