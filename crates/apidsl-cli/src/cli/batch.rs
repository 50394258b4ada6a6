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

//! Batch processing commands.

use crate::commands;
use crate::error::CliError;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum BatchCommands {
    /// Batch validate multiple APIDSL files
    ///
    /// Each file is validated independently; the command fails if any
    /// file fails.
    BatchValidate {
        /// Input file paths
        #[arg(value_name = "FILES", num_args = 1..)]
        files: Vec<String>,

        /// Force parallel processing
        #[arg(short, long)]
        parallel: bool,

        /// Number of worker threads (implies --parallel)
        #[arg(short, long, value_name = "N")]
        threads: Option<usize>,
    },
}

impl BatchCommands {
    /// `verbose` comes from the global `--verbose` flag.
    pub fn execute(self, verbose: bool) -> Result<(), CliError> {
        match self {
            BatchCommands::BatchValidate {
                files,
                parallel,
                threads,
            } => commands::batch_validate(files, parallel, threads, verbose),
        }
    }
}
