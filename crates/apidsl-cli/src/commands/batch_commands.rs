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

//! Batch command implementations - validate many APIDSL files at once

use crate::batch::{BatchConfig, BatchProcessor, ValidationOperation};
use crate::error::CliError;
use colored::Colorize;
use std::path::PathBuf;

/// Batch validate multiple APIDSL files.
///
/// Every file is parsed independently. A summary is printed, followed by
/// the positioned error of each failing file.
///
/// # Arguments
///
/// * `files` - List of file paths to validate
/// * `parallel` - Process files on the Rayon thread pool
/// * `threads` - Size of a dedicated thread pool; implies `parallel`
/// * `verbose` - Show per-file progress
///
/// # Errors
///
/// Returns `CliError::BatchFailed` if any file failed.
///
/// # Examples
///
/// ```no_run
/// use apidsl_cli::commands::batch_validate;
///
/// # fn main() -> Result<(), apidsl_cli::error::CliError> {
/// let files = vec!["a.dsl".to_string(), "b.dsl".to_string()];
/// batch_validate(files, true, Some(4), false)?;
/// # Ok(())
/// # }
/// ```
pub fn batch_validate(
    files: Vec<String>,
    parallel: bool,
    threads: Option<usize>,
    verbose: bool,
) -> Result<(), CliError> {
    let paths: Vec<PathBuf> = files.iter().map(PathBuf::from).collect();

    let config = BatchConfig {
        parallel_threshold: if parallel || threads.is_some() { 1 } else { usize::MAX },
        max_threads: threads,
        verbose,
        ..Default::default()
    };

    let processor = BatchProcessor::new(config);
    let results = processor.process(&paths, ValidationOperation, true)?;

    let records: usize = results
        .successes()
        .filter_map(|r| r.result.as_ref().ok())
        .sum();
    println!(
        "  {} {} records in {} valid files ({:.1} files/s)",
        "Parsed:".bright_cyan(),
        records,
        results.success_count(),
        results.throughput()
    );

    if !results.all_succeeded() {
        eprintln!();
        eprintln!("{}", "Validation failures:".red().bold());
        for failure in results.failures() {
            eprintln!("  {} {}", "✗".red(), failure.path.display());
            if let Err(e) = &failure.result {
                eprintln!("    {}", e.to_string().dimmed());
            }
        }
        return Err(CliError::BatchFailed {
            failed: results.failure_count(),
            total: results.total_files(),
        });
    }

    Ok(())
}
