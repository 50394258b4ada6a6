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

//! APIDSL CLI library for command-line parsing and execution.
//!
//! # Commands
//!
//! ## Validation & Inspection
//!
//! - **validate**: Parse a source and report its record counts
//! - **inspect**: Print the parsed document as a tree
//!
//! ## Format Conversion
//!
//! - **to-json**: OpenAPI JSON (compact or pretty)
//! - **to-yaml**: OpenAPI YAML
//!
//! ## Batch Processing
//!
//! - **batch-validate**: Validate multiple files, optionally in parallel
//!
//! # Examples
//!
//! ```no_run
//! use apidsl_cli::commands::{to_json, validate};
//!
//! # fn main() -> Result<(), apidsl_cli::error::CliError> {
//! validate("api.dsl")?;
//! to_json("api.dsl", Some("openapi.json"), true, Some("3.0.3"))?;
//! # Ok(())
//! # }
//! ```
//!
//! # Security
//!
//! Files larger than `APIDSL_MAX_FILE_SIZE` bytes (default 64 MB) are
//! rejected before they are read.

pub mod batch;
pub mod cli;
pub mod commands;
pub mod error;
