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

//! Example demonstrating custom limits configuration.
//!
//! Shows how the input, object and argument limits reject oversized
//! sources with a positioned `SecurityError`.

use apidsl_core::{parse_with_options, Limits, ParseOptions};

const SOURCE: &[u8] = b"info {
\"title\": \"Limits demo\",
\"description\": \"An object that is larger than the strict object limit\"
}
path /widgets get {
\"summary\": \"list widgets\"
}
";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("APIDSL Custom Limits Example\n");

    let defaults = Limits::default();
    println!("1. Default Limits:");
    println!("   max_input_size: {} bytes", defaults.max_input_size);
    println!("   max_object_size: {} bytes", defaults.max_object_size);
    println!("   max_args: {}\n", defaults.max_args);

    let doc = parse_with_options("demo.dsl", SOURCE, &ParseOptions::default())?;
    println!("   Parsed {} records with default limits\n", doc.record_count());

    println!("2. Strict Object Limit (64 bytes):");
    let strict = ParseOptions::builder().max_object_size(64).build();
    match parse_with_options("demo.dsl", SOURCE, &strict) {
        Ok(doc) => println!("   Parsed {} records\n", doc.record_count()),
        Err(e) => println!("   {}: {}\n", e.kind, e),
    }

    println!("3. Strict Input Limit (32 bytes):");
    let tiny = ParseOptions::builder().max_input_size(32).build();
    match parse_with_options("demo.dsl", SOURCE, &tiny) {
        Ok(doc) => println!("   Parsed {} records\n", doc.record_count()),
        Err(e) => println!("   {}: {}\n", e.kind, e),
    }

    println!("4. Unlimited:");
    let unlimited = ParseOptions::builder().limits(Limits::unlimited()).build();
    let doc = parse_with_options("demo.dsl", SOURCE, &unlimited)?;
    println!("   Parsed {} records", doc.record_count());

    Ok(())
}
