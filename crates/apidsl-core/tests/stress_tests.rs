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

//! Stress tests for apidsl-core parsing.
//!
//! These tests verify behavior with large inputs, configured limits and
//! concurrent parsing.

use apidsl_core::{parse, parse_with_options, DslErrorKind, Limits, Method, ParseOptions};
use std::sync::Arc;
use std::thread;

fn many_paths(count: usize) -> String {
    let mut doc = String::from("info {\n\"title\": \"stress\"\n}\n");
    for i in 0..count {
        doc.push_str(&format!(
            "path /items/{} get {{\n\"operationId\": \"get{}\"\n}}\n",
            i, i
        ));
    }
    doc
}

// =============================================================================
// Large Document Tests
// =============================================================================

#[test]
fn test_parse_10k_paths() {
    let doc = many_paths(10_000);
    let parsed = parse("stress.dsl", doc.as_bytes()).unwrap();
    assert_eq!(parsed.paths.len(), 10_000);
    assert_eq!(parsed.record_count(), 10_001);
    assert_eq!(
        parsed.operation("/items/9999", Method::Get).unwrap()["operationId"],
        "get9999"
    );
}

#[test]
fn test_large_single_object() {
    let mut doc = String::from("schema Big {\n\"enum\": [");
    for i in 0..50_000 {
        if i > 0 {
            doc.push_str(", ");
        }
        doc.push_str(&i.to_string());
    }
    doc.push_str("]\n}\n");

    let parsed = parse("stress.dsl", doc.as_bytes()).unwrap();
    let values = parsed.schema("Big").unwrap()["enum"].as_array().unwrap();
    assert_eq!(values.len(), 50_000);
}

#[test]
fn test_error_line_late_in_large_document() {
    let mut doc = many_paths(2_000);
    doc.push_str("bogus {\n}\n");
    let err = parse("stress.dsl", doc.as_bytes()).unwrap_err();
    assert_eq!(err.kind, DslErrorKind::Grammar);
    // three lines of info plus three per path
    assert_eq!(err.line(), Some(3 + 2_000 * 3 + 1));
}

// =============================================================================
// Limits Tests
// =============================================================================

#[test]
fn test_input_size_limit() {
    let doc = many_paths(100);
    let opts = ParseOptions::builder().max_input_size(1024).build();
    let err = parse_with_options("stress.dsl", doc.as_bytes(), &opts).unwrap_err();
    assert_eq!(err.kind, DslErrorKind::Security);
}

#[test]
fn test_object_size_limit() {
    let doc = format!("schema A {{\n\"description\": \"{}\"\n}}\n", "x".repeat(4096));
    let opts = ParseOptions::builder().max_object_size(1024).build();
    let err = parse_with_options("stress.dsl", doc.as_bytes(), &opts).unwrap_err();
    assert_eq!(err.kind, DslErrorKind::Security);
    assert_eq!(err.line(), Some(1));
}

#[test]
fn test_argument_limit() {
    let doc = "path /x get {\n}\n";
    let opts = ParseOptions::builder().max_args(1).build();
    let err = parse_with_options("stress.dsl", doc.as_bytes(), &opts).unwrap_err();
    assert_eq!(err.kind, DslErrorKind::Security);
    assert_eq!(err.line(), Some(1));
}

#[test]
fn test_long_argument_list() {
    let args = vec!["a"; 10_000].join(" ");
    let err = parse("stress.dsl", format!("path {} {{\n}}\n", args).as_bytes()).unwrap_err();
    assert_eq!(err.kind, DslErrorKind::Arity);
    assert!(err.message.contains("got 10000 want 2"));

    // without an object the record is dropped
    let doc = parse("stress.dsl", format!("path {}", args).as_bytes()).unwrap();
    assert!(doc.is_empty());
}

#[test]
fn test_unlimited_accepts_large_input() {
    let doc = many_paths(1_000);
    let opts = ParseOptions::builder().limits(Limits::unlimited()).build();
    let parsed = parse_with_options("stress.dsl", doc.as_bytes(), &opts).unwrap();
    assert_eq!(parsed.operation_count(), 1_000);
}

// =============================================================================
// Concurrent Parsing Tests
// =============================================================================

#[test]
fn test_concurrent_parsing() {
    let doc = Arc::new(many_paths(500));
    let mut handles = vec![];

    for _ in 0..8 {
        let doc_clone = Arc::clone(&doc);
        let handle = thread::spawn(move || parse("stress.dsl", doc_clone.as_bytes()).unwrap());
        handles.push(handle);
    }

    let first = parse("stress.dsl", doc.as_bytes()).unwrap();
    for handle in handles {
        let parsed = handle.join().unwrap();
        assert_eq!(parsed, first);
    }
}

#[test]
fn test_concurrent_errors_are_independent() {
    let mut handles = vec![];

    for i in 0..8 {
        handles.push(thread::spawn(move || {
            let doc = format!("{}bogus {{\n}}\n", "\n".repeat(i));
            parse("stress.dsl", doc.as_bytes()).unwrap_err().line()
        }));
    }

    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), Some(i + 1));
    }
}
