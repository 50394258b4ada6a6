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

//! CLI integration tests

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::NamedTempFile;

const VALID: &str = "\
info {
\"title\": \"Widgets\",
\"version\": \"1.0\"
}
schema Widget {
\"type\": \"object\"
}
security apiKey {
\"type\": \"apiKey\", \"name\": \"X-Key\", \"in\": \"header\"
}
path /widgets get {
\"summary\": \"List widgets\"
}
path /widgets post {
\"summary\": \"Create a widget\"
}
";

// Test helper to create an apidsl command
fn apidsl_cmd() -> Command {
    Command::cargo_bin("apidsl").expect("Failed to find apidsl binary")
}

// Test helper to create a temporary file with content
fn create_temp_file(content: &str) -> NamedTempFile {
    let file = tempfile::Builder::new()
        .suffix(".dsl")
        .tempfile()
        .expect("Failed to create temp file");
    fs::write(file.path(), content).expect("Failed to write temp file");
    file
}

// ===== Help and Version Tests =====

#[test]
fn test_help_output() {
    apidsl_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("APIDSL - API description DSL toolkit"))
        .stdout(predicate::str::contains("batch-validate"));
}

#[test]
fn test_version_output() {
    apidsl_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("apidsl"));
}

#[test]
fn test_no_subcommand_fails() {
    apidsl_cmd().assert().failure();
}

// ===== Validate Command Tests =====

#[test]
fn test_validate_valid_file() {
    let file = create_temp_file(VALID);

    apidsl_cmd()
        .arg("validate")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("✓"))
        .stdout(predicate::str::contains("Paths: 1"))
        .stdout(predicate::str::contains("Operations: 2"))
        .stdout(predicate::str::contains("Schemas: 1"))
        .stdout(predicate::str::contains("Security schemes: 1"));
}

#[test]
fn test_validate_relaxed_objects() {
    let file = create_temp_file(
        "info {\n// service metadata\ntitle: 'Widgets',\n}\npath /widgets get {\nsummary: \"List\",\n}\n",
    );

    apidsl_cmd()
        .arg("validate")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Operations: 1"));
}

#[test]
fn test_validate_reports_position() {
    let file = create_temp_file("info {\n}\nfoo {\n}\n");
    let expected = format!("{}:3:1: unknown keyword \"foo\"", file.path().display());

    apidsl_cmd()
        .arg("validate")
        .arg(file.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("✗"))
        .stderr(predicate::str::contains(expected));
}

#[test]
fn test_validate_redefinition() {
    let file = create_temp_file("schema A {\n}\nschema A {\n}\n");

    apidsl_cmd()
        .arg("validate")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("schema A redefined"));
}

#[test]
fn test_validate_missing_file() {
    apidsl_cmd()
        .arg("validate")
        .arg("/nonexistent/api.dsl")
        .assert()
        .failure()
        .stderr(predicate::str::contains("I/O error"));
}

#[test]
fn test_file_size_limit() {
    let file = create_temp_file(VALID);

    apidsl_cmd()
        .env("APIDSL_MAX_FILE_SIZE", "10")
        .arg("validate")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("too large"));
}

#[test]
fn test_verbose_logs_to_stderr() {
    let file = create_temp_file(VALID);

    apidsl_cmd()
        .arg("--verbose")
        .arg("validate")
        .arg(file.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("parsed"));
}

// ===== Inspect Command Tests =====

#[test]
fn test_inspect() {
    let file = create_temp_file(VALID);

    apidsl_cmd()
        .arg("inspect")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("/widgets"))
        .stdout(predicate::str::contains("POST"))
        .stdout(predicate::str::contains("Widget"));
}

// ===== Conversion Tests =====

#[test]
fn test_to_json_stdout() {
    let file = create_temp_file(VALID);

    let output = apidsl_cmd()
        .arg("to-json")
        .arg(file.path())
        .arg("--openapi")
        .arg("3.0.3")
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["openapi"], "3.0.3");
    assert_eq!(value["info"]["title"], "Widgets");
    assert_eq!(value["paths"]["/widgets"]["post"]["summary"], "Create a widget");
    assert_eq!(value["components"]["schemas"]["Widget"]["type"], "object");
}

#[test]
fn test_to_json_output_file() {
    let file = create_temp_file(VALID);
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("openapi.json");

    apidsl_cmd()
        .arg("to-json")
        .arg(file.path())
        .arg("--pretty")
        .arg("-o")
        .arg(&out)
        .assert()
        .success();

    let text = fs::read_to_string(&out).unwrap();
    assert!(text.starts_with("{\n  \"info\""));
}

#[test]
fn test_to_json_invalid_input() {
    let file = create_temp_file("path /x patch {\n}\n");

    apidsl_cmd()
        .arg("to-json")
        .arg(file.path())
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("unknown method \"patch\""));
}

#[test]
fn test_to_yaml() {
    let file = create_temp_file(VALID);

    apidsl_cmd()
        .arg("to-yaml")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("info:"))
        .stdout(predicate::str::contains("securitySchemes:"))
        .stdout(predicate::str::contains("/widgets:"));
}
