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

//! Inspect command - APIDSL document visualization

use super::parse_file;
use crate::error::CliError;
use apidsl_core::{Document, Value};
use colored::Colorize;
use std::collections::BTreeMap;

/// Print the parsed structure of an APIDSL file as a tree.
///
/// In verbose mode each entry is followed by its object in compact JSON.
pub fn inspect(file: &str, verbose: bool) -> Result<(), CliError> {
    let doc = parse_file(file)?;
    print!("{}", render(&doc, verbose));
    Ok(())
}

fn render(doc: &Document, verbose: bool) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", "APIDSL Document".bold().underline()));

    if let Some(info) = doc.info() {
        out.push_str(&format!("\n{}\n", "Info:".cyan()));
        for (key, value) in info.as_object().into_iter().flatten() {
            out.push_str(&format!("  {}: {}\n", key.yellow(), summarize(value)));
        }
    }

    if !doc.paths.is_empty() {
        out.push_str(&format!("\n{}\n", "Paths:".cyan()));
        for (path, ops) in &doc.paths {
            out.push_str(&format!("  {}\n", path.green()));
            for (method, op) in ops {
                out.push_str(&format!("    {}", method.as_str().to_uppercase().yellow()));
                if let Some(summary) = op.get("summary").and_then(Value::as_str) {
                    out.push_str(&format!(" - {}", summary));
                }
                out.push('\n');
                if verbose {
                    out.push_str(&format!("      {}\n", op.to_string().dimmed()));
                }
            }
        }
    }

    render_named(&mut out, "Schemas:", &doc.schemas, verbose);
    render_named(&mut out, "Security schemes:", &doc.security_schemes, verbose);
    out
}

fn render_named(out: &mut String, title: &str, entries: &BTreeMap<String, Value>, verbose: bool) {
    if entries.is_empty() {
        return;
    }
    out.push_str(&format!("\n{}\n", title.cyan()));
    for (name, value) in entries {
        match value.get("type").and_then(Value::as_str) {
            Some(ty) => out.push_str(&format!("  {} ({})\n", name.green(), ty)),
            None => out.push_str(&format!("  {}\n", name.green())),
        }
        if verbose {
            out.push_str(&format!("    {}\n", value.to_string().dimmed()));
        }
    }
}

fn summarize(value: &Value) -> String {
    match value {
        Value::String(s) => format!("\"{}\"", s),
        Value::Array(items) => format!("[{} items]", items.len()),
        Value::Object(map) => format!("{{{} keys}}", map.len()),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use apidsl_core::parse;

    fn plain(input: &str, verbose: bool) -> String {
        colored::control::set_override(false);
        let doc = parse("api.dsl", input.as_bytes()).unwrap();
        render(&doc, verbose)
    }

    #[test]
    fn test_render_sections() {
        let out = plain(
            "info {\n\"title\": \"Pets\", \"tags\": [1, 2]\n}\n             schema Pet {\n\"type\": \"object\"\n}\n             security key {\n\"type\": \"apiKey\"\n}\n             path /pets get {\n\"summary\": \"List pets\"\n}\n",
            false,
        );
        assert!(out.contains("title: \"Pets\""));
        assert!(out.contains("tags: [2 items]"));
        assert!(out.contains("  /pets\n    GET - List pets\n"));
        assert!(out.contains("  Pet (object)"));
        assert!(out.contains("Security schemes:\n  key (apiKey)"));
    }

    #[test]
    fn test_render_empty_document() {
        let out = plain("", false);
        assert_eq!(out, "APIDSL Document\n");
    }

    #[test]
    fn test_render_verbose_includes_objects() {
        let out = plain("schema A {\n\"x-n\": 1\n}\n", true);
        assert!(out.contains("  A\n    {\"x-n\":1}\n"));
    }
}
