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

//! Property-based tests for apidsl-core parsing.
//!
//! Generated documents are built from known records so that the parsed
//! document can be checked against what went in.

use apidsl_core::{parse, DslErrorKind, Method};
use proptest::prelude::*;
use std::collections::BTreeSet;

fn method_strategy() -> impl Strategy<Value = Method> {
    prop::sample::select(Method::ALL.to_vec())
}

fn schema_block(name: &str, n: i64) -> String {
    format!("schema {} {{\n\"type\": \"object\", \"x-n\": {}\n}}\n", name, n)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Property: every distinct schema record yields exactly one entry.
    #[test]
    fn prop_schema_count_matches_records(
        names in prop::collection::btree_set("[A-Z][a-zA-Z0-9]{0,12}", 0..20),
        n in -1000_i64..1000
    ) {
        let doc: String = names.iter().map(|name| schema_block(name, n)).collect();
        let parsed = parse("prop.dsl", doc.as_bytes()).unwrap();

        prop_assert_eq!(parsed.schemas.len(), names.len());
        for name in &names {
            prop_assert_eq!(&parsed.schema(name).unwrap()["x-n"], n);
        }
    }

    /// Property: each distinct (path, method) pair is stored once.
    #[test]
    fn prop_operations_are_keyed_by_path_and_method(
        ops in prop::collection::btree_set(("/[a-z]{1,8}", method_strategy()), 0..24)
    ) {
        let mut doc = String::new();
        for (path, method) in &ops {
            doc.push_str(&format!("path {} {} {{\n\"summary\": \"{}\"\n}}\n", path, method, path));
        }
        let parsed = parse("prop.dsl", doc.as_bytes()).unwrap();

        prop_assert_eq!(parsed.operation_count(), ops.len());
        let paths: BTreeSet<&String> = ops.iter().map(|(p, _)| p).collect();
        prop_assert_eq!(parsed.paths.len(), paths.len());
        for (path, method) in &ops {
            prop_assert_eq!(&parsed.operation(path, *method).unwrap()["summary"], path.as_str());
        }
    }

    /// Property: parsing the same bytes twice gives equal documents.
    #[test]
    fn prop_parse_is_deterministic(
        names in prop::collection::vec("[a-z]{1,10}", 0..10),
        title in "[a-zA-Z0-9 ]{0,30}"
    ) {
        let mut doc = format!("info {{\n\"title\": \"{}\"\n}}\n", title);
        for name in &names {
            doc.push_str(&format!("security {} {{\n\"type\": \"apiKey\"\n}}\n", name));
        }
        let first = parse("prop.dsl", doc.as_bytes());
        let second = parse("prop.dsl", doc.as_bytes());
        prop_assert_eq!(first, second);
    }

    /// Property: an unknown keyword is reported at its own line and column 1.
    #[test]
    fn prop_unknown_keyword_line(
        before in 0_usize..15,
        blank in 0_usize..4,
        keyword in "[a-z]{1,10}"
    ) {
        prop_assume!(!["info", "schema", "security", "path"].contains(&keyword.as_str()));

        let mut doc: String = (0..before).map(|i| schema_block(&format!("S{}", i), 0)).collect();
        doc.push_str(&"\n".repeat(blank));
        doc.push_str(&format!("{} {{\n}}\n", keyword));

        let err = parse("prop.dsl", doc.as_bytes()).unwrap_err();
        prop_assert_eq!(err.kind, DslErrorKind::Grammar);
        let loc = err.location.unwrap();
        prop_assert_eq!(loc.line(), before * 3 + blank + 1);
        prop_assert_eq!(loc.column(), Some(1));
    }

    /// Property: a second definition of a schema always fails.
    #[test]
    fn prop_redefinition_always_fails(
        name in "[A-Z][a-z]{0,10}",
        gap in 0_usize..5
    ) {
        let doc = format!("{}{}{}", schema_block(&name, 1), "\n".repeat(gap), schema_block(&name, 2));
        let err = parse("prop.dsl", doc.as_bytes()).unwrap_err();
        prop_assert_eq!(err.kind, DslErrorKind::Redefinition);
        prop_assert_eq!(err.line(), Some(3 + gap + 1));
    }

    /// Property: arbitrary input never panics.
    #[test]
    fn prop_arbitrary_input_never_panics(input in prop::collection::vec(any::<u8>(), 0..256)) {
        let _ = parse("prop.dsl", &input);
    }
}
