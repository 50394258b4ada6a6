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

//! Document structure for parsed APIDSL.

use crate::error::{DslError, DslResult};
use crate::kinds::{Keyword, Method};
use serde_json::Value;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

/// One `keyword args... {object}` unit of the input.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub keyword: Keyword,
    pub args: Vec<String>,
    pub object: Value,
}

impl Record {
    pub fn new(keyword: Keyword, args: Vec<String>, object: Value) -> Self {
        Self {
            keyword,
            args,
            object,
        }
    }
}

/// Operations of a single path, keyed by method.
pub type Operations = BTreeMap<Method, Value>;

/// A parsed API description.
///
/// Every stored value is the object of exactly one record.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    /// The `info` block.
    pub info: Option<Value>,
    /// Path template -> method -> operation.
    pub paths: BTreeMap<String, Operations>,
    /// Schema name -> schema.
    pub schemas: BTreeMap<String, Value>,
    /// Scheme name -> security scheme.
    pub security_schemes: BTreeMap<String, Value>,
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn info(&self) -> Option<&Value> {
        self.info.as_ref()
    }

    pub fn schema(&self, name: &str) -> Option<&Value> {
        self.schemas.get(name)
    }

    pub fn security_scheme(&self, name: &str) -> Option<&Value> {
        self.security_schemes.get(name)
    }

    /// Get the operation for a path and method.
    pub fn operation(&self, path: &str, method: Method) -> Option<&Value> {
        self.paths.get(path).and_then(|ops| ops.get(&method))
    }

    /// Number of operations across all paths.
    pub fn operation_count(&self) -> usize {
        self.paths.values().map(BTreeMap::len).sum()
    }

    /// Number of records the document was built from.
    pub fn record_count(&self) -> usize {
        usize::from(self.info.is_some())
            + self.operation_count()
            + self.schemas.len()
            + self.security_schemes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.record_count() == 0
    }

    /// Validate a record and store its object.
    ///
    /// Fails without modifying the document if the argument count is wrong
    /// for the keyword, the method is not allowed, or the slot is taken.
    pub fn insert(&mut self, record: Record) -> DslResult<()> {
        let Record {
            keyword,
            args,
            object,
        } = record;

        match (keyword, args.as_slice()) {
            (Keyword::Info, []) => {
                if self.info.is_some() {
                    return Err(DslError::redefinition("info redefined"));
                }
                self.info = Some(object);
            }
            (Keyword::Schema, [name]) => {
                insert_unique(&mut self.schemas, name, object, || {
                    format!("schema {} redefined", name)
                })?;
            }
            (Keyword::Security, [name]) => {
                insert_unique(&mut self.security_schemes, name, object, || {
                    format!("security scheme {} redefined", name)
                })?;
            }
            (Keyword::Path, [path, method]) => {
                let parsed: Method = method.parse().map_err(|_| {
                    DslError::unknown_method(format!(
                        "unknown method {:?} for path {:?}",
                        method, path
                    ))
                })?;
                if self.operation(path, parsed).is_some() {
                    return Err(DslError::redefinition(format!(
                        "redefinition of {} method for path {:?}",
                        parsed, path
                    )));
                }
                self.paths
                    .entry(path.clone())
                    .or_default()
                    .insert(parsed, object);
            }
            _ => return Err(arity_error(keyword, args.len())),
        }
        Ok(())
    }
}

pub(crate) fn arity_error(keyword: Keyword, got: usize) -> DslError {
    DslError::arity(format!(
        "unexpected arg count for {}; got {} want {}",
        keyword,
        got,
        keyword.arity()
    ))
}

fn insert_unique(
    map: &mut BTreeMap<String, Value>,
    name: &str,
    object: Value,
    redefined: impl FnOnce() -> String,
) -> DslResult<()> {
    match map.entry(name.to_string()) {
        Entry::Occupied(_) => Err(DslError::redefinition(redefined())),
        Entry::Vacant(slot) => {
            slot.insert(object);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DslErrorKind;
    use serde_json::json;

    fn record(keyword: Keyword, args: &[&str], object: Value) -> Record {
        Record::new(keyword, args.iter().map(|s| s.to_string()).collect(), object)
    }

    // ==================== Insertion tests ====================

    #[test]
    fn test_insert_each_keyword() {
        let mut doc = Document::new();
        doc.insert(record(Keyword::Info, &[], json!({"title": "x"}))).unwrap();
        doc.insert(record(Keyword::Schema, &["Widget"], json!({"type": "object"})))
            .unwrap();
        doc.insert(record(Keyword::Security, &["key"], json!({"type": "apiKey"})))
            .unwrap();
        doc.insert(record(Keyword::Path, &["/w", "get"], json!({"summary": "list"})))
            .unwrap();

        assert_eq!(doc.info(), Some(&json!({"title": "x"})));
        assert_eq!(doc.schema("Widget"), Some(&json!({"type": "object"})));
        assert_eq!(doc.security_scheme("key"), Some(&json!({"type": "apiKey"})));
        assert_eq!(doc.operation("/w", Method::Get), Some(&json!({"summary": "list"})));
        assert_eq!(doc.record_count(), 4);
    }

    #[test]
    fn test_empty_document() {
        let doc = Document::new();
        assert!(doc.is_empty());
        assert_eq!(doc.record_count(), 0);
        assert!(doc.info().is_none());
    }

    #[test]
    fn test_same_path_different_methods() {
        let mut doc = Document::new();
        for method in ["get", "post", "delete", "head"] {
            doc.insert(record(Keyword::Path, &["/w", method], json!({}))).unwrap();
        }
        assert_eq!(doc.paths.len(), 1);
        assert_eq!(doc.operation_count(), 4);
    }

    // ==================== Redefinition tests ====================

    #[test]
    fn test_info_redefined() {
        let mut doc = Document::new();
        doc.insert(record(Keyword::Info, &[], json!({"title": "a"}))).unwrap();
        let err = doc.insert(record(Keyword::Info, &[], json!({"title": "b"}))).unwrap_err();
        assert_eq!(err.kind, DslErrorKind::Redefinition);
        assert_eq!(err.message, "info redefined");
        assert_eq!(doc.info(), Some(&json!({"title": "a"})));
    }

    #[test]
    fn test_schema_redefined_keeps_first() {
        let mut doc = Document::new();
        doc.insert(record(Keyword::Schema, &["A"], json!({"n": 1}))).unwrap();
        let err = doc.insert(record(Keyword::Schema, &["A"], json!({"n": 2}))).unwrap_err();
        assert_eq!(err.message, "schema A redefined");
        assert_eq!(doc.schema("A"), Some(&json!({"n": 1})));
    }

    #[test]
    fn test_security_scheme_redefined() {
        let mut doc = Document::new();
        doc.insert(record(Keyword::Security, &["k"], json!({}))).unwrap();
        let err = doc.insert(record(Keyword::Security, &["k"], json!({}))).unwrap_err();
        assert_eq!(err.message, "security scheme k redefined");
    }

    #[test]
    fn test_schema_and_security_share_no_namespace() {
        let mut doc = Document::new();
        doc.insert(record(Keyword::Schema, &["Auth"], json!({}))).unwrap();
        doc.insert(record(Keyword::Security, &["Auth"], json!({}))).unwrap();
        assert_eq!(doc.record_count(), 2);
    }

    #[test]
    fn test_path_method_redefined() {
        let mut doc = Document::new();
        doc.insert(record(Keyword::Path, &["/x", "get"], json!({}))).unwrap();
        let err = doc.insert(record(Keyword::Path, &["/x", "get"], json!({}))).unwrap_err();
        assert_eq!(err.kind, DslErrorKind::Redefinition);
        assert_eq!(err.message, "redefinition of get method for path \"/x\"");
    }

    // ==================== Method tests ====================

    #[test]
    fn test_unknown_method() {
        let mut doc = Document::new();
        let err = doc.insert(record(Keyword::Path, &["/x", "patch"], json!({}))).unwrap_err();
        assert_eq!(err.kind, DslErrorKind::UnknownMethod);
        assert_eq!(err.message, "unknown method \"patch\" for path \"/x\"");
        assert!(doc.paths.is_empty());
    }

    // ==================== Arity tests ====================

    #[test]
    fn test_arity_errors() {
        let cases: &[(Keyword, &[&str])] = &[
            (Keyword::Info, &["x"]),
            (Keyword::Schema, &[]),
            (Keyword::Schema, &["A", "B"]),
            (Keyword::Security, &[]),
            (Keyword::Path, &["/x"]),
            (Keyword::Path, &["/x", "get", "extra"]),
        ];
        for (keyword, args) in cases {
            let mut doc = Document::new();
            let err = doc.insert(record(*keyword, args, json!({}))).unwrap_err();
            assert_eq!(err.kind, DslErrorKind::Arity, "{} {:?}", keyword, args);
            assert!(doc.is_empty());
        }
    }

    #[test]
    fn test_arity_message() {
        let mut doc = Document::new();
        let err = doc.insert(record(Keyword::Path, &["/x"], json!({}))).unwrap_err();
        assert_eq!(err.message, "unexpected arg count for path; got 1 want 2");
    }

    #[test]
    fn test_arity_checked_before_method() {
        let mut doc = Document::new();
        let err = doc
            .insert(record(Keyword::Path, &["/x", "patch", "y"], json!({})))
            .unwrap_err();
        assert_eq!(err.kind, DslErrorKind::Arity);
    }
}
