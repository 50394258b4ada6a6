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

//! Record keywords and HTTP methods.

use crate::error::DslError;
use std::fmt;
use std::str::FromStr;

/// The keyword that opens a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Keyword {
    /// `info {…}`
    Info,
    /// `schema <name> {…}`
    Schema,
    /// `security <name> {…}`
    Security,
    /// `path <template> <method> {…}`
    Path,
}

impl Keyword {
    /// All keywords, in declaration order.
    pub const ALL: [Keyword; 4] = [Self::Info, Self::Schema, Self::Security, Self::Path];

    /// Look up a keyword by its exact spelling.
    pub fn from_ident(ident: &str) -> Option<Self> {
        match ident {
            "info" => Some(Self::Info),
            "schema" => Some(Self::Schema),
            "security" => Some(Self::Security),
            "path" => Some(Self::Path),
            _ => None,
        }
    }

    /// Number of positional arguments the keyword takes.
    pub const fn arity(self) -> usize {
        match self {
            Self::Info => 0,
            Self::Schema | Self::Security => 1,
            Self::Path => 2,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Schema => "schema",
            Self::Security => "security",
            Self::Path => "path",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// HTTP methods accepted by `path` records.
///
/// Matching is exact and case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Method {
    Get,
    Post,
    Delete,
    Head,
}

impl Method {
    /// All methods, in declaration order.
    pub const ALL: [Method; 4] = [Self::Get, Self::Post, Self::Delete, Self::Head];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Post => "post",
            Self::Delete => "delete",
            Self::Head => "head",
        }
    }
}

impl FromStr for Method {
    type Err = DslError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "get" => Ok(Self::Get),
            "post" => Ok(Self::Post),
            "delete" => Ok(Self::Delete),
            "head" => Ok(Self::Head),
            _ => Err(DslError::unknown_method(format!("unknown method {:?}", s))),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
