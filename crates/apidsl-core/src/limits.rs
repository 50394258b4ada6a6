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

//! Resource limits for APIDSL parsing.

/// Configurable limits for parser resources.
///
/// These bound the memory a single parse can consume on hostile input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Limits {
    /// Maximum input size in bytes (default: 64MB).
    pub max_input_size: usize,
    /// Maximum size of a single embedded object in bytes (default: 16MB).
    pub max_object_size: usize,
    /// Maximum number of positional arguments per record (default: 16).
    pub max_args: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_input_size: 64 * 1024 * 1024,  // 64MB
            max_object_size: 16 * 1024 * 1024, // 16MB
            max_args: 16,
        }
    }
}

impl Limits {
    /// Create limits with no restrictions (for testing).
    pub fn unlimited() -> Self {
        Self {
            max_input_size: usize::MAX,
            max_object_size: usize::MAX,
            max_args: usize::MAX,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limits() {
        let limits = Limits::default();
        assert_eq!(limits.max_input_size, 64 * 1024 * 1024);
        assert_eq!(limits.max_object_size, 16 * 1024 * 1024);
        assert_eq!(limits.max_args, 16);
    }

    #[test]
    fn test_default_args_cover_every_keyword() {
        // path takes the most arguments
        assert!(Limits::default().max_args >= 2);
    }

    #[test]
    fn test_unlimited() {
        let limits = Limits::unlimited();
        assert_eq!(limits.max_input_size, usize::MAX);
        assert_eq!(limits.max_object_size, usize::MAX);
        assert_eq!(limits.max_args, usize::MAX);
    }
}
