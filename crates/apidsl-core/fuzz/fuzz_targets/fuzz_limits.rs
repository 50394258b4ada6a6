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

#![no_main]

//! Fuzz target for limit enforcement.
//!
//! Parses with very small limits so that the size and argument checks are
//! hit often, and checks that a successful parse stays within them.

use apidsl_core::{parse_with_options, ParseOptions};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let options = ParseOptions::builder()
        .max_input_size(4096)
        .max_object_size(256)
        .max_args(2)
        .build();

    if let Ok(doc) = parse_with_options("fuzz.dsl", data, &options) {
        assert!(data.len() <= 4096);
        assert!(doc.record_count() <= data.len());
    }
});
