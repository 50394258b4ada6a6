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

//! Fuzz target for the APIDSL parser.
//!
//! Arbitrary bytes go through the whole pipeline: UTF-8 validation, token
//! reading, object decoding and record validation. The parser must return
//! an error for bad input and never panic.
//!
//! # Running the Fuzzer
//!
//! ```bash
//! cargo install cargo-fuzz
//!
//! # from the apidsl-core directory
//! cargo fuzz run fuzz_parse
//! cargo fuzz run fuzz_parse -- -max_len=100000 -max_total_time=300
//! ```

use apidsl_core::parse;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Err(err) = parse("fuzz.dsl", data) {
        // every error that comes out of a parse carries a location
        assert!(err.location.is_some(), "unpositioned error: {}", err);
    }
});
