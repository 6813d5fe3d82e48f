// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the terms-file parser.
//!
//! Garbage in, `Err` out. Never a panic, and a successful parse yields
//! exactly the number of entries the header promised
//! (none for an empty document).

#![no_main]

use libfuzzer_sys::fuzz_target;
use termrank::load::terms::parse_terms;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(entries) = parse_terms(text) {
        let header = text
            .lines()
            .find(|line| !line.is_empty())
            .and_then(|line| line.trim().parse::<usize>().ok())
            .unwrap_or(0);
        assert_eq!(entries.len(), header);
    }
});
