// SPDX-License-Identifier: MIT OR Apache-2.0
//! Fuzz the value stringifier with arbitrary JSON documents.
//!
//! Verifies:
//! 1. Stringifying any parsed JSON value never panics.
//! 2. Strings come back unchanged.
//! 3. Non-string output is single-line and deterministic.
#![no_main]
use libfuzzer_sys::fuzz_target;
use semrel_render::stringify;
use serde_json::Value;

fuzz_target!(|data: &[u8]| {
    let Ok(value) = serde_json::from_slice::<Value>(data) else {
        return;
    };

    let out = stringify(&value);
    match &value {
        Value::String(s) => assert_eq!(&out, s, "strings must pass through"),
        _ => {
            assert!(!out.contains('\n'), "output must be single-line");
            assert_eq!(out, stringify(&value), "output must be deterministic");
        }
    }
});
