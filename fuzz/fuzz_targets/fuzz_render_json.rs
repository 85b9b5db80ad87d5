// SPDX-License-Identifier: MIT OR Apache-2.0
//! Fuzz catalog rendering with arbitrary JSON contexts for every code.
//!
//! Rendering either rejects the context or produces a non-empty message.
#![no_main]
use libfuzzer_sys::fuzz_target;
use semrel_catalog::{ErrorCatalog, ErrorCode, PackageMeta};
use serde_json::Value;

fuzz_target!(|data: &[u8]| {
    let Ok(context) = serde_json::from_slice::<Value>(data) else {
        return;
    };
    let Ok(meta) = PackageMeta::new("semantic-release", "0.0.0", "https://example.org/sr") else {
        return;
    };
    let catalog = ErrorCatalog::new(&meta);

    for code in ErrorCode::ALL {
        if let Ok(d) = catalog.render_json(code.as_str(), &context) {
            assert!(!d.message.is_empty());
        }
    }
});
