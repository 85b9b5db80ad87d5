// SPDX-License-Identifier: MIT OR Apache-2.0
//! Fuzz ErrorCode parsing, display, and ReleaseErrorDto decoding.
//!
//! Verifies:
//! 1. Parsing arbitrary strings as ErrorCode never panics.
//! 2. A parsed code displays as the exact input token.
//! 3. ReleaseErrorDto decoding never panics and round-trips.
#![no_main]
use libfuzzer_sys::fuzz_target;
use semrel_error::{ErrorCode, ReleaseError, ReleaseErrorDto};

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(code) = s.parse::<ErrorCode>() {
        assert_eq!(code.as_str(), s, "parse must only accept exact tokens");
        let _ = format!("{}", code.category());
    }

    if let Ok(dto) = serde_json::from_str::<ReleaseErrorDto>(s) {
        let err = ReleaseError::from(dto.clone());
        assert_eq!(ReleaseErrorDto::from(&err), dto);
        let _ = err.to_string();
    }
});
