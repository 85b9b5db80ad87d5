// SPDX-License-Identifier: MIT OR Apache-2.0
//! Library half of the `semrel-errors` binary.
#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod commands;
