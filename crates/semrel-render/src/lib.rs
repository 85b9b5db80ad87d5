// SPDX-License-Identifier: MIT OR Apache-2.0
#![doc = "Rendering primitives shared by every semantic-release error descriptor."]
#![deny(unsafe_code)]
#![warn(missing_docs)]

//! Two helpers live here:
//!
//! - [`stringify`] embeds an arbitrary JSON value in generated text. Strings
//!   pass through untouched; everything else gets a bounded, single-line
//!   debug rendering.
//! - [`PackageMeta::linkify`] turns a repository-relative documentation path
//!   into an absolute URL under the package homepage.

mod link;
mod stringify;

pub use link::{DOCS_BRANCH, MetaError, PackageMeta, linkify};
pub use stringify::{
    MAX_ARRAY_LENGTH, MAX_DEPTH, Stringifier, UNDEFINED, stringify, stringify_opt,
    stringify_serialize,
};
