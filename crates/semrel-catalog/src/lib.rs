// SPDX-License-Identifier: MIT OR Apache-2.0
//! Catalog of semantic-release error descriptors.
//!
//! An [`ErrorCatalog`] turns an [`ErrorKind`] (a stable code paired with its
//! typed context) into an [`ErrorDescriptor`]: a one-line message and a
//! Markdown explanation linking to the relevant documentation. Rendering is
//! pure and never fails; the catalog can be shared freely between threads.
//!
//! ```
//! use semrel_catalog::{ErrorCatalog, ErrorKind, TagFormatContext};
//! use semrel_render::PackageMeta;
//! use serde_json::json;
//!
//! let meta = PackageMeta::new(
//!     "semantic-release",
//!     "15.0.0",
//!     "https://github.com/semantic-release/semantic-release",
//! )
//! .unwrap();
//! let catalog = ErrorCatalog::new(&meta);
//!
//! let descriptor = catalog.render(&ErrorKind::TagNoVersion(TagFormatContext {
//!     tag_format: Some(json!("v")),
//! }));
//! assert_eq!(descriptor.message, "Invalid `tagFormat` option.");
//! assert!(descriptor.details.ends_with("option is `v`."));
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod context;
mod entries;
mod release_type;

pub use context::{
    ErrorKind, GitNoPermissionContext, NoGitRepoContext, PluginConfContext, PluginContext,
    PluginOutputContext, ReleaseOptions, TagFormatContext,
};
pub use release_type::{ReleaseType, UnknownReleaseType};

pub use semrel_error::{ErrorCategory, ErrorCode, ErrorDescriptor, ReleaseError, UnknownErrorCode};
pub use semrel_render::PackageMeta;

use serde_json::Value;
use tracing::debug;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors from the dynamic (JSON) entry points.
///
/// The typed [`ErrorCatalog::render`] path has no failure mode.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The requested identifier is not in the catalog.
    #[error(transparent)]
    UnknownCode(#[from] UnknownErrorCode),

    /// The context object does not fit the record for its code.
    #[error("invalid context for {code}: {reason}")]
    InvalidContext {
        /// Code whose record was being built.
        code: ErrorCode,
        /// Deserializer message.
        reason: String,
    },
}

// ---------------------------------------------------------------------------
// ErrorCatalog
// ---------------------------------------------------------------------------

/// Renders descriptors for every [`ErrorCode`].
#[derive(Debug, Clone)]
pub struct ErrorCatalog {
    meta: PackageMeta,
}

impl ErrorCatalog {
    /// Build a catalog that links into `meta`'s homepage and reports its
    /// version.
    pub fn new(meta: &PackageMeta) -> Self {
        Self { meta: meta.clone() }
    }

    /// Metadata the catalog renders with.
    pub fn meta(&self) -> &PackageMeta {
        &self.meta
    }

    /// Every code this catalog can render.
    pub fn codes(&self) -> &'static [ErrorCode] {
        &ErrorCode::ALL
    }

    /// Render the descriptor for one failure.
    pub fn render(&self, kind: &ErrorKind) -> ErrorDescriptor {
        debug!(target: "semrel.catalog", code = %kind.code(), "rendering error descriptor");

        let meta = &self.meta;
        match kind {
            ErrorKind::NoGitRepo(ctx) => entries::no_git_repo(meta, ctx),
            ErrorKind::NoRepoUrl => entries::no_repo_url(meta),
            ErrorKind::GitNoPermission(ctx) => entries::git_no_permission(meta, ctx),
            ErrorKind::InvalidTagFormat(ctx) => entries::invalid_tag_format(meta, ctx),
            ErrorKind::TagNoVersion(ctx) => entries::tag_no_version(meta, ctx),
            ErrorKind::PluginConf(ctx) => entries::plugin_conf(meta, ctx),
            ErrorKind::Plugin(ctx) => entries::plugin(meta, ctx),
            ErrorKind::AnalyzeCommitsOutput(ctx) => entries::analyze_commits_output(meta, ctx),
            ErrorKind::GenerateNotesOutput(ctx) => entries::generate_notes_output(meta, ctx),
            ErrorKind::PublishOutput(ctx) => entries::publish_output(meta, ctx),
        }
    }

    /// Render and wrap the descriptor as a [`ReleaseError`].
    pub fn error(&self, kind: &ErrorKind) -> ReleaseError {
        ReleaseError::new(kind.code(), self.render(kind))
    }

    /// Render from an identifier token and a JSON context object.
    pub fn render_json(&self, code: &str, context: &Value) -> Result<ErrorDescriptor, CatalogError> {
        let code: ErrorCode = code.parse()?;
        let kind = ErrorKind::from_json(code, context)?;
        Ok(self.render(&kind))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
