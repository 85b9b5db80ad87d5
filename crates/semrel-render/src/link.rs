// SPDX-License-Identifier: MIT OR Apache-2.0

//! Package metadata and documentation links.

use url::Url;

/// Branch whose file browser hosts the documentation.
pub const DOCS_BRANCH: &str = "caribou";

/// Errors from building [`PackageMeta`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MetaError {
    /// The package name is empty.
    #[error("package name must not be empty")]
    EmptyName,

    /// The homepage is not an absolute URL.
    #[error("invalid homepage URL '{homepage}': {reason}")]
    InvalidHomepage {
        /// The rejected value.
        homepage: String,
        /// Parser message.
        reason: String,
    },
}

/// Read-only facts about the released tool, used in links and footers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageMeta {
    name: String,
    version: String,
    homepage: Url,
    docs_base: String,
}

impl PackageMeta {
    /// Validate and build metadata.
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        homepage: &str,
    ) -> Result<Self, MetaError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(MetaError::EmptyName);
        }

        let homepage = Url::parse(homepage).map_err(|e| MetaError::InvalidHomepage {
            homepage: homepage.to_string(),
            reason: e.to_string(),
        })?;

        let mut base = homepage.clone();
        base.set_fragment(None);
        let docs_base = base.as_str().trim_end_matches('/').to_string();

        Ok(Self {
            name,
            version: version.into(),
            homepage,
            docs_base,
        })
    }

    /// Package name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Package version as published.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Homepage exactly as configured, fragment included.
    pub fn homepage(&self) -> &Url {
        &self.homepage
    }

    /// Homepage without its fragment or trailing slash.
    pub fn docs_base(&self) -> &str {
        &self.docs_base
    }

    /// Absolute URL of `relative_path` in the documentation branch.
    ///
    /// `relative_path` is appended verbatim, so it may carry its own
    /// `#anchor`.
    ///
    /// ```
    /// use semrel_render::PackageMeta;
    ///
    /// let meta = PackageMeta::new(
    ///     "semantic-release",
    ///     "15.0.0",
    ///     "https://github.com/semantic-release/semantic-release#readme",
    /// )
    /// .unwrap();
    /// assert_eq!(
    ///     meta.linkify("docs/usage/plugins.md#plugins"),
    ///     "https://github.com/semantic-release/semantic-release/blob/caribou/docs/usage/plugins.md#plugins",
    /// );
    /// ```
    pub fn linkify(&self, relative_path: &str) -> String {
        format!("{}/blob/{DOCS_BRANCH}/{relative_path}", self.docs_base)
    }
}

/// Free-function form of [`PackageMeta::linkify`].
pub fn linkify(meta: &PackageMeta, relative_path: &str) -> String {
    meta.linkify(relative_path)
}
