// SPDX-License-Identifier: MIT OR Apache-2.0
//! Package metadata loading for semantic-release diagnostics.
//!
//! The error catalog needs the tool's name, version and homepage. This crate
//! reads them once from a package manifest (`package.json` or a TOML file),
//! layers environment overrides on top, and validates the result into a
//! [`PackageMeta`].
#![deny(unsafe_code)]
#![warn(missing_docs)]

use semrel_render::{MetaError, PackageMeta};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors that can occur while loading package metadata.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The requested manifest file was not found.
    #[error("manifest file not found: {path}")]
    FileNotFound {
        /// Path that was requested.
        path: String,
    },

    /// The file could not be parsed.
    #[error("failed to parse manifest: {reason}")]
    ParseError {
        /// Human-readable parse error detail.
        reason: String,
    },

    /// A required field is absent after defaults and overrides.
    #[error("manifest is missing required field '{field}'")]
    MissingField {
        /// Name of the missing field.
        field: &'static str,
    },

    /// The fields are present but do not form valid metadata.
    #[error("invalid package metadata: {0}")]
    InvalidMetadata(#[from] MetaError),
}

// ---------------------------------------------------------------------------
// Manifest
// ---------------------------------------------------------------------------

/// Default package name.
pub const DEFAULT_NAME: &str = "semantic-release";

/// Default homepage.
pub const DEFAULT_HOMEPAGE: &str = "https://github.com/semantic-release/semantic-release#readme";

/// Subset of a package manifest the catalog cares about.
///
/// Unknown keys are ignored, so a full `package.json` parses as-is.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct PackageManifest {
    /// Package name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Published version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Project homepage URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,
}

impl PackageManifest {
    /// Metadata describing this build.
    pub fn builtin() -> Self {
        Self {
            name: Some(DEFAULT_NAME.into()),
            version: Some(env!("CARGO_PKG_VERSION").into()),
            homepage: Some(DEFAULT_HOMEPAGE.into()),
        }
    }

    /// Validate into [`PackageMeta`].
    pub fn into_meta(self) -> Result<PackageMeta, ConfigError> {
        let name = self.name.ok_or(ConfigError::MissingField { field: "name" })?;
        let version = self
            .version
            .ok_or(ConfigError::MissingField { field: "version" })?;
        let homepage = self
            .homepage
            .ok_or(ConfigError::MissingField { field: "homepage" })?;
        Ok(PackageMeta::new(name, version, &homepage)?)
    }
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Load [`PackageMeta`] from an optional manifest path.
///
/// * If `path` is `Some`, reads and parses the file: `.toml` files as TOML,
///   anything else as `package.json`.
/// * If `path` is `None`, starts from [`PackageManifest::builtin()`].
///
/// Environment variable overrides are applied on top in both cases.
pub fn load_metadata(path: Option<&Path>) -> Result<PackageMeta, ConfigError> {
    let mut manifest = match path {
        Some(p) => {
            debug!(target: "semrel.config", path = %p.display(), "loading package manifest");
            let content = std::fs::read_to_string(p).map_err(|_| ConfigError::FileNotFound {
                path: p.display().to_string(),
            })?;
            let is_toml = p.extension().is_some_and(|ext| ext == "toml");
            if is_toml {
                parse_manifest_toml(&content)?
            } else {
                parse_manifest_json(&content)?
            }
        }
        None => PackageManifest::builtin(),
    };
    apply_env_overrides(&mut manifest);
    manifest.into_meta()
}

/// Parse a `package.json` document.
pub fn parse_manifest_json(content: &str) -> Result<PackageManifest, ConfigError> {
    serde_json::from_str::<PackageManifest>(content).map_err(|e| ConfigError::ParseError {
        reason: e.to_string(),
    })
}

/// Parse a TOML manifest.
///
/// Fields are read from a `[package]` table when one exists, otherwise from
/// the top level.
pub fn parse_manifest_toml(content: &str) -> Result<PackageManifest, ConfigError> {
    let parse_err = |reason: String| ConfigError::ParseError { reason };

    let mut table = toml::from_str::<toml::Table>(content).map_err(|e| parse_err(e.to_string()))?;
    let fields = match table.remove("package") {
        Some(toml::Value::Table(package)) => package,
        Some(other) => {
            return Err(parse_err(format!(
                "[package] must be a table, found {}",
                other.type_str()
            )));
        }
        None => table,
    };
    toml::Value::Table(fields)
        .try_into::<PackageManifest>()
        .map_err(|e| parse_err(e.to_string()))
}

// ---------------------------------------------------------------------------
// Env overrides
// ---------------------------------------------------------------------------

/// Variables consulted by [`apply_env_overrides`], with the field each sets.
pub const ENV_OVERRIDES: [(&str, &str); 3] = [
    ("SEMREL_PACKAGE_NAME", "name"),
    ("SEMREL_PACKAGE_VERSION", "version"),
    ("SEMREL_HOMEPAGE", "homepage"),
];

/// Apply environment variable overrides.
///
/// Recognised variables:
/// - `SEMREL_PACKAGE_NAME`
/// - `SEMREL_PACKAGE_VERSION`
/// - `SEMREL_HOMEPAGE`
pub fn apply_env_overrides(manifest: &mut PackageManifest) {
    apply_overrides_from(manifest, |key| std::env::var(key).ok());
}

/// Apply overrides from an arbitrary variable source.
pub fn apply_overrides_from<F>(manifest: &mut PackageManifest, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    for (var, field) in ENV_OVERRIDES {
        let Some(val) = lookup(var) else { continue };
        debug!(target: "semrel.config", var, field, "applying environment override");
        match field {
            "name" => manifest.name = Some(val),
            "version" => manifest.version = Some(val),
            _ => manifest.homepage = Some(val),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
