// SPDX-License-Identifier: MIT OR Apache-2.0
//! Stable error codes and rendered error descriptors for semantic-release.
//!
//! Every reportable failure is identified by an [`ErrorCode`] (a published,
//! never-reused token such as `ENOGITREPO`). Rendering a failure produces an
//! [`ErrorDescriptor`]: a one-line `message` plus a Markdown `details` block.
//! [`ReleaseError`] is the error value a caller returns once a descriptor has
//! been rendered.

#![deny(unsafe_code)]
#![warn(missing_docs)]

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// ErrorCategory
// ---------------------------------------------------------------------------

/// Broad family that an [`ErrorCode`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// Git repository discovery and remote access.
    Repository,
    /// Invalid user configuration.
    Config,
    /// A configured plugin does not implement a step.
    Plugin,
    /// A plugin step returned a value of the wrong shape.
    PluginOutput,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Repository => "repository",
            Self::Config => "config",
            Self::Plugin => "plugin",
            Self::PluginOutput => "plugin_output",
        };
        f.write_str(s)
    }
}

// ---------------------------------------------------------------------------
// ErrorCode
// ---------------------------------------------------------------------------

/// Machine-readable, stable error code.
///
/// The string form is part of the tool's public contract: users search for
/// it and issue trackers reference it, so a token is never renamed or
/// reassigned to a different scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ErrorCode {
    /// Not running from a git repository.
    #[serde(rename = "ENOGITREPO")]
    NoGitRepo,
    /// The `repositoryUrl` option could not be determined.
    #[serde(rename = "ENOREPOURL")]
    NoRepoUrl,
    /// Pushing to the remote was rejected.
    #[serde(rename = "EGITNOPERMISSION")]
    GitNoPermission,
    /// `tagFormat` does not compile to a valid git reference.
    #[serde(rename = "EINVALIDTAGFORMAT")]
    InvalidTagFormat,
    /// `tagFormat` does not contain `${version}` exactly once.
    #[serde(rename = "ETAGNOVERSION")]
    TagNoVersion,
    /// A plugin step configuration has the wrong shape.
    #[serde(rename = "EPLUGINCONF")]
    PluginConf,
    /// A plugin does not expose a function for its step.
    #[serde(rename = "EPLUGIN")]
    Plugin,
    /// `analyzeCommits` returned something other than a release type.
    #[serde(rename = "EANALYZECOMMITSOUTPUT")]
    AnalyzeCommitsOutput,
    /// `generateNotes` returned something other than a string.
    #[serde(rename = "EGENERATENOTESOUTPUT")]
    GenerateNotesOutput,
    /// `publish` returned something other than an object.
    #[serde(rename = "EPUBLISHOUTPUT")]
    PublishOutput,
}

impl ErrorCode {
    /// Every published code, in catalog order.
    pub const ALL: [ErrorCode; 10] = [
        Self::NoGitRepo,
        Self::NoRepoUrl,
        Self::GitNoPermission,
        Self::InvalidTagFormat,
        Self::TagNoVersion,
        Self::PluginConf,
        Self::Plugin,
        Self::AnalyzeCommitsOutput,
        Self::GenerateNotesOutput,
        Self::PublishOutput,
    ];

    /// Returns the broad [`ErrorCategory`] this code belongs to.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::NoGitRepo | Self::NoRepoUrl | Self::GitNoPermission => {
                ErrorCategory::Repository
            }

            Self::InvalidTagFormat | Self::TagNoVersion | Self::PluginConf => {
                ErrorCategory::Config
            }

            Self::Plugin => ErrorCategory::Plugin,

            Self::AnalyzeCommitsOutput | Self::GenerateNotesOutput | Self::PublishOutput => {
                ErrorCategory::PluginOutput
            }
        }
    }

    /// Stable `&'static str` representation of the code (e.g. `"ENOGITREPO"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NoGitRepo => "ENOGITREPO",
            Self::NoRepoUrl => "ENOREPOURL",
            Self::GitNoPermission => "EGITNOPERMISSION",
            Self::InvalidTagFormat => "EINVALIDTAGFORMAT",
            Self::TagNoVersion => "ETAGNOVERSION",
            Self::PluginConf => "EPLUGINCONF",
            Self::Plugin => "EPLUGIN",
            Self::AnalyzeCommitsOutput => "EANALYZECOMMITSOUTPUT",
            Self::GenerateNotesOutput => "EGENERATENOTESOUTPUT",
            Self::PublishOutput => "EPUBLISHOUTPUT",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when parsing a token that is not a published [`ErrorCode`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown error code: {0}")]
pub struct UnknownErrorCode(pub String);

impl FromStr for ErrorCode {
    type Err = UnknownErrorCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|code| code.as_str() == s)
            .ok_or_else(|| UnknownErrorCode(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// ErrorDescriptor
// ---------------------------------------------------------------------------

/// Rendered, user-facing description of one failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDescriptor {
    /// Single-line summary.
    pub message: String,
    /// Markdown explanation with configuration excerpts and doc links.
    pub details: String,
}

impl ErrorDescriptor {
    /// Build a descriptor from its two parts.
    pub fn new(message: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            details: details.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// ReleaseError
// ---------------------------------------------------------------------------

/// A rendered failure, ready to be returned up the call stack.
///
/// `Display` shows the code and the one-line message; the Markdown details
/// are kept alongside for whoever prints the final report.
///
/// ```
/// use semrel_error::{ErrorCode, ErrorDescriptor, ReleaseError};
///
/// let err = ReleaseError::new(
///     ErrorCode::NoRepoUrl,
///     ErrorDescriptor::new("The `repositoryUrl` option is required.", "..."),
/// );
/// assert_eq!(err.to_string(), "[ENOREPOURL] The `repositoryUrl` option is required.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("[{code}] {message}")]
pub struct ReleaseError {
    /// Stable error code.
    pub code: ErrorCode,
    /// Single-line summary.
    pub message: String,
    /// Markdown explanation.
    pub details: String,
}

impl ReleaseError {
    /// Wrap a rendered descriptor with its code.
    pub fn new(code: ErrorCode, descriptor: ErrorDescriptor) -> Self {
        Self {
            code,
            message: descriptor.message,
            details: descriptor.details,
        }
    }

    /// Shorthand for `self.code.category()`.
    pub fn category(&self) -> ErrorCategory {
        self.code.category()
    }

    /// The message/details pair without the code.
    pub fn descriptor(&self) -> ErrorDescriptor {
        ErrorDescriptor::new(self.message.clone(), self.details.clone())
    }
}

// ---------------------------------------------------------------------------
// Serialization support
// ---------------------------------------------------------------------------

/// Serialisable snapshot of a [`ReleaseError`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReleaseErrorDto {
    /// Error code.
    pub code: ErrorCode,
    /// Single-line summary.
    pub message: String,
    /// Markdown explanation.
    pub details: String,
}

impl From<&ReleaseError> for ReleaseErrorDto {
    fn from(err: &ReleaseError) -> Self {
        Self {
            code: err.code,
            message: err.message.clone(),
            details: err.details.clone(),
        }
    }
}

impl From<ReleaseErrorDto> for ReleaseError {
    fn from(dto: ReleaseErrorDto) -> Self {
        Self {
            code: dto.code,
            message: dto.message,
            details: dto.details,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
