// SPDX-License-Identifier: MIT OR Apache-2.0

//! Valid outcomes of commit analysis.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A semver release type an `analyzeCommits` plugin may return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReleaseType {
    /// `major`
    Major,
    /// `premajor`
    Premajor,
    /// `minor`
    Minor,
    /// `preminor`
    Preminor,
    /// `patch`
    Patch,
    /// `prepatch`
    Prepatch,
    /// `prerelease`
    Prerelease,
}

impl ReleaseType {
    /// Every release type, highest precedence first.
    pub const ALL: [ReleaseType; 7] = [
        Self::Major,
        Self::Premajor,
        Self::Minor,
        Self::Preminor,
        Self::Patch,
        Self::Prepatch,
        Self::Prerelease,
    ];

    /// Token as returned by plugins.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Major => "major",
            Self::Premajor => "premajor",
            Self::Minor => "minor",
            Self::Preminor => "preminor",
            Self::Patch => "patch",
            Self::Prepatch => "prepatch",
            Self::Prerelease => "prerelease",
        }
    }
}

impl fmt::Display for ReleaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a token is not a [`ReleaseType`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("not a release type: {0}")]
pub struct UnknownReleaseType(pub String);

impl FromStr for ReleaseType {
    type Err = UnknownReleaseType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownReleaseType(s.to_string()))
    }
}
