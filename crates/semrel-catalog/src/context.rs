// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-kind context records and the [`ErrorKind`] union.
//!
//! Fields a template interpolates are optional: a caller that forgets one
//! still gets a descriptor, with `undefined` in place of the value.

use semrel_error::ErrorCode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::CatalogError;

/// Keep an explicit JSON `null` distinct from an absent field.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Context for [`ErrorCode::NoGitRepo`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NoGitRepoContext {
    /// Working directory the tool was started from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cwd: Option<String>,
}

/// Release options referenced by [`ErrorCode::GitNoPermission`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReleaseOptions {
    /// Branch the release is made from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    /// Remote repository URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository_url: Option<String>,
}

/// Context for [`ErrorCode::GitNoPermission`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GitNoPermissionContext {
    /// Effective release options.
    pub options: ReleaseOptions,
}

/// Context for [`ErrorCode::InvalidTagFormat`] and [`ErrorCode::TagNoVersion`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TagFormatContext {
    /// The configured `tagFormat`, whatever its JSON type.
    #[serde(deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub tag_format: Option<Value>,
}

/// Context for [`ErrorCode::PluginConf`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PluginConfContext {
    /// Plugin step name, e.g. `verifyConditions`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub step: Option<String>,
    /// Whether the step accepts several plugins.
    pub multiple: bool,
    /// Whether the step must be configured.
    pub required: bool,
    /// The rejected configuration value.
    #[serde(deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub plugin_conf: Option<Value>,
}

/// Context for [`ErrorCode::Plugin`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PluginContext {
    /// Name the plugin was configured with.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plugin_name: Option<String>,
    /// Step the plugin was expected to implement.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub step: Option<String>,
}

/// Context for the plugin-output codes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PluginOutputContext {
    /// Value the plugin returned.
    #[serde(deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    /// Name the plugin was configured with.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plugin_name: Option<String>,
}

fn parse<T: DeserializeOwned>(code: ErrorCode, context: Value) -> Result<T, CatalogError> {
    serde_json::from_value(context).map_err(|e| CatalogError::InvalidContext {
        code,
        reason: e.to_string(),
    })
}

/// One occurrence of a failure, with the data its template needs.
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorKind {
    /// `ENOGITREPO`
    NoGitRepo(NoGitRepoContext),
    /// `ENOREPOURL`
    NoRepoUrl,
    /// `EGITNOPERMISSION`
    GitNoPermission(GitNoPermissionContext),
    /// `EINVALIDTAGFORMAT`
    InvalidTagFormat(TagFormatContext),
    /// `ETAGNOVERSION`
    TagNoVersion(TagFormatContext),
    /// `EPLUGINCONF`
    PluginConf(PluginConfContext),
    /// `EPLUGIN`
    Plugin(PluginContext),
    /// `EANALYZECOMMITSOUTPUT`
    AnalyzeCommitsOutput(PluginOutputContext),
    /// `EGENERATENOTESOUTPUT`
    GenerateNotesOutput(PluginOutputContext),
    /// `EPUBLISHOUTPUT`
    PublishOutput(PluginOutputContext),
}

impl ErrorKind {
    /// Stable code of this kind.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::NoGitRepo(_) => ErrorCode::NoGitRepo,
            Self::NoRepoUrl => ErrorCode::NoRepoUrl,
            Self::GitNoPermission(_) => ErrorCode::GitNoPermission,
            Self::InvalidTagFormat(_) => ErrorCode::InvalidTagFormat,
            Self::TagNoVersion(_) => ErrorCode::TagNoVersion,
            Self::PluginConf(_) => ErrorCode::PluginConf,
            Self::Plugin(_) => ErrorCode::Plugin,
            Self::AnalyzeCommitsOutput(_) => ErrorCode::AnalyzeCommitsOutput,
            Self::GenerateNotesOutput(_) => ErrorCode::GenerateNotesOutput,
            Self::PublishOutput(_) => ErrorCode::PublishOutput,
        }
    }

    /// Build the kind for `code` from a JSON context object.
    ///
    /// `null` is accepted as an empty context. Fields the record does not
    /// know are ignored.
    pub fn from_json(code: ErrorCode, context: &Value) -> Result<Self, CatalogError> {
        let context = match context {
            Value::Null => Value::Object(Map::new()),
            other => other.clone(),
        };

        let kind = match code {
            ErrorCode::NoGitRepo => Self::NoGitRepo(parse(code, context)?),
            ErrorCode::NoRepoUrl => Self::NoRepoUrl,
            ErrorCode::GitNoPermission => Self::GitNoPermission(parse(code, context)?),
            ErrorCode::InvalidTagFormat => Self::InvalidTagFormat(parse(code, context)?),
            ErrorCode::TagNoVersion => Self::TagNoVersion(parse(code, context)?),
            ErrorCode::PluginConf => Self::PluginConf(parse(code, context)?),
            ErrorCode::Plugin => Self::Plugin(parse(code, context)?),
            ErrorCode::AnalyzeCommitsOutput => Self::AnalyzeCommitsOutput(parse(code, context)?),
            ErrorCode::GenerateNotesOutput => Self::GenerateNotesOutput(parse(code, context)?),
            ErrorCode::PublishOutput => Self::PublishOutput(parse(code, context)?),
        };
        Ok(kind)
    }

    /// Repository-relative documentation paths the rendered details link to.
    pub fn doc_paths(&self) -> Vec<String> {
        use crate::entries::docs;

        match self {
            Self::NoGitRepo(_) => Vec::new(),
            Self::NoRepoUrl => vec![docs::REPOSITORY_URL.into(), docs::CONFIGURATION.into()],
            Self::GitNoPermission(_) => {
                vec![docs::AUTHENTICATION.into(), docs::REPOSITORY_URL.into()]
            }
            Self::InvalidTagFormat(_) | Self::TagNoVersion(_) => vec![docs::TAG_FORMAT.into()],
            Self::PluginConf(ctx) => vec![docs::plugin_step_anchor(ctx.step.as_deref())],
            Self::Plugin(_) => vec![docs::PLUGINS.into()],
            Self::AnalyzeCommitsOutput(_)
            | Self::GenerateNotesOutput(_)
            | Self::PublishOutput(_) => vec![docs::PLUGIN_GUIDE.into()],
        }
    }
}
