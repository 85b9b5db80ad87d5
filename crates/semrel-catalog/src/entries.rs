// SPDX-License-Identifier: MIT OR Apache-2.0

//! One template function per error code.

use semrel_error::ErrorDescriptor;
use semrel_render::{PackageMeta, UNDEFINED, stringify_opt};

use crate::ReleaseType;
use crate::context::{
    GitNoPermissionContext, NoGitRepoContext, PluginConfContext, PluginContext,
    PluginOutputContext, TagFormatContext,
};

/// Documentation pages inside the project repository.
pub(crate) mod docs {
    pub const CONFIGURATION: &str = "docs/usage/configuration.md";
    pub const REPOSITORY_URL: &str = "docs/usage/configuration.md#repositoryurl";
    pub const TAG_FORMAT: &str = "docs/usage/configuration.md#tagformat";
    pub const AUTHENTICATION: &str = "docs/usage/ci-configuration.md#authentication";
    pub const PLUGINS: &str = "docs/usage/plugins.md";
    pub const PLUGIN_GUIDE: &str = "docs/developer-guide/plugin.md";

    /// Section of the plugins page describing one step.
    pub fn plugin_step_anchor(step: Option<&str>) -> String {
        format!("{PLUGINS}#{}-plugin", step.unwrap_or_default().to_lowercase())
    }
}

/// Pages outside the project.
mod external {
    pub const SEMVER: &str = "https://semver.org";
    pub const GIT_REMOTES: &str = "https://git-scm.com/book/en/v2/Git-Basics-Working-with-Remotes";
    pub const GIT_PROTOCOLS: &str =
        "https://git-scm.com/book/en/v2/Git-on-the-Server-The-Protocols";
    pub const GIT_REF_FORMAT: &str = "https://git-scm.com/docs/git-check-ref-format#_description";
}

fn text(value: Option<&str>) -> &str {
    value.unwrap_or(UNDEFINED)
}

pub(crate) fn no_git_repo(meta: &PackageMeta, ctx: &NoGitRepoContext) -> ErrorDescriptor {
    let name = meta.name();
    let mut details =
        format!("The `{name}` command must be executed from a Git repository.\n\n");
    if let Some(cwd) = &ctx.cwd {
        details.push_str(&format!("The current working directory is `{cwd}`.\n\n"));
    }
    details.push_str(&format!(
        "Please verify your CI configuration to make sure the `{name}` command is executed \
         from the root of the cloned repository."
    ));

    ErrorDescriptor::new("Not running from a git repository.", details)
}

pub(crate) fn no_repo_url(meta: &PackageMeta) -> ErrorDescriptor {
    let name = meta.name();
    let details = format!(
        "The [repositoryUrl option]({repo_url}) cannot be determined from the {name} \
         configuration, the `package.json` nor the [git origin url]({remotes}).\n\n\
         Please make sure to add the `repositoryUrl` to the [{name} configuration]({config}).",
        repo_url = meta.linkify(docs::REPOSITORY_URL),
        remotes = external::GIT_REMOTES,
        config = meta.linkify(docs::CONFIGURATION),
    );

    ErrorDescriptor::new("The `repositoryUrl` option is required.", details)
}

pub(crate) fn git_no_permission(
    meta: &PackageMeta,
    ctx: &GitNoPermissionContext,
) -> ErrorDescriptor {
    let details = format!(
        "**{name}** cannot push the version tag to the branch `{branch}` on remote Git \
         repository with URL `{url}`.\n\n\
         Please refer to the [authentication configuration documentation]({auth}) to configure \
         the Git credentials on your CI environment and make sure the [repositoryUrl]({repo_url}) \
         is configured with a [valid Git URL]({protocols}).",
        name = meta.name(),
        branch = text(ctx.options.branch.as_deref()),
        url = text(ctx.options.repository_url.as_deref()),
        auth = meta.linkify(docs::AUTHENTICATION),
        repo_url = meta.linkify(docs::REPOSITORY_URL),
        protocols = external::GIT_PROTOCOLS,
    );

    ErrorDescriptor::new(
        "The push permission to the Git repository is required.",
        details,
    )
}

pub(crate) fn invalid_tag_format(meta: &PackageMeta, ctx: &TagFormatContext) -> ErrorDescriptor {
    let details = format!(
        "The [tagFormat]({doc}) must compile to a [valid Git reference]({ref_format}).\n\n\
         Your configuration for the `tagFormat` option is `{value}`.",
        doc = meta.linkify(docs::TAG_FORMAT),
        ref_format = external::GIT_REF_FORMAT,
        value = stringify_opt(ctx.tag_format.as_ref()),
    );

    ErrorDescriptor::new("Invalid `tagFormat` option.", details)
}

pub(crate) fn tag_no_version(meta: &PackageMeta, ctx: &TagFormatContext) -> ErrorDescriptor {
    let details = format!(
        "The [tagFormat]({doc}) option must contain the variable `version` exactly once.\n\n\
         Your configuration for the `tagFormat` option is `{value}`.",
        doc = meta.linkify(docs::TAG_FORMAT),
        value = stringify_opt(ctx.tag_format.as_ref()),
    );

    ErrorDescriptor::new("Invalid `tagFormat` option.", details)
}

pub(crate) fn plugin_conf(meta: &PackageMeta, ctx: &PluginConfContext) -> ErrorDescriptor {
    let step = text(ctx.step.as_deref());
    let required = if ctx.required { "is required and " } else { "" };
    let shape = if ctx.multiple {
        "a single or an array of plugins"
    } else {
        "a single plugin"
    };

    let details = format!(
        "The [{step} plugin configuration]({doc}) {required}must be {shape} definition. \
         A plugin definition is either a string or an object with a `path` property.\n\n\
         Your configuration for the `{step}` plugin is `{conf}`.",
        doc = meta.linkify(&docs::plugin_step_anchor(ctx.step.as_deref())),
        conf = stringify_opt(ctx.plugin_conf.as_ref()),
    );

    ErrorDescriptor::new(
        format!("The `{step}` plugin configuration is invalid."),
        details,
    )
}

pub(crate) fn plugin(meta: &PackageMeta, ctx: &PluginContext) -> ErrorDescriptor {
    let name = meta.name();
    let step = text(ctx.step.as_deref());
    let plugin_name = text(ctx.plugin_name.as_deref());

    let details = format!(
        "A valid `{step}` **{name}** plugin must be a function or an object with a function \
         in the property `{step}`.\n\n\
         The plugin `{plugin_name}` doesn't have the property `{step}` and cannot be used for \
         the `{step}` step.\n\n\
         Please refer to the `{plugin_name}` and [{name} plugins configuration]({doc}) \
         documentation for more details.",
        doc = meta.linkify(docs::PLUGINS),
    );

    ErrorDescriptor::new(
        format!("A plugin configured in the step {step} is not a valid {name} plugin."),
        details,
    )
}

/// Shared by every plugin-output code: what the step must return, what it
/// returned, and what to include when reporting the problem upstream.
fn plugin_output(
    meta: &PackageMeta,
    step: &str,
    requirement: &str,
    ctx: &PluginOutputContext,
) -> String {
    let name = meta.name();
    let plugin_name = text(ctx.plugin_name.as_deref());
    let result = stringify_opt(ctx.result.as_ref());
    let guide = meta.linkify(docs::PLUGIN_GUIDE);

    format!(
        "{requirement}\n\n\
         The `{step}` function of the `{plugin_name}` returned `{result}` instead.\n\n\
         We recommend to report the issue to the `{plugin_name}` authors, providing the \
         following information:\n\
         - The **{name}** version: `{version}`\n\
         - The **{name}** logs from your CI job\n\
         - The value returned by the plugin: `{result}`\n\
         - A link to the **{name}** plugin developer guide: [{guide}]({guide})",
        version = meta.version(),
    )
}

pub(crate) fn analyze_commits_output(
    meta: &PackageMeta,
    ctx: &PluginOutputContext,
) -> ErrorDescriptor {
    let valid = ReleaseType::ALL
        .iter()
        .map(|t| format!("`{t}`"))
        .collect::<Vec<_>>()
        .join(", ");
    let requirement = format!(
        "The `analyzeCommits` plugin must return a valid [semver]({}) release type. \
         The valid values are: {valid}.",
        external::SEMVER,
    );

    ErrorDescriptor::new(
        "The `analyzeCommits` plugin returned an invalid value. It must return a valid semver \
         release type.",
        plugin_output(meta, "analyzeCommits", &requirement, ctx),
    )
}

pub(crate) fn generate_notes_output(
    meta: &PackageMeta,
    ctx: &PluginOutputContext,
) -> ErrorDescriptor {
    ErrorDescriptor::new(
        "The `generateNotes` plugin returned an invalid value. It must return a `String`.",
        plugin_output(
            meta,
            "generateNotes",
            "The `generateNotes` plugin must return a `String`.",
            ctx,
        ),
    )
}

pub(crate) fn publish_output(meta: &PackageMeta, ctx: &PluginOutputContext) -> ErrorDescriptor {
    ErrorDescriptor::new(
        "A `publish` plugin returned an invalid value. It must return an `Object`.",
        plugin_output(
            meta,
            "publish",
            "The `publish` plugins must return an `Object`.",
            ctx,
        ),
    )
}
