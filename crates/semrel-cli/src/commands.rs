// SPDX-License-Identifier: MIT OR Apache-2.0
//! Shared command implementations for the `semrel-errors` CLI.
//!
//! These functions are library-level so they can be tested without
//! spawning the binary.

use anyhow::{Context, Result, bail};
use semrel_catalog::{ErrorCatalog, ErrorCode, ErrorDescriptor};
use serde_json::Value;
use std::path::Path;

/// One line per code: the token, padded, then its category.
pub fn format_code_list() -> String {
    let width = ErrorCode::ALL
        .iter()
        .map(|c| c.as_str().len())
        .max()
        .unwrap_or(0);

    ErrorCode::ALL
        .iter()
        .map(|code| format!("{:<width$}  {}\n", code.as_str(), code.category()))
        .collect()
}

/// Resolve the context object from `--context` or `--context-file`.
///
/// Neither flag means an empty context.
pub fn read_context(inline: Option<&str>, file: Option<&Path>) -> Result<Value> {
    match (inline, file) {
        (Some(_), Some(_)) => bail!("--context and --context-file are mutually exclusive"),
        (Some(json), None) => serde_json::from_str(json).context("parse --context as JSON"),
        (None, Some(path)) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("read context file '{}'", path.display()))?;
            serde_json::from_str(&content)
                .with_context(|| format!("parse JSON from '{}'", path.display()))
        }
        (None, None) => Ok(Value::Object(Default::default())),
    }
}

/// Render `code` with `context` into printable text.
pub fn render_report(catalog: &ErrorCatalog, code: &str, context: &Value) -> Result<String> {
    let descriptor = catalog
        .render_json(code, context)
        .with_context(|| format!("render {code}"))?;
    Ok(format_descriptor(&descriptor))
}

/// Message, blank line, details.
pub fn format_descriptor(descriptor: &ErrorDescriptor) -> String {
    format!("{}\n\n{}\n", descriptor.message, descriptor.details)
}

#[cfg(test)]
mod tests {
    use super::*;
    use semrel_catalog::PackageMeta;
    use serde_json::json;

    fn catalog() -> ErrorCatalog {
        let meta = PackageMeta::new("semantic-release", "15.1.0", "https://example.org/sr").unwrap();
        ErrorCatalog::new(&meta)
    }

    #[test]
    fn code_list_has_every_code() {
        let list = format_code_list();
        assert_eq!(list.lines().count(), ErrorCode::ALL.len());
        assert!(list.contains("EANALYZECOMMITSOUTPUT  plugin_output"));
        assert!(list.lines().any(|l| l.starts_with("ENOGITREPO ") && l.ends_with("repository")));
    }

    #[test]
    fn empty_context_by_default() {
        assert_eq!(read_context(None, None).unwrap(), json!({}));
    }

    #[test]
    fn inline_context_parsed() {
        assert_eq!(
            read_context(Some(r#"{"tagFormat": 1}"#), None).unwrap(),
            json!({"tagFormat": 1})
        );
    }

    #[test]
    fn both_context_sources_rejected() {
        let err = read_context(Some("{}"), Some(Path::new("ctx.json"))).unwrap_err();
        assert!(err.to_string().contains("mutually exclusive"));
    }

    #[test]
    fn bad_inline_json_rejected() {
        assert!(read_context(Some("{"), None).is_err());
    }

    #[test]
    fn report_layout() {
        let out = render_report(&catalog(), "ENOREPOURL", &json!({})).unwrap();
        assert!(out.starts_with("The `repositoryUrl` option is required.\n\nThe [repositoryUrl option]"));
        assert!(out.ends_with(".\n"));
    }

    #[test]
    fn unknown_code_has_context() {
        let err = render_report(&catalog(), "EWHAT", &json!({})).unwrap_err();
        let chain = format!("{err:#}");
        assert!(chain.contains("render EWHAT"));
        assert!(chain.contains("unknown error code: EWHAT"));
    }
}
