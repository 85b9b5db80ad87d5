// SPDX-License-Identifier: MIT OR Apache-2.0
//! Property-based tests for `semrel-catalog` — every entry renders, for any
//! context, without panicking and with its documentation links intact.

use proptest::prelude::*;
use semrel_catalog::{
    ErrorCatalog, ErrorKind, GitNoPermissionContext, NoGitRepoContext, PackageMeta,
    PluginConfContext, PluginContext, PluginOutputContext, ReleaseOptions, TagFormatContext,
};
use serde_json::Value;

fn catalog() -> ErrorCatalog {
    let meta = PackageMeta::new(
        "semantic-release",
        "15.1.0",
        "https://github.com/semantic-release/semantic-release",
    )
    .unwrap();
    ErrorCatalog::new(&meta)
}

fn json_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i32>().prop_map(Value::from),
        ".{0,12}".prop_map(Value::String),
    ];
    leaf.prop_recursive(4, 32, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..8).prop_map(Value::Array),
            prop::collection::btree_map("[a-zA-Z-]{1,6}", inner, 0..4)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

fn opt_text() -> impl Strategy<Value = Option<String>> {
    prop::option::of("[a-zA-Z@/_-]{1,16}")
}

fn error_kind() -> impl Strategy<Value = ErrorKind> {
    let value = || prop::option::of(json_value());
    prop_oneof![
        opt_text().prop_map(|cwd| ErrorKind::NoGitRepo(NoGitRepoContext { cwd })),
        Just(ErrorKind::NoRepoUrl),
        (opt_text(), opt_text()).prop_map(|(branch, repository_url)| {
            ErrorKind::GitNoPermission(GitNoPermissionContext {
                options: ReleaseOptions {
                    branch,
                    repository_url,
                },
            })
        }),
        value().prop_map(|tag_format| ErrorKind::InvalidTagFormat(TagFormatContext { tag_format })),
        value().prop_map(|tag_format| ErrorKind::TagNoVersion(TagFormatContext { tag_format })),
        (opt_text(), any::<bool>(), any::<bool>(), value()).prop_map(
            |(step, multiple, required, plugin_conf)| {
                ErrorKind::PluginConf(PluginConfContext {
                    step,
                    multiple,
                    required,
                    plugin_conf,
                })
            }
        ),
        (opt_text(), opt_text())
            .prop_map(|(plugin_name, step)| ErrorKind::Plugin(PluginContext { plugin_name, step })),
        (value(), opt_text()).prop_map(|(result, plugin_name)| {
            ErrorKind::AnalyzeCommitsOutput(PluginOutputContext {
                result,
                plugin_name,
            })
        }),
        (value(), opt_text()).prop_map(|(result, plugin_name)| {
            ErrorKind::GenerateNotesOutput(PluginOutputContext {
                result,
                plugin_name,
            })
        }),
        (value(), opt_text()).prop_map(|(result, plugin_name)| {
            ErrorKind::PublishOutput(PluginOutputContext {
                result,
                plugin_name,
            })
        }),
    ]
}

// ── 1. Every entry renders and links its docs ───────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]
    #[test]
    fn descriptor_has_message_and_doc_links(kind in error_kind()) {
        let catalog = catalog();
        let d = catalog.render(&kind);

        prop_assert!(!d.message.is_empty());
        prop_assert!(!d.message.contains('\n'));
        for path in kind.doc_paths() {
            let url = catalog.meta().linkify(&path);
            prop_assert!(d.details.contains(&url), "{} missing from {}", url, d.details);
        }
    }

    #[test]
    fn rendering_is_deterministic(kind in error_kind()) {
        let catalog = catalog();
        prop_assert_eq!(catalog.render(&kind), catalog.render(&kind.clone()));
    }
}

// ── 2. Plugin configuration wording follows the flags ───────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]
    #[test]
    fn plugin_conf_wording(required in any::<bool>(), multiple in any::<bool>()) {
        let d = catalog().render(&ErrorKind::PluginConf(PluginConfContext {
            step: Some("analyzeCommits".into()),
            multiple,
            required,
            plugin_conf: None,
        }));

        prop_assert_eq!(d.details.contains("is required and "), required);
        prop_assert_eq!(d.details.contains("a single or an array of plugins"), multiple);
        prop_assert_eq!(d.details.contains("a single plugin definition"), !multiple);
    }
}

// ── 3. String context values appear verbatim ────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]
    #[test]
    fn string_tag_format_is_verbatim(tag in "[a-zA-Z0-9.${}-]{1,20}") {
        let d = catalog().render(&ErrorKind::InvalidTagFormat(TagFormatContext {
            tag_format: Some(Value::String(tag.clone())),
        }));
        let expected = format!("option is `{tag}`.");
        prop_assert!(d.details.ends_with(&expected));
    }
}
