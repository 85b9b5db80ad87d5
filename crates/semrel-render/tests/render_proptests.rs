// SPDX-License-Identifier: MIT OR Apache-2.0
//! Property-based tests for `semrel-render` — stringify and linkify invariants.

use proptest::prelude::*;
use semrel_render::{MAX_ARRAY_LENGTH, MAX_DEPTH, PackageMeta, stringify};
use serde_json::{Map, Value};

/// Strategy: arbitrary JSON built from alphanumeric strings, so brackets in
/// the output come only from composites.
fn json_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        (-1.0e6f64..1.0e6).prop_map(Value::from),
        "[a-z0-9]{0,8}".prop_map(Value::String),
    ];
    leaf.prop_recursive(6, 64, 8, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..10).prop_map(Value::Array),
            prop::collection::vec(("[a-z][a-z0-9]{0,5}", inner), 0..6)
                .prop_map(|kvs| Value::Object(kvs.into_iter().collect::<Map<_, _>>())),
        ]
    })
}

fn max_bracket_nesting(s: &str) -> usize {
    let (mut depth, mut max) = (0usize, 0usize);
    for c in s.chars() {
        match c {
            '[' | '{' => {
                depth += 1;
                max = max.max(depth);
            }
            ']' | '}' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    max
}

// ── 1. Strings pass through verbatim ────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]
    #[test]
    fn strings_are_unchanged(s in any::<String>()) {
        prop_assert_eq!(stringify(&Value::String(s.clone())), s);
    }
}

// ── 2. Never panics, single line, deterministic ─────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]
    #[test]
    fn composite_rendering_is_single_line_and_stable(v in json_value()) {
        let a = stringify(&v);
        let b = stringify(&v.clone());
        prop_assert_eq!(&a, &b);
        if !v.is_string() {
            prop_assert!(!a.contains('\n'), "multi-line output: {}", a);
        }
    }

    #[test]
    fn nesting_never_exceeds_depth_bound(v in json_value()) {
        // Root plus MAX_DEPTH expanded levels, plus one level of placeholder.
        let out = stringify(&v);
        prop_assert!(max_bracket_nesting(&out) <= MAX_DEPTH + 2, "too deep: {}", out);
    }
}

// ── 3. Array length bound ───────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]
    #[test]
    fn arrays_show_at_most_five_elements(items in prop::collection::vec(0u32..1000, 1..40)) {
        let out = stringify(&serde_json::json!(items));
        let shown = items.len().min(MAX_ARRAY_LENGTH);
        let hidden = items.len() - shown;

        let expected_head: Vec<String> = items.iter().take(shown).map(u32::to_string).collect();
        let expected_prefix = format!("[ {}", expected_head.join(", "));
        prop_assert!(out.starts_with(&expected_prefix));

        if hidden == 0 {
            prop_assert!(!out.contains("more item"));
        } else {
            let plural = if hidden == 1 { "" } else { "s" };
            let summary = format!("... {hidden} more item{plural} ]");
            prop_assert!(out.ends_with(&summary), "{}", out);
        }
    }
}

// ── 4. Linkify shape ────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]
    #[test]
    fn linkify_appends_path_verbatim(
        segs in prop::collection::vec("[a-z][a-z0-9_-]{0,7}", 1..4),
        anchor in prop::option::of("[a-z][a-z0-9-]{0,10}"),
        frag in prop::option::of("[a-z]{1,6}"),
    ) {
        let homepage = match &frag {
            Some(f) => format!("https://github.com/acme/tool#{f}"),
            None => "https://github.com/acme/tool".to_string(),
        };
        let meta = PackageMeta::new("tool", "1.0.0", &homepage).unwrap();

        let mut path = format!("{}.md", segs.join("/"));
        if let Some(a) = &anchor {
            path.push('#');
            path.push_str(a);
        }

        prop_assert_eq!(
            meta.linkify(&path),
            format!("https://github.com/acme/tool/blob/caribou/{path}")
        );
    }
}
