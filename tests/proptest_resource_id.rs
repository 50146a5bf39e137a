//! Property-based tests using proptest
//!
//! These tests verify resource id parsing and formatting against
//! randomized inputs.

use aznet::resource_id::{short_name, ResourceId};
use proptest::prelude::*;

/// Generate a plausible path segment (resource names, groups, types)
fn arb_segment() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-zA-Z][a-zA-Z0-9._-]{0,30}").unwrap()
}

/// Generate a provider namespace like "Microsoft.Network"
fn arb_namespace() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Microsoft.Network".to_string()),
        Just("Microsoft.Compute".to_string()),
        "[A-Z][a-z]{2,10}\\.[A-Z][a-z]{2,10}",
    ]
}

fn top_level_id(sub: &str, group: &str, ns: &str, ty: &str, name: &str) -> String {
    format!(
        "/subscriptions/{}/resourceGroups/{}/providers/{}/{}/{}",
        sub, group, ns, ty, name
    )
}

proptest! {
    /// Parsing a well-formed top-level id recovers every field
    #[test]
    fn parse_recovers_fields(
        sub in arb_segment(),
        group in arb_segment(),
        ns in arb_namespace(),
        ty in arb_segment(),
        name in arb_segment(),
    ) {
        let raw = top_level_id(&sub, &group, &ns, &ty, &name);
        let id = ResourceId::parse(&raw).unwrap();

        prop_assert_eq!(&id.subscription_id, &sub);
        prop_assert_eq!(&id.resource_group, &group);
        prop_assert_eq!(&id.provider_namespace, &ns);
        prop_assert_eq!(&id.resource_type, &ty);
        prop_assert_eq!(&id.name, &name);
        prop_assert!(!id.is_child());
    }

    /// Display of a parsed id reproduces the input exactly
    #[test]
    fn parse_format_round_trips(
        sub in arb_segment(),
        group in arb_segment(),
        ns in arb_namespace(),
        ty in arb_segment(),
        name in arb_segment(),
        child_ty in arb_segment(),
        child_name in arb_segment(),
    ) {
        let raw = format!(
            "{}/{}/{}",
            top_level_id(&sub, &group, &ns, &ty, &name),
            child_ty,
            child_name
        );
        let id = ResourceId::parse(&raw).unwrap();
        prop_assert!(id.is_child());
        prop_assert_eq!(id.to_string(), raw);
    }

    /// Parsing is stable: parse(format(parse(x))) == parse(x)
    #[test]
    fn parse_is_idempotent(
        sub in arb_segment(),
        group in arb_segment(),
        ns in arb_namespace(),
        ty in arb_segment(),
        name in arb_segment(),
    ) {
        let raw = top_level_id(&sub, &group, &ns, &ty, &name);
        let once = ResourceId::parse(&raw).unwrap();
        let twice = ResourceId::parse(&once.to_string()).unwrap();
        prop_assert_eq!(once, twice);
    }

    /// A wrong keyword anywhere in the fixed positions is rejected
    #[test]
    fn wrong_keywords_are_rejected(
        keyword in "[a-z]{3,12}",
        sub in arb_segment(),
        group in arb_segment(),
        name in arb_segment(),
    ) {
        prop_assume!(!keyword.eq_ignore_ascii_case("subscriptions"));
        let raw = format!(
            "/{}/{}/resourceGroups/{}/providers/Microsoft.Network/virtualNetworks/{}",
            keyword, sub, group, name
        );
        prop_assert!(ResourceId::parse(&raw).is_err());
    }

    /// Truncated paths never parse
    #[test]
    fn truncated_paths_are_rejected(
        sub in arb_segment(),
        group in arb_segment(),
        ns in arb_namespace(),
        ty in arb_segment(),
        name in arb_segment(),
        cut in 1usize..8,
    ) {
        let raw = top_level_id(&sub, &group, &ns, &ty, &name);
        let segments: Vec<&str> = raw.split('/').filter(|s| !s.is_empty()).collect();
        let truncated = format!("/{}", segments[..segments.len() - cut].join("/"));
        prop_assert!(ResourceId::parse(&truncated).is_err());
    }

    /// short_name always returns the last segment
    #[test]
    fn short_name_is_last_segment(
        sub in arb_segment(),
        group in arb_segment(),
        ns in arb_namespace(),
        ty in arb_segment(),
        name in arb_segment(),
    ) {
        let raw = top_level_id(&sub, &group, &ns, &ty, &name);
        prop_assert_eq!(short_name(&raw), name.as_str());
    }
}
