//! Allow-list construction and evaluation tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use origate_core::policy::defaults::{default_entries, platform_patterns};
use origate_core::{AllowList, OriginDecision};

fn default_list() -> AllowList {
    AllowList::build(None, default_entries(&[]).unwrap(), vec![])
}

#[test]
fn absent_or_empty_origin_is_allowed() {
    let list = default_list();
    assert!(list.is_allowed(None));
    assert!(list.is_allowed(Some("")));
    assert_eq!(list.evaluate(None), OriginDecision::Anonymous);
    assert_eq!(list.evaluate(Some("")), OriginDecision::Anonymous);
}

#[test]
fn nonempty_origin_normalizing_to_empty_is_rejected() {
    let list = default_list();
    assert!(!list.is_allowed(Some("   ")));
    assert!(!list.is_allowed(Some("///")));
    assert_eq!(list.evaluate(Some("''")), OriginDecision::Rejected);
}

#[test]
fn default_literals_match_with_normalization() {
    let list = default_list();
    assert!(list.is_allowed(Some("https://soukboudouaou.com")));
    assert!(list.is_allowed(Some("https://soukboudouaou.com/")));
    assert!(list.is_allowed(Some("\"https://www.soukboudouaou.com\"")));
    assert!(list.is_allowed(Some("http://localhost:5173")));
    assert!(!list.is_allowed(Some("https://evil.com")));
}

#[test]
fn platform_patterns_match_in_default_set() {
    let list = default_list();
    assert!(list.is_allowed(Some("https://myapp.replit.dev")));
    assert!(list.is_allowed(Some("https://x.replit.app")));
    assert!(list.is_allowed(Some("https://team.project.repl.co")));
    assert!(!list.is_allowed(Some("https://notreplit.dev")));
    assert!(!list.is_allowed(Some("http://myapp.replit.dev")));
}

#[test]
fn matched_origin_is_echoed_normalized() {
    let list = default_list();
    assert_eq!(
        list.evaluate(Some("https://soukboudouaou.com/")),
        OriginDecision::Allowed("https://soukboudouaou.com".to_string())
    );
}

#[test]
fn override_replaces_defaults_but_keeps_platform_patterns() {
    let list = AllowList::build(
        Some("https://a.com,https://b.com"),
        default_entries(&[]).unwrap(),
        platform_patterns().unwrap(),
    );
    assert!(list.is_allowed(Some("https://a.com")));
    assert!(list.is_allowed(Some("https://b.com")));
    assert!(!list.is_allowed(Some("https://c.com")));
    // defaults are gone entirely
    assert!(!list.is_allowed(Some("https://soukboudouaou.com")));
    // dynamic patterns survive every construction path
    assert!(list.is_allowed(Some("https://x.replit.app")));
    assert!(list.has_patterns());
}

#[test]
fn override_entries_are_normalized_and_empties_dropped() {
    let list = AllowList::build(
        Some(" \"https://a.com/\" ,, 'https://b.com' ,"),
        vec![],
        platform_patterns().unwrap(),
    );
    assert!(list.is_allowed(Some("https://a.com")));
    assert!(list.is_allowed(Some("https://b.com")));
    // three platform patterns + two literals
    assert_eq!(list.len(), 5);
}

#[test]
fn env_extra_literals_join_the_default_set() {
    let extras = vec!["https://myrepl.someone.repl.co/".to_string()];
    let list = AllowList::build(None, default_entries(&extras).unwrap(), vec![]);
    assert!(list.is_allowed(Some("https://myrepl.someone.repl.co")));
    assert!(list.is_allowed(Some("https://soukboudouaou.com")));
}

#[test]
fn decisions_are_deterministic() {
    let list = default_list();
    for _ in 0..3 {
        assert!(list.is_allowed(Some("https://soukboudouaou.com")));
        assert!(!list.is_allowed(Some("https://evil.com")));
        assert!(list.is_allowed(None));
    }
}
