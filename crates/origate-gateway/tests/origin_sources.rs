#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use origate_gateway::config::env::platform_urls;
use origate_gateway::config::OriginSources;

#[test]
fn slug_and_owner_form_a_platform_url() {
    let urls = platform_urls(
        Some("myrepl".into()),
        Some("someone".into()),
        None,
        None,
    );
    assert_eq!(urls, ["https://myrepl.someone.repl.co"]);
}

#[test]
fn missing_owner_falls_back_to_platform_default() {
    let urls = platform_urls(Some("myrepl".into()), None, None, None);
    assert_eq!(urls, ["https://myrepl.replit.repl.co"]);
}

#[test]
fn dev_and_app_urls_are_appended() {
    let urls = platform_urls(
        None,
        None,
        Some("https://abc.replit.dev".into()),
        Some("https://abc.replit.app".into()),
    );
    assert_eq!(urls, ["https://abc.replit.dev", "https://abc.replit.app"]);
}

#[test]
fn platform_urls_are_normalized_into_the_allow_list() {
    // values straight out of a .env file often carry quotes and slashes
    let sources = OriginSources {
        override_csv: None,
        platform_urls: vec!["\"https://abc.replit.dev/\"".to_string()],
    };
    let list = sources.into_allow_list().unwrap();
    assert!(list.is_allowed(Some("https://abc.replit.dev")));
}

#[test]
fn override_csv_wins_over_platform_urls() {
    let sources = OriginSources {
        override_csv: Some("https://only.example".to_string()),
        platform_urls: vec!["https://abc.other.repl.co".to_string()],
    };
    let list = sources.into_allow_list().unwrap();
    assert!(list.is_allowed(Some("https://only.example")));
    // platform literal ignored, but the repl.co pattern still matches it
    assert!(list.is_allowed(Some("https://abc.other.repl.co")));
    assert!(!list.is_allowed(Some("https://dropped.example")));
}
