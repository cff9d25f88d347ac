use nimbus_types::{PushPayload, PushPlatform, PushToken};
use pretty_assertions::assert_eq;

// ── Tokens ───────────────────────────────────────────────────────

#[test]
fn token_shorthands_tag_the_platform() {
    assert_eq!(PushToken::ios("t1").platform, PushPlatform::Ios);
    assert_eq!(PushToken::android("t2").platform, PushPlatform::Android);
    assert_eq!(PushToken::android_gcm("t3").platform, PushPlatform::AndroidGcm);
}

#[test]
fn tokens_compare_by_token_and_platform() {
    assert_eq!(PushToken::ios("abc"), PushToken::ios("abc"));
    assert_ne!(PushToken::ios("abc"), PushToken::android("abc"));
    assert_ne!(PushToken::ios("abc"), PushToken::ios("def"));
}

#[test]
fn platform_serializes_snake_case() {
    assert_eq!(
        serde_json::to_string(&PushPlatform::AndroidGcm).unwrap(),
        "\"android_gcm\""
    );
}

// ── Payloads ─────────────────────────────────────────────────────

#[test]
fn payload_builder_accumulates_pairs() {
    let p = PushPayload::new()
        .with("alert", "You have mail")
        .with("badge", "3");
    assert_eq!(p.len(), 2);
    assert_eq!(p.get("alert"), Some("You have mail"));
    assert_eq!(p.get("badge"), Some("3"));
}

#[test]
fn payload_insert_replaces() {
    let mut p = PushPayload::new();
    assert_eq!(p.insert("k", "v1"), None);
    assert_eq!(p.insert("k", "v2"), Some("v1".to_owned()));
    assert_eq!(p.get("k"), Some("v2"));
}

#[test]
fn empty_payload() {
    let p = PushPayload::new();
    assert!(p.is_empty());
    assert_eq!(p.len(), 0);
    assert_eq!(p.get("missing"), None);
}

#[test]
fn payload_iterates_in_key_order() {
    let p = PushPayload::new().with("b", "2").with("a", "1");
    let pairs: Vec<_> = p.iter().collect();
    assert_eq!(pairs, vec![("a", "1"), ("b", "2")]);
}

#[test]
fn payload_serializes_transparently() {
    let p = PushPayload::new().with("alert", "hi");
    assert_eq!(serde_json::to_string(&p).unwrap(), r#"{"alert":"hi"}"#);
}

#[test]
fn delivery_limits_are_documented_constants() {
    assert_eq!(PushPayload::FULL_DELIVERY_LIMIT, 256);
    assert_eq!(PushPayload::DEGRADED_DELIVERY_LIMIT, 1024);
    assert!(PushPayload::FULL_DELIVERY_LIMIT < PushPayload::DEGRADED_DELIVERY_LIMIT);
}
