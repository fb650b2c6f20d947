use quadbeat::session::{self, FixedIdentity, IdentityProvider, RandomIdentity, SessionId};

#[test]
fn test_random_identity_format() {
    let id = RandomIdentity.create();
    let id = id.as_str();

    assert!(id.starts_with("user_"));
    assert_eq!(id.len(), "user_".len() + 9);
    assert!(
        id["user_".len()..]
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
    );
}

#[test]
fn test_random_identities_differ() {
    assert_ne!(RandomIdentity.create(), RandomIdentity.create());
}

#[test]
fn test_fixed_identity() {
    let provider = FixedIdentity("user_abc".to_string());
    assert_eq!(provider.create(), SessionId::new("user_abc"));
    assert_eq!(provider.create().to_string(), "user_abc");
}

#[test]
fn test_resolve_prefers_explicit_id() {
    assert_eq!(
        session::resolve(Some("user_mine".to_string())),
        SessionId::new("user_mine")
    );
    assert!(session::resolve(Some("   ".to_string())).as_str().starts_with("user_"));
    assert!(session::resolve(None).as_str().starts_with("user_"));
}
