use super::*;

#[test]
fn deserializes_server_account_shape() {
    let json = r#"{
        "_account_id": 1000096,
        "name": "Ada Lovelace",
        "email": "ada@example.com",
        "username": "ada",
        "avatars": [{"url": "https://example.com/a.png", "height": 26}]
    }"#;
    let account: Account = serde_json::from_str(json).unwrap();
    assert_eq!(account.id, AccountId(1000096));
    assert_eq!(account.name.as_deref(), Some("Ada Lovelace"));
    assert_eq!(account.username.as_deref(), Some("ada"));
    assert_eq!(account.display_name, None);
}

#[test]
fn display_label_prefers_display_name_then_falls_back() {
    let mut account = Account::new(1).with_name("Ada");
    assert_eq!(account.display_label(), "Ada");

    account.display_name = Some("Countess".to_string());
    assert_eq!(account.display_label(), "Countess");

    let mut bare = Account::new(2);
    assert_eq!(bare.display_label(), "Anonymous");

    bare.name = Some("  ".to_string());
    bare.email = Some("x@example.com".to_string());
    assert_eq!(bare.display_label(), "x@example.com");
}

#[test]
fn status_flags_are_mutually_exclusive() {
    let unknown = AccountStatus::Unknown;
    let logged_in = AccountStatus::from_resolved(Some(Account::new(7)));
    let logged_out = AccountStatus::from_resolved(None);

    assert!(!unknown.logged_in() && !unknown.logged_out());
    assert!(!unknown.is_resolved());

    assert!(logged_in.logged_in() && !logged_in.logged_out());
    assert_eq!(logged_in.account().map(|a| a.id), Some(AccountId(7)));

    assert!(!logged_out.logged_in() && logged_out.logged_out());
    assert!(logged_out.account().is_none());
}
