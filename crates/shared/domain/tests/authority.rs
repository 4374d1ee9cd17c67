use folio_domain::authority::Authorities;
use folio_domain::constants::{ROLE_ADMIN, ROLE_USER};
use serde_json::json;

#[test]
fn parses_role_names() {
    assert_eq!(Authorities::from_role(ROLE_USER), Some(Authorities::USER));
    assert_eq!(Authorities::from_role(ROLE_ADMIN), Some(Authorities::ADMIN));
    assert_eq!(Authorities::from_role("ROLE_GUEST"), None);
    assert_eq!(Authorities::from_role("*"), None);
}

#[test]
fn serializes_as_role_list() {
    let value = serde_json::to_value(Authorities::ALL).unwrap();
    assert_eq!(value, json!([ROLE_USER, ROLE_ADMIN]));

    let parsed: Authorities = serde_json::from_value(json!(["ROLE_ADMIN"])).unwrap();
    assert_eq!(parsed, Authorities::ADMIN);
}

#[test]
fn unknown_roles_are_rejected() {
    let err = serde_json::from_value::<Authorities>(json!([ROLE_USER, "ROLE_GUEST"])).unwrap_err();
    assert!(err.to_string().contains("unknown role 'ROLE_GUEST'"));
}

#[test]
fn empty_role_list_means_unguarded() {
    let parsed: Authorities = serde_json::from_value(json!([])).unwrap();
    assert!(parsed.is_empty());
}
