use super::*;

#[test]
fn redirect_from_query_accepts_in_app_paths() {
    assert_eq!(
        redirect_from_query(Some("/reports".to_owned())),
        Some("/reports".to_owned())
    );
}

#[test]
fn redirect_from_query_rejects_foreign_origins() {
    assert_eq!(redirect_from_query(Some("https://evil.example/".to_owned())), None);
    assert_eq!(redirect_from_query(Some("reports".to_owned())), None);
}

#[test]
fn redirect_from_query_ignores_empty_or_missing_values() {
    assert_eq!(redirect_from_query(Some(String::new())), None);
    assert_eq!(redirect_from_query(None), None);
}
