use super::*;

#[test]
fn login_path_from_records_the_origin_as_a_query_param() {
    assert_eq!(login_path_from("/dashboard"), "/login?from=/dashboard");
}
