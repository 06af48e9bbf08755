use super::*;

#[test]
fn missing_value_is_not_a_session() {
    assert_eq!(Session::from_stored(None), None);
}

#[test]
fn empty_value_is_not_a_session() {
    assert_eq!(Session::from_stored(Some(String::new())), None);
}

#[test]
fn any_non_empty_value_is_a_session() {
    let session = Session::from_stored(Some("not-even-a-jwt".to_string())).unwrap();
    assert_eq!(session.token(), "not-even-a-jwt");
}

#[test]
fn bearer_prefixes_the_raw_token() {
    let session = Session::new("abc.def.ghi");
    assert_eq!(session.bearer(), "Bearer abc.def.ghi");
}
