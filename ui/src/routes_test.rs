use super::*;

#[test]
fn root_path_is_home() {
    assert_eq!(Route::recognize("/"), Some(Route::Home));
}

#[test]
fn login_path_is_login() {
    assert_eq!(Route::recognize("/login"), Some(Route::Login));
}

#[test]
fn unmatched_paths_hit_the_catch_all() {
    assert_eq!(Route::recognize("/xyz"), Some(Route::NotFound));
    assert_eq!(Route::recognize("/login/extra"), Some(Route::NotFound));
}

#[test]
fn only_home_requires_auth() {
    assert!(Route::Home.requires_auth());
    assert!(!Route::Login.requires_auth());
    assert!(!Route::NotFound.requires_auth());
}
