use super::*;

#[test]
fn home_without_session_redirects_to_login() {
    assert_eq!(
        evaluate(&Route::Home, false),
        Decision::Redirect(Route::Login)
    );
}

#[test]
fn home_with_session_renders_home() {
    assert_eq!(evaluate(&Route::Home, true), Decision::Proceed);
}

#[test]
fn login_with_session_redirects_home() {
    assert_eq!(
        evaluate(&Route::Login, true),
        Decision::Redirect(Route::Home)
    );
}

#[test]
fn login_without_session_renders_login() {
    assert_eq!(evaluate(&Route::Login, false), Decision::Proceed);
}

#[test]
fn unmatched_path_lands_on_home_when_logged_in() {
    let requested = Route::recognize("/xyz").expect("catch-all should match");
    assert_eq!(requested, Route::NotFound);
    assert_eq!(terminal_target(requested, true), Route::Home);
}

#[test]
fn unmatched_path_without_session_chains_to_login() {
    let requested = Route::recognize("/xyz").expect("catch-all should match");
    assert_eq!(terminal_target(requested, false), Route::Login);
}

#[test]
fn terminal_target_is_always_home_or_login() {
    for route in [Route::Home, Route::Login, Route::NotFound] {
        for logged_in in [false, true] {
            let end = terminal_target(route.clone(), logged_in);
            assert!(
                matches!(end, Route::Home | Route::Login),
                "{route:?} (logged_in={logged_in}) ended at {end:?}"
            );
        }
    }
}

#[test]
fn terminal_target_is_a_fixed_point() {
    // A second pass through the gate must not redirect again.
    for route in [Route::Home, Route::Login, Route::NotFound] {
        for logged_in in [false, true] {
            let end = terminal_target(route.clone(), logged_in);
            assert_eq!(evaluate(&end, logged_in), Decision::Proceed);
        }
    }
}
