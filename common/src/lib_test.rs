use super::*;

#[test]
fn login_request_uses_backend_field_names() {
    let payload = LoginRequest {
        username: "ana".to_string(),
        password: "hunter2".to_string(),
    };
    let json = serde_json::to_value(&payload).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"username": "ana", "password": "hunter2"})
    );
}

#[test]
fn login_response_parses_token_fields() {
    let body: LoginResponse =
        serde_json::from_str(r#"{"access_token": "abc.def.ghi", "token_type": "bearer"}"#)
            .unwrap();
    assert_eq!(body.access_token, "abc.def.ghi");
    assert_eq!(body.token_type, "bearer");
}

#[test]
fn ask_round_uses_question_and_response_keys() {
    let json = serde_json::to_value(AskRequest {
        question: "what is chapter 3 about?".to_string(),
    })
    .unwrap();
    assert_eq!(json["question"], "what is chapter 3 about?");

    let body: AskResponse = serde_json::from_str(r#"{"response": "Chapter 3 covers…"}"#).unwrap();
    assert_eq!(body.response, "Chapter 3 covers…");
}

#[test]
fn error_body_parses_detail() {
    let body: ErrorBody = serde_json::from_str(r#"{"detail": "Invalid credentials."}"#).unwrap();
    assert_eq!(body.detail, "Invalid credentials.");
}
