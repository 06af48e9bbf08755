use serde::{Deserialize, Serialize};

/// Credentials submitted to `POST /login`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Bearer token handed back by the server after a successful login.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
}

/// A question submitted to `POST /ask`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AskRequest {
    pub question: String,
}

/// The assistant's answer to a question.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AskResponse {
    pub response: String,
}

/// Confirmation returned by `POST /upload-pdf`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UploadResponse {
    pub message: String,
}

/// Error payload the server attaches to non-success statuses.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ErrorBody {
    pub detail: String,
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
