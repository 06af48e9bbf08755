use docchat_common::{AskRequest, AskResponse, ErrorBody, LoginRequest, LoginResponse, UploadResponse};
use gloo_net::http::{Request, Response};
use thiserror::Error;
use web_sys::FormData;

use crate::session::Session;

/// Backend origin, overridable at build time for deployed setups.
const API_BASE: &str = match option_env!("DOCCHAT_API_BASE") {
    Some(base) => base,
    None => "http://127.0.0.1:8000",
};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The server no longer accepts our token.
    #[error("{0}")]
    Unauthorized(String),
    /// The server answered with a non-success status.
    #[error("{0}")]
    Api(String),
    /// The request never completed.
    #[error("network error: {0}")]
    Network(String),
}

fn endpoint(path: &str) -> String {
    format!("{}{}", API_BASE.trim_end_matches('/'), path)
}

/// Prefer the server's `{"detail": …}` message over a bare status code.
async fn error_from(resp: Response) -> ApiError {
    let status = resp.status();
    let detail = match resp.json::<ErrorBody>().await {
        Ok(body) => body.detail,
        Err(_) => format!("request failed with status {status}"),
    };
    if status == 401 {
        ApiError::Unauthorized(detail)
    } else {
        ApiError::Api(detail)
    }
}

async fn parse<T: serde::de::DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
    if !resp.ok() {
        return Err(error_from(resp).await);
    }
    resp.json().await.map_err(|e| ApiError::Network(e.to_string()))
}

/// Exchange credentials for a bearer token.
pub async fn login(username: &str, password: &str) -> Result<LoginResponse, ApiError> {
    let payload = LoginRequest {
        username: username.to_owned(),
        password: password.to_owned(),
    };
    let resp = Request::post(&endpoint("/login"))
        .json(&payload)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    parse(resp).await
}

/// Ask a question against the indexed documents.
pub async fn ask(session: &Session, question: &str) -> Result<AskResponse, ApiError> {
    let payload = AskRequest {
        question: question.to_owned(),
    };
    let resp = Request::post(&endpoint("/ask"))
        .header("Authorization", &session.bearer())
        .json(&payload)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    parse(resp).await
}

/// Upload a PDF for indexing. The server only accepts these from admins;
/// anyone else gets its 403 surfaced as an ordinary error.
pub async fn upload_pdf(session: &Session, file: &web_sys::File) -> Result<UploadResponse, ApiError> {
    let form = FormData::new().map_err(|_| ApiError::Network("could not build form data".to_string()))?;
    form.append_with_blob("file", file)
        .map_err(|_| ApiError::Network("could not attach file".to_string()))?;
    let resp = Request::post(&endpoint("/upload-pdf"))
        .header("Authorization", &session.bearer())
        .body(form)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    parse(resp).await
}
