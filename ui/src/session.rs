use yew::UseStateHandle;

/// Local-storage key the bearer token lives under.
pub const AUTH_TOKEN_KEY: &str = "access_token";

/// An authenticated session. The token is opaque: the navigation gate only
/// ever checks that a session exists, never what the token contains.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    token: String,
}

impl Session {
    pub fn new(token: impl Into<String>) -> Self {
        Session {
            token: token.into(),
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// `Authorization` header value for API calls.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }

    /// An empty stored value reads as "not logged in".
    fn from_stored(value: Option<String>) -> Option<Session> {
        match value {
            Some(token) if !token.is_empty() => Some(Session::new(token)),
            _ => None,
        }
    }
}

/// Shared session state, provided once at the application root and queried
/// by the navigation gate instead of reading storage ambiently.
pub type SessionContext = UseStateHandle<Option<Session>>;

/// Browser-local persistence for the session token. Every failure mode
/// (no window, storage blocked, missing key) reads as "not logged in".
pub struct SessionStore;

impl SessionStore {
    pub fn load() -> Option<Session> {
        let storage = web_sys::window()?.local_storage().ok()??;
        Session::from_stored(storage.get_item(AUTH_TOKEN_KEY).ok()?)
    }

    pub fn save(session: &Session) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(AUTH_TOKEN_KEY, session.token());
        }
    }

    pub fn clear() {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(AUTH_TOKEN_KEY);
        }
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
