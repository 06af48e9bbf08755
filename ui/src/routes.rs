use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Whether the route sits behind the login gate.
    pub fn requires_auth(&self) -> bool {
        match self {
            Route::Home => true,
            Route::Login | Route::NotFound => false,
        }
    }
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;
