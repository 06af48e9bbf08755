use yew::prelude::*;
use yew_router::prelude::*;

use crate::guard::RouteGuard;
use crate::routes::Route;
use crate::session::{SessionContext, SessionStore};

#[function_component(App)]
pub fn app() -> Html {
    // The stored token is read exactly once; everything downstream sees
    // auth state through this context, never through storage directly.
    let session = use_state(SessionStore::load);

    html! {
        <ContextProvider<SessionContext> context={session.clone()}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<SessionContext>>
    }
}

fn switch(route: Route) -> Html {
    html! { <RouteGuard target={route} /> }
}
