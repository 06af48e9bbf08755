use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;
use crate::session::SessionContext;
use crate::ui::chat::ChatWindow;
use crate::ui::login::LoginForm;

/// What the pre-navigation check decided for a requested route.
#[derive(Clone, Debug, PartialEq)]
pub enum Decision {
    Proceed,
    Redirect(Route),
}

/// The gate itself: a logged-in visitor is bounced off the login page, and
/// anything behind the gate bounces a logged-out visitor to it.
pub fn evaluate(target: &Route, logged_in: bool) -> Decision {
    if *target == Route::Login && logged_in {
        Decision::Redirect(Route::Home)
    } else if target.requires_auth() && !logged_in {
        Decision::Redirect(Route::Login)
    } else {
        Decision::Proceed
    }
}

/// Where a navigation finally lands: unmatched paths collapse to Home first,
/// then the gate applies. The result is always Home or Login.
pub fn terminal_target(requested: Route, logged_in: bool) -> Route {
    let target = match requested {
        Route::NotFound => Route::Home,
        other => other,
    };
    match evaluate(&target, logged_in) {
        Decision::Proceed => target,
        Decision::Redirect(to) => to,
    }
}

#[derive(Properties, PartialEq)]
pub struct RouteGuardProps {
    pub target: Route,
}

/// Runs the gate against the session provided at the root, then either
/// redirects or renders the requested view.
#[function_component(RouteGuard)]
pub fn route_guard(props: &RouteGuardProps) -> Html {
    let session = use_context::<SessionContext>().expect("SessionContext not found");
    let logged_in = session.is_some();

    match &props.target {
        // The catch-all never renders anything itself; it lands on Home,
        // which gets re-guarded on the next render.
        Route::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
        target => match evaluate(target, logged_in) {
            Decision::Redirect(to) => html! { <Redirect<Route> to={to} /> },
            Decision::Proceed => match target {
                Route::Home => html! { <ChatWindow /> },
                Route::Login => html! { <LoginForm /> },
                Route::NotFound => Html::default(),
            },
        },
    }
}

#[cfg(test)]
#[path = "guard_test.rs"]
mod tests;
