use strum::EnumIter;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::auth;
use crate::pages::{
    ArchivedChatsPage, DashboardPage, HomePage, LoginPage, NotFoundPage, SignupPage,
};

/// The application routes, one per screen.
#[derive(Debug, Clone, PartialEq, Routable, EnumIter)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/signup")]
    Signup,
    #[at("/login")]
    Login,
    #[at("/dashboard")]
    Dashboard,
    #[at("/archived-chats")]
    ArchivedChats,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Route metadata: whether navigating here requires a stored token.
    pub const fn requires_auth(&self) -> bool {
        matches!(self, Self::Dashboard | Self::ArchivedChats)
    }
}

/// The guard predicate, run once per navigation: where to send this
/// navigation instead, if anywhere.
///
/// Presence check only: any non-empty token passes, valid or not.
/// Enforcement happens server-side.
pub fn redirect_for(route: &Route, token: Option<&str>) -> Option<Route> {
    if route.requires_auth() && token.map_or(true, str::is_empty) {
        return Some(Route::Login);
    }
    None
}

/// Switch function: guard, then render the matched page.
pub fn switch(route: Route) -> Html {
    if let Some(target) = redirect_for(&route, auth::access_token().as_deref()) {
        return html! { <Redirect<Route> to={target} /> };
    }
    match route {
        Route::Home => html! { <HomePage /> },
        Route::Signup => html! { <SignupPage /> },
        Route::Login => html! { <LoginPage /> },
        Route::Dashboard => html! { <DashboardPage /> },
        Route::ArchivedChats => html! { <ArchivedChatsPage /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}
