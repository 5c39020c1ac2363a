//! Route Guard
//!
//! Wraps protected content and redirects unauthenticated visitors to the
//! login page. Only token presence is checked; the token is never validated
//! client-side.

use leptos::*;
use leptos_router::Redirect;

use crate::state::session;

/// Renders its children only when a session token is present
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    view! {
        {move || {
            if session::is_authenticated() {
                children().into_view()
            } else {
                view! { <Redirect path="/login" /> }.into_view()
            }
        }}
    }
}
