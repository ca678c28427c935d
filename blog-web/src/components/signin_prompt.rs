//! Sign-in prompt shown in place of authenticated views
//!
//! This is a capability check, not a redirect: the URL stays on the
//! requested route.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes::Route;

#[component]
pub fn SignInPrompt(
    /// What the visitor was trying to do, e.g. "view posts"
    action: &'static str,
) -> impl IntoView {
    view! {
        <p class="signin-prompt">
            "Please "
            <A href=Route::SignIn.path() {..} class="nav-link">"sign in"</A>
            " to " {action} "."
        </p>
    }
}
