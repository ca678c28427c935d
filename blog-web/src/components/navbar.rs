//! Navigation Bar Component

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::routes::Route;
use crate::state::session::use_session_context;

/// Header navigation. Link set follows the session: signed-out visitors get
/// sign-in/sign-up, signed-in users get the post links and a logout button.
#[component]
pub fn Navbar() -> impl IntoView {
    let session = use_session_context();
    let navigate = use_navigate();

    let on_logout = move |_: web_sys::MouseEvent| {
        log::info!("logging out");
        session.sign_out();
        navigate(Route::Home.path(), Default::default());
    };

    view! {
        <header>
            <nav>
                <A href=Route::Home.path() {..} class="nav-link">"Home"</A>
                {move || {
                    let on_logout = on_logout.clone();
                    if session.is_authenticated() {
                        view! {
                            <A href=Route::Posts.path() {..} class="nav-link">"View All Posts"</A>
                            <A href=Route::NewPost.path() {..} class="nav-link">"New Post"</A>
                            <button class="nav-button" on:click=on_logout>"Logout"</button>
                        }
                        .into_any()
                    } else {
                        view! {
                            <A href=Route::SignIn.path() {..} class="nav-link">"Sign In"</A>
                            <A href=Route::SignUp.path() {..} class="nav-link">"Sign Up"</A>
                        }
                        .into_any()
                    }
                }}
            </nav>
        </header>
    }
}
