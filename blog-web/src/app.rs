//! Blog Client App - Leptos root component
//!
//! Owns the route table. Every route is a static path; anything else falls
//! through to the not-found view regardless of session state.

use leptos::prelude::*;
use leptos_router::{
    components::{A, Route, Router, Routes},
    path,
};

use crate::components::Navbar;
use crate::pages::{
    EditPostPage, HomePage, NewPostPage, PostsPage, SignInPage, SignUpPage,
};
use crate::state::session::provide_session_context;

#[component]
pub fn App() -> impl IntoView {
    provide_session_context();

    view! {
        <Router>
            <div class="app-container">
                <Navbar/>
                <main id="app">
                    <Routes fallback=|| view! { <NotFound/> }>
                        <Route path=path!("/") view=HomePage/>
                        <Route path=path!("/signin") view=SignInPage/>
                        <Route path=path!("/signup") view=SignUpPage/>
                        <Route path=path!("/new-post") view=NewPostPage/>
                        <Route path=path!("/posts") view=PostsPage/>
                        <Route path=path!("/edit-post") view=EditPostPage/>
                    </Routes>
                </main>
            </div>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h2>"404 - Page Not Found"</h2>
            <p>"The page you're looking for doesn't exist."</p>
            <A href="/">"Go to Home"</A>
        </div>
    }
}
