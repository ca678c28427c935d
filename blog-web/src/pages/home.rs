//! Home Page

use leptos::prelude::*;

use crate::state::session::use_session_context;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session_context();

    view! {
        <h1>"Welcome to our Blog"</h1>
        <p>"This is the home page of our simple blog."</p>
        {move || {
            if let Some(username) = session.username() {
                view! { <p>"Welcome, " {username} "!"</p> }.into_any()
            } else {
                view! { <p>"Please sign in to create and manage posts."</p> }.into_any()
            }
        }}
    }
}
