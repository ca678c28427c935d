//! New Post Page
//!
//! Gated by a capability check: without a token the sign-in prompt renders
//! in place of the form and no request is ever issued.

use leptos::ev::SubmitEvent;
use leptos::html::{Input, Textarea};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use shared::PostDraft;

use crate::components::SignInPrompt;
use crate::routes::Route;
use crate::services::api;
use crate::state::session::use_session_context;

#[component]
pub fn NewPostPage() -> impl IntoView {
    let session = use_session_context();

    view! {
        <section>
            {move || {
                if session.is_authenticated() {
                    view! { <NewPostForm/> }.into_any()
                } else {
                    view! { <SignInPrompt action="create a new post"/> }.into_any()
                }
            }}
        </section>
    }
}

#[component]
fn NewPostForm() -> impl IntoView {
    let session = use_session_context();
    let navigate = use_navigate();

    let title_ref = NodeRef::<Input>::new();
    let content_ref = NodeRef::<Textarea>::new();
    let (error, set_error) = signal(None::<String>);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let Some(token) = session.token() else {
            return;
        };
        let title = title_ref.get().map(|i| i.value()).unwrap_or_default();
        let content = content_ref.get().map(|t| t.value()).unwrap_or_default();

        let navigate = navigate.clone();
        spawn_local(async move {
            let draft = PostDraft { title, content };
            match api::create_post(&token, &draft).await {
                Ok(post) => {
                    log::info!("created post {}", post.id);
                    navigate(Route::Posts.path(), Default::default());
                }
                Err(err) => {
                    log::error!("failed to create post: {err}");
                    let _ = set_error.try_set(Some(format!(
                        "An error occurred while creating the post: {err}"
                    )));
                }
            }
        });
    };

    view! {
        <h2>"Create a New Post"</h2>
        <form id="post-form" on:submit=on_submit>
            <input type="text" name="title" node_ref=title_ref placeholder="Title" required/>
            <textarea name="content" node_ref=content_ref placeholder="Content" required></textarea>
            <button type="submit">"Publish"</button>
        </form>
        {move || error.get().map(|message| view! { <p class="status-line">{message}</p> })}
    }
}
