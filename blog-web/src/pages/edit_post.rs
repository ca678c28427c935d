//! Edit Post Page
//!
//! The form is seeded from the staged post left in sessionStorage by the
//! posts list. A successful update clears the staged copy and returns to the
//! list; a failure leaves the form (and the staged copy) in place.

use leptos::ev::SubmitEvent;
use leptos::html::{Input, Textarea};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use shared::Post;

use crate::components::SignInPrompt;
use crate::routes::Route;
use crate::services::api;
use crate::services::session::PostStaging;
use crate::state::session::use_session_context;

#[component]
pub fn EditPostPage() -> impl IntoView {
    let session = use_session_context();

    view! {
        <section>
            {move || {
                if session.is_authenticated() {
                    view! { <EditPostForm/> }.into_any()
                } else {
                    view! { <SignInPrompt action="edit posts"/> }.into_any()
                }
            }}
        </section>
    }
}

#[component]
fn EditPostForm() -> impl IntoView {
    let session = use_session_context();
    let navigate = use_navigate();

    let staged = PostStaging::browser().and_then(|staging| staging.load());
    if staged.is_none() {
        log::warn!("no staged post found for the edit form");
    }
    let post_id = StoredValue::new(
        staged
            .as_ref()
            .map(|post| post.id.clone())
            .unwrap_or_default(),
    );
    let initial_title = staged
        .as_ref()
        .map(|post| post.title.clone())
        .unwrap_or_default();
    let initial_content = staged.map(|post| post.content).unwrap_or_default();

    let title_ref = NodeRef::<Input>::new();
    let content_ref = NodeRef::<Textarea>::new();
    let (status, set_status) = signal(None::<String>);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let Some(token) = session.token() else {
            return;
        };
        let id = post_id.get_value();
        if id.is_empty() {
            set_status.set(Some("No post is staged for editing.".to_string()));
            return;
        }
        let title = title_ref.get().map(|i| i.value()).unwrap_or_default();
        let content = content_ref.get().map(|t| t.value()).unwrap_or_default();

        let navigate = navigate.clone();
        spawn_local(async move {
            let post = Post { id, title, content };
            match api::update_post(&token, &post).await {
                Ok(updated) => {
                    log::info!("updated post {}", updated.id);
                    if let Some(staging) = PostStaging::browser() {
                        staging.clear();
                    }
                    navigate(Route::Posts.path(), Default::default());
                }
                Err(err) => {
                    log::error!("failed to update post: {err}");
                    let _ =
                        set_status.try_set(Some(format!("Failed to update post: {err}")));
                }
            }
        });
    };

    view! {
        <h2>"Edit Post"</h2>
        <form id="edit-post-form" on:submit=on_submit>
            <input
                type="text"
                name="title"
                node_ref=title_ref
                placeholder="Title"
                value=initial_title
                required
            />
            <textarea name="content" node_ref=content_ref placeholder="Content" required>
                {initial_content}
            </textarea>
            <button type="submit">"Update Post"</button>
        </form>
        {move || status.get().map(|message| view! { <p class="status-line">{message}</p> })}
    }
}
