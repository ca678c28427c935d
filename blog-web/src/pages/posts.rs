//! Posts List Page
//!
//! Renders a loading placeholder synchronously, then populates from an
//! asynchronous fetch spawned when the list component is created. Post
//! copies are never authoritative: every delete re-fetches the list instead
//! of patching it locally.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::components::SignInPrompt;
use crate::routes::Route;
use crate::services::api;
use crate::services::session::PostStaging;
use crate::state::session::use_session_context;
use crate::utils::dom::confirm;

#[component]
pub fn PostsPage() -> impl IntoView {
    let session = use_session_context();

    view! {
        <section>
            {move || {
                if session.is_authenticated() {
                    view! { <PostsList/> }.into_any()
                } else {
                    view! { <SignInPrompt action="view posts"/> }.into_any()
                }
            }}
        </section>
    }
}

#[component]
fn PostsList() -> impl IntoView {
    let session = use_session_context();
    let navigate = use_navigate();

    // None = fetch not resolved yet, Some(vec) = current server copy
    let (posts, set_posts) = signal(None::<Vec<shared::Post>>);
    let (status, set_status) = signal(None::<String>);

    let load_posts = move || {
        let Some(token) = session.token() else {
            return;
        };
        spawn_local(async move {
            match api::list_posts(&token).await {
                Ok(list) => {
                    let _ = set_status.try_set(None);
                    let _ = set_posts.try_set(Some(list));
                }
                Err(err) => {
                    log::error!("failed to load posts: {err}");
                    let _ = set_status.try_set(Some("Error loading posts.".to_string()));
                }
            }
        });
    };
    // Initial fetch; resolves after this render pass has completed
    load_posts();

    let on_edit = move |id: String| {
        let Some(token) = session.token() else {
            return;
        };
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::get_post(&token, &id).await {
                Ok(post) => {
                    match PostStaging::browser() {
                        Some(staging) => staging.stage(&post),
                        None => {
                            log::warn!("session storage unavailable; edit form will start empty")
                        }
                    }
                    navigate(Route::EditPost.path(), Default::default());
                }
                Err(err) => {
                    log::error!("failed to fetch post {id} for edit: {err}");
                    let _ = set_status.try_set(Some(
                        "Failed to load post for editing. Please try again.".to_string(),
                    ));
                }
            }
        });
    };

    let on_delete = move |id: String| {
        if !confirm("Are you sure you want to delete this post?") {
            return;
        }
        let Some(token) = session.token() else {
            return;
        };
        spawn_local(async move {
            match api::delete_post(&token, &id).await {
                Ok(()) => load_posts(),
                Err(err) => {
                    log::error!("failed to delete post {id}: {err}");
                    let _ = set_status.try_set(Some(
                        "Failed to delete post. Please try again.".to_string(),
                    ));
                }
            }
        });
    };

    view! {
        <h2>"All Posts"</h2>
        {move || status.get().map(|message| view! { <p class="status-line">{message}</p> })}
        <div id="posts-container">
            {move || {
                let on_edit = on_edit.clone();
                match posts.get() {
                    None => view! { <p>"Loading posts..."</p> }.into_any(),
                    Some(list) if list.is_empty() => {
                        view! { <p>"No posts found."</p> }.into_any()
                    }
                    Some(list) => view! {
                        <div>
                            {list
                                .into_iter()
                                .map(|post| {
                                    let on_edit = on_edit.clone();
                                    let edit_id = post.id.clone();
                                    let delete_id = post.id.clone();
                                    view! {
                                        <article class="post">
                                            <h3>{post.title}</h3>
                                            <p>{post.content}</p>
                                            <button on:click=move |_| on_edit(edit_id.clone())>
                                                "Edit"
                                            </button>
                                            <button on:click=move |_| on_delete(delete_id.clone())>
                                                "Delete"
                                            </button>
                                        </article>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    }
                    .into_any(),
                }
            }}
        </div>
    }
}
