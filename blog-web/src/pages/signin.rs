//! Sign In Page
//!
//! On success the session is persisted and the client returns home after a
//! short pause so the status line is readable. A transport failure gets a
//! connectivity-specific message and triggers a console-only health probe;
//! a rejected request reports the status code instead.

use leptos::ev::SubmitEvent;
use leptos::html::Input;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use shared::Credentials;

use crate::routes::Route;
use crate::services::api::{self, ApiError};
use crate::state::session::use_session_context;

#[component]
pub fn SignInPage() -> impl IntoView {
    let session = use_session_context();
    let navigate = use_navigate();

    let username_ref = NodeRef::<Input>::new();
    let password_ref = NodeRef::<Input>::new();
    let (status, set_status) = signal(None::<String>);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let username = username_ref.get().map(|i| i.value()).unwrap_or_default();
        let password = password_ref.get().map(|i| i.value()).unwrap_or_default();
        if username.is_empty() || password.is_empty() {
            set_status.set(Some("Username and password required".to_string()));
            return;
        }

        set_status.set(Some("Signing in...".to_string()));
        let navigate = navigate.clone();
        spawn_local(async move {
            let credentials = Credentials {
                username: username.clone(),
                password,
            };
            match api::sign_in(&credentials).await {
                Ok(response) => match response.token {
                    Some(token) => {
                        session.sign_in(token, username);
                        let _ = set_status.try_set(Some("Signed in successfully!".to_string()));
                        // Let the success message show before leaving the page
                        gloo_timers::future::TimeoutFuture::new(1_000).await;
                        navigate(Route::Home.path(), Default::default());
                    }
                    None => {
                        let _ = set_status.try_set(Some(
                            "Sign in failed. The server did not provide a token.".to_string(),
                        ));
                    }
                },
                Err(ApiError::Network(err)) => {
                    log::error!("sign-in transport failure: {err}");
                    let _ = set_status.try_set(Some(
                        "Network error. Please check your internet connection and try again."
                            .to_string(),
                    ));
                    // Probe whether the server is reachable at all; console only
                    match api::health_check().await {
                        Ok(()) => log::info!("server is reachable and responding"),
                        Err(err) => log::warn!("unable to reach the server: {err}"),
                    }
                }
                Err(err) => {
                    let _ = set_status.try_set(Some(format!("Sign in failed: {err}")));
                }
            }
        });
    };

    view! {
        <h2>"Sign In"</h2>
        <form id="signin-form" on:submit=on_submit>
            <input
                type="text"
                name="username"
                node_ref=username_ref
                placeholder="Username"
                required
            />
            <input
                type="password"
                name="password"
                node_ref=password_ref
                placeholder="Password"
                required
            />
            <button type="submit">"Sign In"</button>
        </form>
        {move || status.get().map(|message| view! { <p class="status-line">{message}</p> })}
    }
}
