//! Sign Up Page

use leptos::ev::SubmitEvent;
use leptos::html::Input;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use shared::Credentials;

use crate::routes::Route;
use crate::services::api::{self, ApiError};

#[component]
pub fn SignUpPage() -> impl IntoView {
    let navigate = use_navigate();

    let username_ref = NodeRef::<Input>::new();
    let password_ref = NodeRef::<Input>::new();
    let (error, set_error) = signal(None::<String>);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let username = username_ref.get().map(|i| i.value()).unwrap_or_default();
        let password = password_ref.get().map(|i| i.value()).unwrap_or_default();
        if username.is_empty() || password.is_empty() {
            set_error.set(Some("Username and password required".to_string()));
            return;
        }

        let navigate = navigate.clone();
        spawn_local(async move {
            let credentials = Credentials { username, password };
            match api::sign_up(&credentials).await {
                Ok(()) => {
                    log::info!("signup successful");
                    navigate(Route::SignIn.path(), Default::default());
                }
                Err(ApiError::Network(err)) => {
                    log::error!("sign-up transport failure: {err}");
                    let _ = set_error.try_set(Some(
                        "Network error. Please check your internet connection and try again."
                            .to_string(),
                    ));
                }
                Err(err) => {
                    let _ = set_error.try_set(Some(format!("Sign up failed: {err}")));
                }
            }
        });
    };

    view! {
        <h2>"Sign Up"</h2>
        <form id="signup-form" on:submit=on_submit>
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
            <button type="submit">"Sign Up"</button>
        </form>
        {move || error.get().map(|message| view! { <p class="status-line">{message}</p> })}
    }
}
