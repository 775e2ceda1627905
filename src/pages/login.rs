//! Login page with a combined login/register form.

use leptos::prelude::*;

#[cfg(feature = "csr")]
use crate::net::api;
use crate::net::http::ApiClient;
#[cfg(feature = "csr")]
use crate::util::storage::BrowserStore;

/// Login page — submits credentials, stores the returned session, and
/// moves to the home view. The navigation guard bounces already
/// authenticated visitors away from this page.
#[component]
pub fn LoginPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let nickname = RwSignal::new(String::new());
    let registering = RwSignal::new(false);
    let pending = RwSignal::new(false);

    #[cfg(feature = "csr")]
    let navigate = leptos_router::hooks::use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let name = username.get_untracked().trim().to_owned();
        let pass = password.get_untracked();
        if name.is_empty() || pass.is_empty() {
            return;
        }
        pending.set(true);

        #[cfg(feature = "csr")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let result = if registering.get_untracked() {
                    let nick = nickname.get_untracked().trim().to_owned();
                    api::register(api, &name, &pass, &nick).await
                } else {
                    api::login(api, &name, &pass).await
                };
                pending.set(false);

                // Failures were already surfaced as a notice.
                if let Ok(payload) = result {
                    api.session
                        .update(|s| s.set_auth(&BrowserStore, payload.token, payload.user));
                    navigate(
                        crate::routes::HOME_PATH,
                        leptos_router::NavigateOptions::default(),
                    );
                }
            });
        }
    };

    view! {
        <div class="login-page">
            <h1>"Catalog Admin"</h1>
            <form class="login-page__form" on:submit=on_submit>
                <input
                    type="text"
                    placeholder="Username"
                    prop:value=username
                    on:input=move |ev| username.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Password"
                    prop:value=password
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <Show when=move || registering.get()>
                    <input
                        type="text"
                        placeholder="Nickname (optional)"
                        prop:value=nickname
                        on:input=move |ev| nickname.set(event_target_value(&ev))
                    />
                </Show>
                <button type="submit" class="btn btn--primary" disabled=move || pending.get()>
                    {move || if registering.get() { "Register" } else { "Sign in" }}
                </button>
            </form>
            <button
                class="login-page__toggle"
                on:click=move |_| registering.update(|r| *r = !*r)
            >
                {move || {
                    if registering.get() {
                        "Have an account? Sign in"
                    } else {
                        "New here? Register"
                    }
                }}
            </button>
        </div>
    }
}
