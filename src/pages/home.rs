//! Home page: category overview and a greeting for the signed-in user.

use leptos::prelude::*;

use crate::net::api;
use crate::net::http::ApiClient;
use crate::state::session::SessionState;

/// Home page — greets the user and lists the catalog categories.
#[component]
pub fn HomePage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let session = expect_context::<RwSignal<SessionState>>();

    let categories = LocalResource::new(move || async move {
        api::get_categories(api).await.unwrap_or_default()
    });

    let greeting = move || {
        session.with(|s| match s.display_name() {
            Some(name) => format!("Welcome, {name}"),
            None => "Welcome".to_owned(),
        })
    };

    view! {
        <div class="home-page">
            <h1>{greeting}</h1>
            <h2>"Categories"</h2>
            <Suspense fallback=move || view! { <p>"Loading categories..."</p> }>
                {move || {
                    categories
                        .get()
                        .map(|list| {
                            if list.is_empty() {
                                view! { <p>"No categories yet."</p> }.into_any()
                            } else {
                                view! {
                                    <ul class="home-page__categories">
                                        {list
                                            .into_iter()
                                            .map(|c| {
                                                view! {
                                                    <li>
                                                        <strong>{c.name}</strong>
                                                        {c.description.unwrap_or_default()}
                                                    </li>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </ul>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
