//! Interface list page: filter by category, open the editor, delete.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::api;
use crate::net::http::ApiClient;

/// Interface list page.
#[component]
pub fn InterfaceListPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();

    let filter = RwSignal::new(None::<i64>);
    let interfaces = LocalResource::new(move || {
        let category_id = filter.get();
        async move {
            api::get_interfaces(api, category_id)
                .await
                .unwrap_or_default()
        }
    });
    let categories = LocalResource::new(move || async move {
        api::get_categories(api).await.unwrap_or_default()
    });

    let on_filter = move |ev: leptos::ev::Event| {
        filter.set(event_target_value(&ev).parse().ok());
    };

    let on_delete = move |id: i64| {
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            if api::delete_interface(api, id).await.is_ok() {
                interfaces.refetch();
            }
        });
        #[cfg(not(feature = "csr"))]
        let _ = id;
    };

    view! {
        <div class="interface-page">
            <header class="interface-page__header">
                <h1>"Interfaces"</h1>
                <select on:change=on_filter>
                    <option value="">"All categories"</option>
                    <Suspense fallback=|| ()>
                        {move || {
                            categories
                                .get()
                                .map(|list| {
                                    list.into_iter()
                                        .map(|c| {
                                            let id = c.id.unwrap_or_default();
                                            view! { <option value=id.to_string()>{c.name}</option> }
                                        })
                                        .collect::<Vec<_>>()
                                })
                        }}
                    </Suspense>
                </select>
            </header>

            <Suspense fallback=move || view! { <p>"Loading interfaces..."</p> }>
                {move || {
                    interfaces
                        .get()
                        .map(|list| {
                            view! {
                                <table class="interface-page__table">
                                    <thead>
                                        <tr>
                                            <th>"Name"</th>
                                            <th>"Method"</th>
                                            <th>"Path"</th>
                                            <th></th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {list
                                            .into_iter()
                                            .map(|iface| {
                                                let id = iface.id.unwrap_or_default();
                                                view! {
                                                    <tr>
                                                        <td>
                                                            <A href=format!("/interfaces/{id}")>
                                                                {iface.name}
                                                            </A>
                                                        </td>
                                                        <td>{iface.method.unwrap_or_default()}</td>
                                                        <td>{iface.path.unwrap_or_default()}</td>
                                                        <td>
                                                            <button
                                                                class="btn btn--danger"
                                                                on:click=move |_| on_delete(id)
                                                            >
                                                                "Delete"
                                                            </button>
                                                        </td>
                                                    </tr>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </tbody>
                                </table>
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
