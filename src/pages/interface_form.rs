//! Interface detail page: definition, parameter tree, JSON example.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::net::api;
use crate::net::http::ApiClient;
use crate::net::types::ApiParameter;

/// One row of the flattened parameter tree.
struct ParameterRow {
    depth: usize,
    name: String,
    param_type: String,
    required: bool,
    example: String,
}

/// Flatten the parameter tree depth-first for table rendering.
fn flatten(parameters: &[ApiParameter], depth: usize, rows: &mut Vec<ParameterRow>) {
    for p in parameters {
        rows.push(ParameterRow {
            depth,
            name: p.name.clone(),
            param_type: p.param_type.clone().unwrap_or_else(|| "string".to_owned()),
            required: p.required.unwrap_or(false),
            example: p.example_value.clone().unwrap_or_default(),
        });
        flatten(&p.children, depth + 1, rows);
    }
}

/// Interface detail page for `/interfaces/:id`.
#[component]
pub fn InterfaceFormPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let params_map = use_params_map();
    let interface_id =
        move || params_map.read().get("id").and_then(|s| s.parse::<i64>().ok());

    let interface = LocalResource::new(move || {
        let id = interface_id();
        async move {
            match id {
                Some(id) => api::get_interface(api, id).await.ok(),
                None => None,
            }
        }
    });
    let parameters = LocalResource::new(move || {
        let id = interface_id();
        async move {
            match id {
                Some(id) => api::get_parameters(api, id).await.unwrap_or_default(),
                None => Vec::new(),
            }
        }
    });

    // JSON example is generated on demand, not on load.
    let example = RwSignal::new(None::<String>);
    let on_example = move |_| {
        let Some(id) = interface_id() else { return };
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            if let Ok(value) = api::get_json_example(api, id).await {
                example.set(serde_json::to_string_pretty(&value).ok());
            }
        });
        #[cfg(not(feature = "csr"))]
        let _ = id;
    };

    // Append-a-parameter form; saving posts the whole top-level list back.
    let new_name = RwSignal::new(String::new());
    let new_type = RwSignal::new("string".to_owned());
    let new_example = RwSignal::new(String::new());

    let on_add = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let name = new_name.get_untracked().trim().to_owned();
        if name.is_empty() {
            return;
        }
        let Some(id) = interface_id() else { return };
        let added = ApiParameter {
            name,
            param_type: Some(new_type.get_untracked()),
            example_value: Some(new_example.get_untracked()).filter(|e| !e.is_empty()),
            ..ApiParameter::default()
        };
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            // Re-read the current list so a stale view cannot drop parameters.
            let mut all = api::get_parameters(api, id).await.unwrap_or_default();
            all.push(added);
            if api::save_parameters(api, id, &all).await.is_ok() {
                new_name.set(String::new());
                new_example.set(String::new());
                parameters.refetch();
                example.set(None);
            }
        });
        #[cfg(not(feature = "csr"))]
        let _ = (id, added);
    };

    view! {
        <div class="interface-form">
            <Suspense fallback=move || view! { <p>"Loading interface..."</p> }>
                {move || {
                    interface
                        .get()
                        .map(|found| match found {
                            Some(iface) => {
                                view! {
                                    <header class="interface-form__header">
                                        <h1>{iface.name}</h1>
                                        <p>
                                            <code>
                                                {format!(
                                                    "{} {}",
                                                    iface.method.unwrap_or_default(),
                                                    iface.path.unwrap_or_default(),
                                                )}
                                            </code>
                                        </p>
                                        <p>{iface.description.unwrap_or_default()}</p>
                                    </header>
                                }
                                    .into_any()
                            }
                            None => view! { <p>"Interface not found."</p> }.into_any(),
                        })
                }}
            </Suspense>

            <h2>"Parameters"</h2>
            <Suspense fallback=move || view! { <p>"Loading parameters..."</p> }>
                {move || {
                    parameters
                        .get()
                        .map(|list| {
                            let mut rows = Vec::new();
                            flatten(&list, 0, &mut rows);
                            view! {
                                <table class="interface-form__parameters">
                                    <thead>
                                        <tr>
                                            <th>"Name"</th>
                                            <th>"Type"</th>
                                            <th>"Required"</th>
                                            <th>"Example"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {rows
                                            .into_iter()
                                            .map(|row| {
                                                let indent = format!("{}{}", "  ".repeat(row.depth), row.name);
                                                view! {
                                                    <tr>
                                                        <td style="white-space: pre">{indent}</td>
                                                        <td>{row.param_type}</td>
                                                        <td>{if row.required { "yes" } else { "no" }}</td>
                                                        <td>{row.example}</td>
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

            <form class="interface-form__add" on:submit=on_add>
                <input
                    type="text"
                    placeholder="Parameter name"
                    prop:value=new_name
                    on:input=move |ev| new_name.set(event_target_value(&ev))
                />
                <select on:change=move |ev| new_type.set(event_target_value(&ev))>
                    <option value="string">"string"</option>
                    <option value="number">"number"</option>
                    <option value="boolean">"boolean"</option>
                    <option value="object">"object"</option>
                    <option value="array">"array"</option>
                </select>
                <input
                    type="text"
                    placeholder="Example value"
                    prop:value=new_example
                    on:input=move |ev| new_example.set(event_target_value(&ev))
                />
                <button type="submit" class="btn">"Add parameter"</button>
            </form>

            <h2>"JSON example"</h2>
            <button class="btn" on:click=on_example>"Generate"</button>
            <Show when=move || example.get().is_some()>
                <pre class="interface-form__example">{move || example.get().unwrap_or_default()}</pre>
            </Show>
        </div>
    }
}
