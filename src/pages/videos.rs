//! Video list page: filter by category, create (with file upload), delete.

use leptos::prelude::*;

use crate::net::api;
use crate::net::http::ApiClient;
use crate::net::types::Video;

/// Video list page.
#[component]
pub fn VideoListPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();

    let filter = RwSignal::new(None::<i64>);
    let videos = LocalResource::new(move || {
        let category_id = filter.get();
        async move { api::get_videos(api, category_id).await.unwrap_or_default() }
    });
    let categories = LocalResource::new(move || async move {
        api::get_categories(api).await.unwrap_or_default()
    });

    // Create form state. The file is uploaded as soon as it is picked;
    // the returned URL goes into the new video record.
    let author = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let video_url = RwSignal::new(String::new());
    let uploading = RwSignal::new(false);

    let on_filter = move |ev: leptos::ev::Event| {
        filter.set(event_target_value(&ev).parse().ok());
    };

    #[cfg(feature = "csr")]
    let on_file = move |ev: leptos::ev::Event| {
        use wasm_bindgen::JsCast;
        let input = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok());
        let Some(file) = input.and_then(|i| i.files()).and_then(|list| list.get(0)) else {
            return;
        };
        uploading.set(true);
        leptos::task::spawn_local(async move {
            if let Ok(result) = api::upload_file(api, &file).await {
                video_url.set(result.url);
            }
            uploading.set(false);
        });
    };
    #[cfg(not(feature = "csr"))]
    let on_file = move |_ev: leptos::ev::Event| {};

    let on_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let new_author = author.get_untracked().trim().to_owned();
        if new_author.is_empty() || uploading.get_untracked() {
            return;
        }
        let draft = Video {
            author: new_author,
            description: Some(description.get_untracked()),
            video_url: Some(video_url.get_untracked()).filter(|u| !u.is_empty()),
            category_id: filter.get_untracked(),
            ..Video::default()
        };
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            if api::create_video(api, &draft).await.is_ok() {
                author.set(String::new());
                description.set(String::new());
                video_url.set(String::new());
                videos.refetch();
            }
        });
        #[cfg(not(feature = "csr"))]
        let _ = draft;
    };

    let on_delete = move |id: i64| {
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            if api::delete_video(api, id).await.is_ok() {
                videos.refetch();
            }
        });
        #[cfg(not(feature = "csr"))]
        let _ = id;
    };

    view! {
        <div class="video-page">
            <header class="video-page__header">
                <h1>"Videos"</h1>
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

            <form class="video-page__create" on:submit=on_create>
                <input
                    type="text"
                    placeholder="Author"
                    prop:value=author
                    on:input=move |ev| author.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Description"
                    prop:value=description
                    on:input=move |ev| description.set(event_target_value(&ev))
                />
                <input type="file" on:change=on_file/>
                <button type="submit" class="btn btn--primary" disabled=move || uploading.get()>
                    {move || if uploading.get() { "Uploading..." } else { "Add video" }}
                </button>
            </form>

            <Suspense fallback=move || view! { <p>"Loading videos..."</p> }>
                {move || {
                    videos
                        .get()
                        .map(|list| {
                            view! {
                                <table class="video-page__table">
                                    <thead>
                                        <tr>
                                            <th>"Author"</th>
                                            <th>"Description"</th>
                                            <th>"Published"</th>
                                            <th></th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {list
                                            .into_iter()
                                            .map(|v| {
                                                let id = v.id.unwrap_or_default();
                                                view! {
                                                    <tr>
                                                        <td>{v.author}</td>
                                                        <td>{v.description.unwrap_or_default()}</td>
                                                        <td>{v.publish_time.unwrap_or_default()}</td>
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
