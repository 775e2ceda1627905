//! Floating stack of user-visible notifications.

use leptos::prelude::*;

use crate::state::ui::UiState;

/// Renders every pending notice with a dismiss button. Request failures
/// and session expiry push entries here through the UI state context.
#[component]
pub fn NoticeStack() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <div class="notice-stack">
            <For
                each=move || ui.get().notices
                key=|notice| notice.id
                children=move |notice| {
                    let id = notice.id;
                    view! {
                        <div class="notice-stack__item" role="alert">
                            <span class="notice-stack__message">{notice.message}</span>
                            <button
                                class="notice-stack__dismiss"
                                on:click=move |_| ui.update(|u| u.dismiss(id))
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
