//! Root application component: contexts, routing, and the navigation guard.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::components::{A, Outlet, ParentRoute, Route, Router, Routes};
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::{NavigateOptions, ParamSegment, StaticSegment};

use crate::components::notice_stack::NoticeStack;
use crate::net::http::ApiClient;
use crate::pages::home::HomePage;
use crate::pages::interface_form::InterfaceFormPage;
use crate::pages::interfaces::InterfaceListPage;
use crate::pages::login::LoginPage;
use crate::pages::videos::VideoListPage;
use crate::routes::{self, GuardDecision};
use crate::state::session::SessionState;
use crate::state::ui::UiState;
use crate::util::storage::BrowserStore;

/// Root application component.
///
/// Provides the session and UI state contexts (the session is loaded from
/// durable storage once at startup) and sets up client-side routing behind
/// the navigation guard.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::load(&BrowserStore));
    let ui = RwSignal::new(UiState::default());

    provide_context(session);
    provide_context(ui);
    provide_context(ApiClient::new(session, ui));

    view! {
        <Title text="Catalog Admin"/>
        <NoticeStack/>

        <Router>
            <NavigationGuard>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <ParentRoute path=StaticSegment("") view=Layout>
                        <Route path=StaticSegment("") view=HomePage/>
                        <Route path=StaticSegment("videos") view=VideoListPage/>
                        <Route path=StaticSegment("interfaces") view=InterfaceListPage/>
                        <Route
                            path=(StaticSegment("interfaces"), ParamSegment("id"))
                            view=InterfaceFormPage
                        />
                    </ParentRoute>
                </Routes>
            </NavigationGuard>
        </Router>
    }
}

/// Consults the route table before every transition and redirects:
/// protected route without a session → login; login with a session → home.
/// The routed view only renders once the transition is allowed, so a
/// protected page never mounts (or fires its fetches) for a visitor who
/// is about to be bounced.
#[component]
fn NavigationGuard(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let location = use_location();
    let navigate = use_navigate();

    let decision = Memo::new(move |_| {
        let path = location.pathname.get();
        let authenticated = session.with(SessionState::is_authenticated);
        routes::check_transition(&path, authenticated)
    });

    Effect::new(move || match decision.get() {
        GuardDecision::Allow => {}
        GuardDecision::RedirectToLogin => {
            navigate(routes::LOGIN_PATH, NavigateOptions::default());
        }
        GuardDecision::RedirectToHome => {
            navigate(routes::HOME_PATH, NavigateOptions::default());
        }
    });

    view! {
        <Show when=move || decision.get() == GuardDecision::Allow fallback=|| ()>
            {children()}
        </Show>
    }
}

/// Authenticated shell: navigation bar, logout, and the routed outlet.
#[component]
fn Layout() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let on_logout = move |_| {
        session.update(|s| s.logout(&BrowserStore));
    };

    view! {
        <div class="layout">
            <nav class="layout__nav">
                <A href="/">"Home"</A>
                <A href="/videos">"Videos"</A>
                <A href="/interfaces">"Interfaces"</A>
                <button class="layout__logout" on:click=on_logout>
                    "Log out"
                </button>
            </nav>
            <main class="layout__content">
                <Outlet/>
            </main>
        </div>
    }
}
