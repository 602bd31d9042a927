//! Root application component with routing, session context, and the
//! navigation guard.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    NavigateOptions, StaticSegment,
    components::{A, Route, Router, Routes},
    hooks::{use_location, use_navigate},
};

use crate::pages::{
    dashboard::DashboardPage, login::LoginPage, models::ModelsPage, playground::PlaygroundPage,
    users::UsersPage,
};
use crate::state::session::Session;
use crate::util::guard::{self, LOGIN_PATH};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session context and sets up client-side routing. The session
/// is built here for the current execution context: empty during server
/// rendering, eagerly restored from sessionStorage in the browser.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = Session::new();
    provide_context(session);

    view! {
        <Stylesheet id="leptos" href="/pkg/conduit-admin.css"/>
        <Title text="Conduit Admin - AI Gateway Dashboard"/>

        <Router>
            <RouteGuard/>
            <Header/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("") view=DashboardPage/>
                    <Route path=StaticSegment("users") view=UsersPage/>
                    <Route path=StaticSegment("models") view=ModelsPage/>
                    <Route path=StaticSegment("playground") view=PlaygroundPage/>
                </Routes>
            </main>
        </Router>
    }
}

/// Installs the navigation guard once inside the router context.
#[component]
fn RouteGuard() -> impl IntoView {
    let session = expect_context::<Session>();
    let location = use_location();
    let navigate = use_navigate();
    guard::install_route_guard(session, location.pathname, navigate);
}

/// Top navigation with the signed-in identity and logout control.
#[component]
fn Header() -> impl IntoView {
    let session = expect_context::<Session>();
    let navigate = use_navigate();

    let username = move || {
        session
            .state()
            .with(|state| {
                state
                    .current_user
                    .as_ref()
                    .and_then(|user| user.get("username"))
                    .and_then(serde_json::Value::as_str)
                    .map(str::to_owned)
            })
            .unwrap_or_default()
    };

    let on_logout = Callback::new(move |()| {
        session.clear_auth();
        navigate(LOGIN_PATH, NavigateOptions::default());
    });

    view! {
        <Show when=move || session.state().get().is_authenticated()>
            <header class="app-header">
                <span class="app-header__brand">"Conduit"</span>
                <nav class="app-header__nav">
                    <A href="/">"Usage"</A>
                    <A href="/users">"Users"</A>
                    <A href="/models">"Models"</A>
                    <A href="/playground">"Playground"</A>
                </nav>
                <div class="app-header__session">
                    <span class="app-header__user">{username}</span>
                    <button class="btn" on:click=move |_| on_logout.run(())>
                        "Sign Out"
                    </button>
                </div>
            </header>
        </Show>
    }
}
