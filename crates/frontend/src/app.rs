use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

use crate::layout::navbar::Navbar;
use crate::logs::ui::dashboard::DashboardPage;
use crate::system::auth::store::{use_session, SessionStore};
use crate::system::pages::login::LoginPage;

#[component]
pub fn App() -> impl IntoView {
    // Session state is restored from local storage before the first render,
    // so a reloaded tab stays signed in.
    provide_context(SessionStore::init());

    view! {
        <Router>
            // Unmatched paths land on the dashboard; the gate bounces
            // signed-out viewers on to the login page from there.
            <Routes fallback=|| view! { <Redirect path="/dashboard"/> }>
                <Route path=path!("/login") view=LoginPage/>
                <Route path=path!("/dashboard") view=DashboardGate/>
                <Route path=path!("/") view=|| view! { <Redirect path="/dashboard"/> }/>
            </Routes>
        </Router>
    }
}

/// Renders the dashboard only while a session is live. Signing out flips
/// the guard and falls back to the login screen.
#[component]
fn DashboardGate() -> impl IntoView {
    let session = use_session();

    view! {
        <Show
            when=move || session.is_authenticated()
            fallback=|| view! { <Redirect path="/login"/> }
        >
            <Navbar/>
            <DashboardPage/>
        </Show>
    }
}
