use leptos::prelude::*;
use thaw::*;

use crate::shared::icons::icon;
use crate::system::auth::store::use_session;

#[component]
pub fn Navbar() -> impl IntoView {
    let session = use_session();

    let display_name = Signal::derive(move || {
        session
            .admin()
            .map(|admin| admin.display_name().to_string())
            .unwrap_or_default()
    });

    let on_sign_out = move |_| session.sign_out();

    view! {
        <header class="navbar">
            <div class="navbar__brand">
                {icon("shield")}
                <span class="navbar__title">"LogSentinel"</span>
                <span class="navbar__subtitle">"Anomaly monitoring"</span>
            </div>
            <div class="navbar__session">
                <span class="navbar__user">{move || display_name.get()}</span>
                <Button appearance=ButtonAppearance::Subtle on_click=on_sign_out>
                    "Sign out"
                </Button>
            </div>
        </header>
    }
}
