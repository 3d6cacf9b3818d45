use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::system::auth::store::use_session;

const DEMO_EMAIL: &str = "demo@example.com";
const DEMO_PASSWORD: &str = "password123";

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    // Already signed in (or just signed in): leave the login screen.
    let navigate = use_navigate();
    Effect::new(move |_| {
        if session.is_authenticated() {
            navigate("/dashboard", Default::default());
        }
    });

    let submit = move |email_val: String, password_val: String| {
        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            if let Err(e) = session.sign_in(email_val, password_val).await {
                set_error_message.set(Some(e.to_string()));
            }
            set_is_loading.set(false);
        });
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        submit(email.get_untracked(), password.get_untracked());
    };

    let on_demo_click = move |_| {
        set_email.set(DEMO_EMAIL.to_string());
        set_password.set(DEMO_PASSWORD.to_string());
        submit(DEMO_EMAIL.to_string(), DEMO_PASSWORD.to_string());
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1 class="login-box__title">"LogSentinel"</h1>
                <p class="login-box__subtitle">"System log anomaly monitoring"</p>

                <Show when=move || error_message.get().is_some()>
                    <div class="alert alert--error">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="login-email">"Email"</label>
                        <input
                            id="login-email"
                            type="email"
                            placeholder="admin@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            required
                        />
                    </div>
                    <div class="form-group">
                        <label for="login-password">"Password"</label>
                        <input
                            id="login-password"
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                        />
                    </div>
                    <button
                        class="button button--primary login-box__submit"
                        type="submit"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>

                <button
                    class="button button--subtle login-box__demo"
                    on:click=on_demo_click
                    disabled=move || is_loading.get()
                >
                    "Use demo credentials"
                </button>
            </div>
        </div>
    }
}
