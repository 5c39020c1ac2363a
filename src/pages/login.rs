//! Login Page
//!
//! Credential form that exchanges email/password for a session token.

use leptos::*;
use leptos_router::{use_navigate, A};

use crate::api;
use crate::state::session;

/// Login page component
#[component]
pub fn Login() -> impl IntoView {
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (error, set_error) = create_signal(String::new());
    let (loading, set_loading) = create_signal(false);

    let navigate = use_navigate();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let email = email.get();
        let password = password.get();

        set_loading.set(true);
        set_error.set(String::new());

        let navigate = navigate.clone();
        spawn_local(async move {
            match api::login(&email, &password).await {
                Ok(token) => {
                    session::store_token(&token);
                    navigate("/dashboard", Default::default());
                }
                Err(e) => {
                    set_error.set(e);
                }
            }
            set_loading.set(false);
        });
    };

    view! {
        <div class="flex items-center justify-center min-h-screen bg-gradient-to-r from-blue-500 to-purple-500">
            <form
                on:submit=on_submit
                class="w-full max-w-md bg-white p-8 rounded-lg shadow-lg"
            >
                <h1 class="text-3xl font-bold text-center mb-6 text-gray-800">"Login"</h1>

                {move || {
                    let message = error.get();
                    (!message.is_empty()).then(|| view! {
                        <p class="text-red-500 text-center mb-4">{message}</p>
                    })
                }}

                <div class="mb-4">
                    <input
                        type="email"
                        placeholder="Email"
                        required
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                        class="w-full px-4 py-2 border border-gray-300 rounded-lg
                               focus:outline-none focus:ring-2 focus:ring-blue-500"
                    />
                </div>
                <div class="mb-6">
                    <input
                        type="password"
                        placeholder="Password"
                        required
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                        class="w-full px-4 py-2 border border-gray-300 rounded-lg
                               focus:outline-none focus:ring-2 focus:ring-blue-500"
                    />
                </div>

                <button
                    type="submit"
                    disabled=move || loading.get()
                    class="w-full py-2 text-white font-bold rounded-lg
                           bg-gradient-to-r from-blue-500 to-purple-500
                           hover:from-blue-600 hover:to-purple-600
                           disabled:bg-gray-400 disabled:cursor-not-allowed"
                >
                    {move || if loading.get() { "Logging in..." } else { "Login" }}
                </button>

                <p class="text-center mt-4 text-gray-600">
                    "Don't have an account? "
                    <A href="/register" class="text-blue-500 hover:underline">"Register"</A>
                </p>

                <DemoCredentials />
            </form>
        </div>
    }
}

/// Demo account hint shown under the form
#[component]
fn DemoCredentials() -> impl IntoView {
    view! {
        <div class="mt-6 bg-gray-100 p-4 rounded-lg">
            <h2 class="text-lg font-semibold text-gray-800">"Demo Credentials"</h2>
            <p class="text-sm text-gray-600">"Use the following credentials to log in:"</p>
            <ul class="text-sm text-gray-600 mt-2">
                <li><strong>"Email: "</strong>"testuser@example.com"</li>
                <li><strong>"Password: "</strong>"password123"</li>
            </ul>
        </div>
    }
}
