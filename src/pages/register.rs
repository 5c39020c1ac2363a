//! Register Page
//!
//! Account creation form. Fields are validated locally before submission; a
//! validation failure blocks the request entirely.

use leptos::*;
use leptos_router::A;

use crate::api;

/// Smallest password length the form accepts
const MIN_PASSWORD_LEN: usize = 6;

/// Check the form fields before submission, returning the first failure
fn validate(username: &str, email: &str, password: &str) -> Result<(), String> {
    if username.trim().is_empty() {
        return Err("Username is required".to_string());
    }
    if !email.contains('@') {
        return Err("Invalid email format".to_string());
    }
    if password.len() < MIN_PASSWORD_LEN {
        return Err(format!(
            "Password must be at least {} characters long",
            MIN_PASSWORD_LEN
        ));
    }
    Ok(())
}

/// Register page component
#[component]
pub fn Register() -> impl IntoView {
    let (username, set_username) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (error, set_error) = create_signal(String::new());
    let (success, set_success) = create_signal(String::new());
    let (loading, set_loading) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let username = username.get();
        let email = email.get();
        let password = password.get();

        // A validation failure never reaches the network
        if let Err(message) = validate(&username, &email, &password) {
            set_error.set(message);
            return;
        }

        set_loading.set(true);
        set_error.set(String::new());
        set_success.set(String::new());

        spawn_local(async move {
            match api::register(&username, &email, &password).await {
                Ok(message) => {
                    set_success.set(message);
                }
                Err(e) => {
                    set_error.set(e);
                }
            }
            set_loading.set(false);
        });
    };

    view! {
        <div class="flex items-center justify-center min-h-screen bg-gradient-to-r from-green-400 to-blue-500">
            <form
                on:submit=on_submit
                class="w-full max-w-md bg-white p-8 rounded-lg shadow-lg"
            >
                <h1 class="text-3xl font-bold text-center mb-6 text-gray-800">"Register"</h1>

                {move || {
                    let message = error.get();
                    (!message.is_empty()).then(|| view! {
                        <p class="text-red-500 text-center mb-4">{message}</p>
                    })
                }}
                {move || {
                    let message = success.get();
                    (!message.is_empty()).then(|| view! {
                        <p class="text-green-500 text-center mb-4">{message}</p>
                    })
                }}

                <div class="mb-4">
                    <input
                        type="text"
                        placeholder="Username"
                        required
                        prop:value=move || username.get()
                        on:input=move |ev| set_username.set(event_target_value(&ev))
                        class="w-full px-4 py-2 border border-gray-300 rounded-lg
                               focus:outline-none focus:ring-2 focus:ring-green-500"
                    />
                </div>
                <div class="mb-4">
                    <input
                        type="email"
                        placeholder="Email"
                        required
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                        class="w-full px-4 py-2 border border-gray-300 rounded-lg
                               focus:outline-none focus:ring-2 focus:ring-green-500"
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
                               focus:outline-none focus:ring-2 focus:ring-green-500"
                    />
                </div>

                <button
                    type="submit"
                    disabled=move || loading.get()
                    class="w-full py-2 text-white font-bold rounded-lg
                           bg-gradient-to-r from-green-500 to-blue-500
                           hover:from-green-600 hover:to-blue-600
                           disabled:bg-gray-400 disabled:cursor-not-allowed"
                >
                    {move || if loading.get() { "Registering..." } else { "Register" }}
                </button>

                <p class="text-center mt-4 text-gray-600">
                    "Already have an account? "
                    <A href="/login" class="text-green-500 hover:underline">"Login"</A>
                </p>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_password_is_rejected() {
        let err = validate("alice", "alice@example.com", "12345").unwrap_err();
        assert_eq!(err, "Password must be at least 6 characters long");
    }

    #[test]
    fn six_character_password_passes() {
        assert!(validate("alice", "alice@example.com", "123456").is_ok());
    }

    #[test]
    fn email_without_at_sign_is_rejected() {
        let err = validate("alice", "alice.example.com", "password123").unwrap_err();
        assert_eq!(err, "Invalid email format");
    }

    #[test]
    fn blank_username_is_rejected() {
        let err = validate("   ", "alice@example.com", "password123").unwrap_err();
        assert_eq!(err, "Username is required");
    }

    #[test]
    fn well_formed_input_passes() {
        assert!(validate("alice", "alice@example.com", "password123").is_ok());
    }
}
