//! Session Store
//!
//! The bearer token issued at login, persisted in browser local storage.
//! Presence of the token is the only authorization signal checked on the
//! client; the token itself is never inspected, refreshed, or expired.

/// Local storage key holding the session token
const TOKEN_KEY: &str = "taskdeck_token";

fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Read the current session token, if any
pub fn token() -> Option<String> {
    storage().and_then(|s| s.get_item(TOKEN_KEY).ok().flatten())
}

/// Persist the token returned by a successful login
pub fn store_token(token: &str) {
    if let Some(storage) = storage() {
        let _ = storage.set_item(TOKEN_KEY, token);
    }
}

/// Remove the token on sign-out
pub fn clear_token() {
    if let Some(storage) = storage() {
        let _ = storage.remove_item(TOKEN_KEY);
    }
}

/// True iff a token is present
pub fn is_authenticated() -> bool {
    token().is_some()
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn token_round_trip() {
        clear_token();
        assert!(!is_authenticated());

        store_token("abc");
        assert_eq!(token().as_deref(), Some("abc"));
        assert!(is_authenticated());

        clear_token();
        assert!(token().is_none());
        assert!(!is_authenticated());
    }
}
