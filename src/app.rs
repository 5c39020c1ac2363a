//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::components::RequireAuth;
use crate::pages::{Dashboard, Login, Register};
use crate::state::provide_global_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    view! {
        <Router>
            <main class="min-h-screen">
                <Routes>
                    // Public routes
                    <Route path="/register" view=Register />
                    <Route path="/login" view=Login />

                    // Protected routes
                    <Route
                        path="/dashboard"
                        view=|| view! {
                            <RequireAuth>
                                <Dashboard />
                            </RequireAuth>
                        }
                    />

                    // Default route lands on the dashboard
                    <Route path="/" view=|| view! { <Redirect path="/dashboard" /> } />
                    <Route path="/*any" view=NotFound />
                </Routes>
            </main>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-screen text-center">
            <h1 class="text-3xl font-bold mb-2 text-gray-800">"Page Not Found"</h1>
            <p class="text-gray-600 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/dashboard"
                class="px-6 py-3 bg-blue-500 hover:bg-blue-600 text-white rounded-lg
                       font-medium transition-colors"
            >
                "Go to Dashboard"
            </A>
        </div>
    }
}
