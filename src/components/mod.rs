//! UI Components
//!
//! Reusable Leptos components shared across pages.

pub mod guard;
pub mod loading;

pub use guard::RequireAuth;
pub use loading::ListSkeleton;
