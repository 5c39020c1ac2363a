//! Loading Component
//!
//! Skeleton placeholder shown while the task list loads.

use leptos::*;

/// Skeleton loader for list items
#[component]
pub fn ListSkeleton(
    #[prop(default = 3)]
    count: usize,
) -> impl IntoView {
    view! {
        <div class="space-y-4 animate-pulse">
            {(0..count).map(|_| view! {
                <div class="bg-gray-200 rounded-lg h-16" />
            }).collect_view()}
        </div>
    }
}
