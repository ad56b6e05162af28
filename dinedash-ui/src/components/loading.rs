//! Loading Component
//!
//! Skeleton states shown while a section switch is pending.

use leptos::*;

/// Skeleton loader for cards
#[component]
pub fn CardSkeleton() -> impl IntoView {
    view! {
        <div class="bg-[var(--paper)] rounded-xl p-5 animate-pulse">
            <div class="h-4 bg-gray-200 dark:bg-gray-700 rounded w-1/3 mb-4" />
            <div class="h-8 bg-gray-200 dark:bg-gray-700 rounded w-1/2 mb-2" />
            <div class="h-4 bg-gray-200 dark:bg-gray-700 rounded w-2/3" />
        </div>
    }
}

/// Whole-page placeholder: a row of cards over a large panel
#[component]
pub fn PageSkeleton() -> impl IntoView {
    view! {
        <div class="space-y-6">
            <div class="grid grid-cols-1 md:grid-cols-2 xl:grid-cols-4 gap-6">
                {(0..4).map(|_| view! { <CardSkeleton /> }).collect_view()}
            </div>
            <div class="bg-[var(--paper)] rounded-xl p-6 animate-pulse">
                <div class="h-6 bg-gray-200 dark:bg-gray-700 rounded w-1/4 mb-4" />
                <div class="h-64 bg-gray-200 dark:bg-gray-700 rounded" />
            </div>
        </div>
    }
}
