//! Panel Component
//!
//! The card each view renders into.

use leptos::*;

/// Titled card
#[component]
pub fn Panel(
    title: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="p-4 shadow rounded-xl bg-white">
            <h2 class="text-xl font-bold mb-2">{title}</h2>
            {children()}
        </div>
    }
}

/// Fixed-height monospaced scroll box used by the log and rule views
#[component]
pub fn ScrollBox(children: Children) -> impl IntoView {
    view! {
        <div class="text-sm font-mono bg-gray-100 p-2 rounded max-h-[300px] overflow-auto">
            {children()}
        </div>
    }
}
