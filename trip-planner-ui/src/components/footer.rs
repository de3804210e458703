//! Footer Component

use chrono::Datelike;
use leptos::*;

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Local::now().year();

    view! {
        <div class="bg-gray-800 border-t border-gray-700 py-4 px-4">
            <div class="container mx-auto text-center text-sm text-gray-400">
                {format!("© {} Trip Planner. Plan smarter, travel better.", year)}
            </div>
        </div>
    }
}
