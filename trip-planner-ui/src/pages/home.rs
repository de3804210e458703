//! Home Page
//!
//! The trip list for a logged-in user, a short introduction otherwise.

use leptos::*;
use leptos_router::*;

use trip_planner::TripListKind;

use super::trips::TripBrowser;
use crate::state::use_global_state;

#[component]
pub fn Home() -> impl IntoView {
    let state = use_global_state();

    move || {
        if state.is_logged_in() {
            view! { <TripBrowser kind=TripListKind::All /> }.into_view()
        } else {
            view! { <Landing /> }.into_view()
        }
    }
}

#[component]
fn Landing() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"✈️"</div>
            <h1 class="text-4xl font-bold mb-2">"Plan your next trip"</h1>
            <p class="text-gray-400 mb-6">
                "Tell us where, when and what you enjoy. We put together a day-by-day itinerary."
            </p>
            <div class="flex space-x-4">
                <A
                    href="/login"
                    class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                >
                    "Log In"
                </A>
                <A
                    href="/signup"
                    class="px-6 py-3 bg-gray-700 hover:bg-gray-600 rounded-lg font-medium transition-colors"
                >
                    "Sign Up"
                </A>
            </div>
        </div>
    }
}
