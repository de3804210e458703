//! Trip Card Component
//!
//! Summary of one trip with a favorite toggle.

use leptos::*;

use trip_planner::format::{days, money};
use trip_planner::{Trip, TripId};

use super::loading::InlineLoading;

/// Clickable trip summary
///
/// `on_toggle_favorite` receives the trip id and the requested new flag.
/// The heart turns into a spinner while `updating` is set.
#[component]
pub fn TripCard(
    trip: Trip,
    #[prop(into)]
    updating: Signal<bool>,
    #[prop(into)]
    on_select: Callback<Trip>,
    #[prop(into)]
    on_toggle_favorite: Callback<(TripId, bool)>,
) -> impl IntoView {
    let id = trip.id;
    let favorite = trip.favorite;
    let heart_class = if favorite {
        "absolute top-2 right-2 text-2xl transition-colors text-red-500 hover:text-red-400"
    } else {
        "absolute top-2 right-2 text-2xl transition-colors text-gray-500 hover:text-red-500"
    };

    let heart_title = if favorite {
        "Remove from favorites"
    } else {
        "Add to favorites"
    };

    let title = trip.title();
    let start_date = trip.start_date.clone();
    let budget = money(trip.budget);
    let interests = trip.interests.join(", ");
    let duration = days(trip.duration);

    view! {
        <div
            class="relative bg-gray-800 border border-gray-700 rounded-lg p-6 shadow-lg cursor-pointer
                   hover:border-primary-500 transition-colors"
            on:click=move |_| on_select.call(trip.clone())
        >
            <h2 class="text-xl font-bold mb-4 text-primary-400">"📍 " {title}</h2>
            <p class="mb-2">"📅 " {start_date}</p>
            <p class="mb-2">"💰 " {budget}</p>
            <p class="mb-2">"🏷️ " {interests}</p>
            <p>"⏱️ " {duration}</p>

            <button
                type="button"
                class=heart_class
                title=heart_title
                disabled=move || updating.get()
                on:click=move |ev: ev::MouseEvent| {
                    ev.stop_propagation();
                    on_toggle_favorite.call((id, !favorite));
                }
            >
                {move || if updating.get() {
                    view! { <InlineLoading /> }.into_view()
                } else {
                    "♥".into_view()
                }}
            </button>
        </div>
    }
}
