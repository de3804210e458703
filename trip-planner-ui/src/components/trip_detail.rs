//! Trip Detail Component
//!
//! Full view of a trip: summary grid followed by each generated itinerary.

use leptos::*;

use trip_planner::format::{days, money};
use trip_planner::{Activity, DayPlan, Itinerary, Trip};

#[component]
pub fn TripDetail(
    trip: Trip,
    back_label: &'static str,
    #[prop(into)]
    on_back: Callback<()>,
) -> impl IntoView {
    let title = trip.title();
    let Trip {
        budget,
        duration,
        start_date,
        interests,
        itineraries,
        ..
    } = trip;

    view! {
        <div class="bg-gray-800 border border-gray-700 rounded-lg p-6 shadow-lg">
            <button
                type="button"
                class="bg-primary-600 hover:bg-primary-700 text-white px-4 py-2 rounded-lg mb-6
                       transition-colors flex items-center"
                on:click=move |_| on_back.call(())
            >
                "← " {back_label}
            </button>

            <h2 class="text-3xl font-bold mb-6 text-primary-400">"📍 " {title}</h2>

            <div class="grid grid-cols-1 md:grid-cols-2 gap-4 mb-6">
                <p>"💰 Budget: " {money(budget)}</p>
                <p>"⏱️ Duration: " {days(duration)}</p>
                <p>"📅 Start Date: " {start_date}</p>
                <p>"🏷️ Interests: " {interests.join(", ")}</p>
            </div>

            {itineraries
                .into_iter()
                .map(|itinerary| view! { <ItinerarySection itinerary=itinerary /> })
                .collect_view()}
        </div>
    }
}

#[component]
fn ItinerarySection(itinerary: Itinerary) -> impl IntoView {
    let Itinerary {
        destination,
        budget,
        duration,
        itinerary: day_plans,
    } = itinerary;

    view! {
        <div class="mb-8 bg-gray-900 p-6 rounded-lg">
            <h3 class="text-2xl font-bold mb-4 text-primary-400">
                {format!("Itinerary for {}", destination)}
            </h3>
            <p class="mb-2">"💰 Budget: " {money(budget)}</p>
            <p class="mb-4">"⏱️ Duration: " {days(duration)}</p>

            {day_plans
                .into_iter()
                .map(|day| view! { <DaySection day=day /> })
                .collect_view()}
        </div>
    }
}

#[component]
fn DaySection(day: DayPlan) -> impl IntoView {
    view! {
        <div class="mb-4">
            <p class="font-bold text-lg mb-2">{format!("Day {}", day.day)}</p>
            <ul class="space-y-4">
                {day.activities
                    .into_iter()
                    .map(|activity| view! { <ActivityItem activity=activity /> })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[component]
fn ActivityItem(activity: Activity) -> impl IntoView {
    view! {
        <li class="bg-gray-800 p-4 rounded-md shadow">
            <p class="font-semibold text-primary-400">{activity.name}</p>
            <p class="text-sm text-gray-400 mb-2">{format!("Cost: {}", money(activity.cost))}</p>
            <p class="text-sm">{activity.description}</p>
        </li>
    }
}
