//! Trip Detail Page
//!
//! Shows the trip carried in navigation state by the create page. Without
//! it (a reload or a pasted link) the user's trips are fetched and searched
//! by id.

use leptos::*;
use leptos_router::*;

use trip_planner::trips::find_trip;
use trip_planner::{AppRoute, Trip, TripId, TripListKind};

use crate::api;
use crate::components::{Loading, TripDetail};
use crate::state::use_global_state;

/// Decode a trip stored as JSON in history state
fn carried_trip(state: &State) -> Option<Trip> {
    let json = state.0.as_ref()?.as_string()?;
    serde_json::from_str(&json).ok()
}

#[component]
pub fn TripPage() -> impl IntoView {
    let state = use_global_state();
    let params = use_params_map();
    let location = use_location();
    let navigate = use_navigate();

    let trip_id = create_memo(move |_| {
        params.with(|p| p.get("id").and_then(|id| id.parse::<TripId>().ok()))
    });

    let (trip, set_trip) = create_signal(None::<Trip>);
    let (loading, set_loading) = create_signal(true);

    create_effect(move |_| {
        let Some(id) = trip_id.get() else {
            set_trip.set(None);
            set_loading.set(false);
            return;
        };

        let carried = location
            .state
            .with_untracked(carried_trip)
            .filter(|t| t.id == id);
        if let Some(carried) = carried {
            set_trip.set(Some(carried));
            set_loading.set(false);
            return;
        }

        set_loading.set(true);
        spawn_local(async move {
            let found = match state.user_id() {
                Ok(user_id) => match api::fetch_trips(TripListKind::All, &user_id).await {
                    Ok(trips) => find_trip(&trips, id).cloned(),
                    Err(e) => {
                        web_sys::console::error_1(
                            &format!("An error occurred while fetching trips: {}", e).into(),
                        );
                        None
                    }
                },
                Err(_) => None,
            };
            set_trip.set(found);
            set_loading.set(false);
        });
    });

    let on_back = move |_: ()| navigate(&AppRoute::Home.path(), Default::default());

    view! {
        <div class="p-4">
            {move || {
                if loading.get() {
                    return view! { <Loading /> }.into_view();
                }

                match trip.get() {
                    Some(trip) => view! {
                        <TripDetail
                            trip=trip
                            back_label=TripListKind::All.back_label()
                            on_back=on_back.clone()
                        />
                    }
                    .into_view(),
                    None => view! {
                        <p class="text-center text-gray-400">"Trip not found."</p>
                    }
                    .into_view(),
                }
            }}
        </div>
    }
}
