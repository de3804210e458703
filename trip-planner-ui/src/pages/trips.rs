//! Trip Listing Pages
//!
//! One browser for both listings: every trip of the user, or only the
//! favorites. Clicking a card swaps the grid for the trip's details.

use leptos::*;

use trip_planner::{apply_favorite, Trip, TripId, TripListKind};

use crate::api;
use crate::components::{Loading, TripCard, TripDetail};
use crate::state::use_global_state;

#[component]
pub fn TripBrowser(kind: TripListKind) -> impl IntoView {
    let state = use_global_state();

    let trips = create_rw_signal(Vec::<Trip>::new());
    let (loading, set_loading) = create_signal(true);
    let (selected, set_selected) = create_signal(None::<Trip>);
    let (updating, set_updating) = create_signal(None::<TripId>);

    // Fetch on mount
    create_effect(move |_| {
        spawn_local(async move {
            match state.user_id() {
                Ok(user_id) => match api::fetch_trips(kind, &user_id).await {
                    Ok(list) => trips.set(list),
                    Err(e) => {
                        web_sys::console::error_1(
                            &format!("An error occurred while fetching trips: {}", e).into(),
                        );
                    }
                },
                Err(_) => web_sys::console::error_1(&"User ID not found.".into()),
            }
            set_loading.set(false);
        });
    });

    // The flag is merged only after the server confirms it
    let on_toggle_favorite = move |(trip_id, favorite): (TripId, bool)| {
        set_updating.set(Some(trip_id));
        spawn_local(async move {
            match api::update_favorite(trip_id, favorite).await {
                Ok(()) => trips.update(|list| {
                    apply_favorite(list, trip_id, favorite);
                }),
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("An error occurred while updating favorite status: {}", e).into(),
                    );
                }
            }
            set_updating.set(None);
        });
    };

    view! {
        <div class="p-4">
            <h1 class="text-3xl font-bold mb-8 text-center text-primary-400">{kind.heading()}</h1>

            {move || {
                if loading.get() {
                    return view! { <Loading /> }.into_view();
                }

                if let Some(trip) = selected.get() {
                    return view! {
                        <TripDetail
                            trip=trip
                            back_label=kind.back_label()
                            on_back=move |_: ()| set_selected.set(None)
                        />
                    }
                    .into_view();
                }

                let visible = trips.get();
                if visible.is_empty() {
                    return view! {
                        <p class="text-center text-gray-400">{kind.empty_message()}</p>
                    }
                    .into_view();
                }

                view! {
                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                        {visible.into_iter().map(|trip| {
                            let id = trip.id;
                            view! {
                                <TripCard
                                    trip=trip
                                    updating=Signal::derive(move || updating.get() == Some(id))
                                    on_select=move |trip: Trip| set_selected.set(Some(trip))
                                    on_toggle_favorite=on_toggle_favorite
                                />
                            }
                        }).collect_view()}
                    </div>
                }
                .into_view()
            }}
        </div>
    }
}

#[component]
pub fn FavoriteTrips() -> impl IntoView {
    view! { <TripBrowser kind=TripListKind::Favorites /> }
}
