//! Create Trip Page
//!
//! Trip form. A created trip travels to its detail page in the
//! navigation state.

use gloo_timers::callback::Timeout;
use leptos::*;
use leptos_router::*;
use wasm_bindgen::JsValue;

use trip_planner::{AppRoute, TripForm};

use crate::api;
use crate::components::{InlineLoading, InputField};
use crate::state::use_global_state;

/// Delay between the success toast and leaving the page
const NAVIGATE_DELAY_MS: u32 = 1000;

#[component]
pub fn CreateTrip() -> impl IntoView {
    let state = use_global_state();
    let navigate = use_navigate();

    let form = create_rw_signal(TripForm::default());
    let (creating, set_creating) = create_signal(false);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let user_id = match state.user_id() {
            Ok(id) => id,
            Err(_) => {
                navigate(&AppRoute::Login.path(), Default::default());
                return;
            }
        };
        let new_trip = match form.with_untracked(|f| f.to_new_trip(&user_id)) {
            Ok(trip) => trip,
            Err(e) => {
                state.show_error(&e.to_string());
                return;
            }
        };

        set_creating.set(true);

        let navigate = navigate.clone();
        spawn_local(async move {
            match api::create_trip(&new_trip).await {
                Ok(trip) => {
                    form.update(TripForm::clear);
                    state.show_success("Trip created successfully!");

                    let path = AppRoute::TripDetail(trip.id).path();
                    let carried = serde_json::to_string(&trip).ok().map(JsValue::from);
                    Timeout::new(NAVIGATE_DELAY_MS, move || {
                        navigate(
                            &path,
                            NavigateOptions {
                                state: State(carried),
                                ..Default::default()
                            },
                        );
                    })
                    .forget();
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Error creating trip: {}", e).into());
                    state.show_error(&e.user_message("Error creating trip. Please try again."));
                }
            }
            set_creating.set(false);
        });
    };

    view! {
        <div class="max-w-2xl mx-auto">
            <h1 class="text-3xl font-bold mb-8 text-center text-primary-400">"Create a New Trip"</h1>

            <form on:submit=on_submit class="space-y-6">
                <InputField
                    label="Destination"
                    placeholder="e.g., Delhi, Noida"
                    value=Signal::derive(move || form.with(|f| f.destination.clone()))
                    on_input=move |v: String| form.update(|f| f.destination = v)
                />
                <InputField
                    label="Budget (₹)"
                    input_type="number"
                    placeholder="e.g., 10000"
                    value=Signal::derive(move || form.with(|f| f.budget.clone()))
                    on_input=move |v: String| form.update(|f| f.budget = v)
                />
                <InputField
                    label="Start Date"
                    input_type="date"
                    value=Signal::derive(move || form.with(|f| f.start_date.clone()))
                    on_input=move |v: String| form.update(|f| f.start_date = v)
                />
                <InputField
                    label="Duration (days)"
                    input_type="number"
                    placeholder="e.g., 5"
                    value=Signal::derive(move || form.with(|f| f.duration.clone()))
                    on_input=move |v: String| form.update(|f| f.duration = v)
                />
                <InputField
                    label="Interests"
                    placeholder="e.g., art, culture, history, Club"
                    value=Signal::derive(move || form.with(|f| f.interests.clone()))
                    on_input=move |v: String| form.update(|f| f.interests = v)
                />

                <button
                    type="submit"
                    disabled=move || creating.get()
                    class="w-full bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                           disabled:cursor-not-allowed rounded-lg py-3 font-semibold
                           transition-colors flex items-center justify-center space-x-2"
                >
                    {move || if creating.get() {
                        view! {
                            <InlineLoading />
                            <span>"Creating..."</span>
                        }.into_view()
                    } else {
                        view! {
                            <span>"Create Trip"</span>
                        }.into_view()
                    }}
                </button>
            </form>
        </div>
    }
}
