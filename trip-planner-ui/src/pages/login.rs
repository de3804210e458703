//! Login Page

use leptos::*;
use leptos_router::*;

use trip_planner::{LoginForm, MessageOrder};

use super::alert;
use crate::api;
use crate::components::{InputField, PasswordField};
use crate::state::use_global_state;

#[component]
pub fn Login() -> impl IntoView {
    let state = use_global_state();
    let navigate = use_navigate();

    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let form = LoginForm {
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        let request = match form.to_request() {
            Ok(request) => request,
            Err(e) => {
                alert(&e.to_string());
                return;
            }
        };

        let navigate = navigate.clone();
        spawn_local(async move {
            match api::login(&request).await {
                Ok(session) => {
                    if let Err(e) = state.log_in(session) {
                        web_sys::console::error_1(&format!("Failed to store session: {}", e).into());
                    }
                    alert("Logged in successfully.");
                    navigate("/", Default::default());
                }
                Err(e) if e.is_network() => {
                    web_sys::console::error_1(&format!("Login failed: {}", e).into());
                    alert("An error occurred. Please try again later.");
                }
                Err(e) => alert(&e.user_message_in(
                    MessageOrder::MessageFirst,
                    "An error occurred while logging in.",
                )),
            }
        });
    };

    view! {
        <div class="max-w-md mx-auto">
            <h1 class="text-4xl font-bold tracking-tight text-primary-400 mb-6 text-center">
                "Welcome Back"
            </h1>
            <div class="bg-gray-800 border border-gray-700 rounded-lg p-6 shadow-lg">
                <form on:submit=on_submit class="space-y-4">
                    <InputField
                        label="Email"
                        input_type="email"
                        value=email
                        on_input=move |v: String| email.set(v)
                    />
                    <PasswordField value=password on_input=move |v: String| password.set(v) />

                    <button
                        type="submit"
                        class="w-full bg-primary-600 hover:bg-primary-700 rounded-lg py-2 font-semibold transition-colors"
                    >
                        "Log In"
                    </button>
                </form>
                <p class="mt-4 text-center text-sm text-gray-400">
                    "Not a user? "
                    <A href="/signup" class="text-primary-400 hover:underline">"Sign up here"</A>
                </p>
            </div>
        </div>
    }
}
