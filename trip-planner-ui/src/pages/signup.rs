//! Signup Page
//!
//! The password policy is checked locally; a weak password never reaches
//! the server.

use leptos::*;
use leptos_router::*;

use trip_planner::error::WEAK_PASSWORD_MESSAGE;
use trip_planner::validation::PASSWORD_SUGGESTIONS;
use trip_planner::{FormError, PasswordStrength, SignupForm};

use super::alert;
use crate::api;
use crate::components::{InputField, PasswordField};

#[component]
pub fn Signup() -> impl IntoView {
    let navigate = use_navigate();

    let name = create_rw_signal(String::new());
    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let (show_suggestions, set_show_suggestions) = create_signal(false);

    let missing = move || {
        password.with(|p| {
            if p.is_empty() {
                Vec::new()
            } else {
                PasswordStrength::check(p).failures()
            }
        })
    };

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let form = SignupForm {
            name: name.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        let request = match form.to_request() {
            Ok(request) => request,
            Err(FormError::WeakPassword(_)) => {
                set_show_suggestions.set(true);
                alert(WEAK_PASSWORD_MESSAGE);
                return;
            }
            Err(e) => {
                alert(&e.to_string());
                return;
            }
        };

        let navigate = navigate.clone();
        spawn_local(async move {
            match api::signup(&request).await {
                Ok(()) => {
                    alert("Registered successfully. Please login to continue.");
                    navigate("/login", Default::default());
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Signup failed: {}", e).into());
                    alert(&e.user_message("An error occurred while signing up."));
                }
            }
        });
    };

    view! {
        <div class="max-w-md mx-auto">
            <h1 class="text-4xl font-bold tracking-tight text-primary-400 mb-6 text-center">
                "Create an Account"
            </h1>
            <div class="bg-gray-800 border border-gray-700 rounded-lg p-6 shadow-lg">
                <form on:submit=on_submit class="space-y-4">
                    <InputField label="Name" value=name on_input=move |v: String| name.set(v) />
                    <InputField
                        label="Email"
                        input_type="email"
                        value=email
                        on_input=move |v: String| email.set(v)
                    />
                    <PasswordField value=password on_input=move |v: String| password.set(v) />

                    <button
                        type="button"
                        class="text-sm text-primary-400 hover:underline"
                        on:click=move |_| set_show_suggestions.update(|v| *v = !*v)
                    >
                        {move || if show_suggestions.get() {
                            "Hide password suggestions"
                        } else {
                            "Show password suggestions"
                        }}
                    </button>

                    {move || show_suggestions.get().then(|| view! {
                        <div class="p-3 bg-gray-900 rounded-lg">
                            <p class="text-sm font-medium mb-2">"Password Suggestions:"</p>
                            <ul class="list-disc list-inside text-sm text-gray-400">
                                {PASSWORD_SUGGESTIONS.iter()
                                    .map(|s| view! { <li>{*s}</li> })
                                    .collect_view()}
                            </ul>
                        </div>
                    })}

                    {move || {
                        let missing = missing();
                        (!missing.is_empty()).then(|| view! {
                            <p class="text-sm text-yellow-400">
                                {format!("Still needs {}.", missing.join(", "))}
                            </p>
                        })
                    }}

                    <button
                        type="submit"
                        class="w-full bg-primary-600 hover:bg-primary-700 rounded-lg py-2 font-semibold transition-colors"
                    >
                        "Sign Up"
                    </button>
                </form>
                <p class="mt-4 text-center text-sm text-gray-400">
                    "Already have an account? "
                    <A href="/login" class="text-primary-400 hover:underline">"Log in here"</A>
                </p>
            </div>
        </div>
    }
}
