//! Form Inputs
//!
//! Labelled text inputs. The value is read from a signal and every
//! keystroke is reported through `on_input`.

use leptos::*;

const INPUT_CLASS: &str = "w-full bg-gray-700 border border-gray-600 rounded-lg px-4 py-2 \
                           text-white focus:outline-none focus:ring-2 focus:ring-primary-500";

#[component]
pub fn InputField(
    #[prop(into)]
    label: String,
    #[prop(into)]
    value: Signal<String>,
    #[prop(into)]
    on_input: Callback<String>,
    #[prop(default = "text")]
    input_type: &'static str,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm font-medium text-gray-400 mb-1">{label}</label>
            <input
                type=input_type
                placeholder=placeholder
                required=true
                class=INPUT_CLASS
                prop:value=move || value.get()
                on:input=move |ev| on_input.call(event_target_value(&ev))
            />
        </div>
    }
}

/// Password input with a show/hide toggle
#[component]
pub fn PasswordField(
    #[prop(into)]
    value: Signal<String>,
    #[prop(into)]
    on_input: Callback<String>,
    #[prop(default = "Password")]
    label: &'static str,
) -> impl IntoView {
    let (visible, set_visible) = create_signal(false);

    view! {
        <div>
            <label class="block text-sm font-medium text-gray-400 mb-1">{label}</label>
            <div class="relative">
                <input
                    type=move || { if visible.get() { "text" } else { "password" } }
                    required=true
                    class=INPUT_CLASS
                    prop:value=move || value.get()
                    on:input=move |ev| on_input.call(event_target_value(&ev))
                />
                <button
                    type="button"
                    class="absolute inset-y-0 right-0 px-3 text-sm text-gray-400 hover:text-white"
                    on:click=move |_| set_visible.update(|v| *v = !*v)
                >
                    {move || if visible.get() { "Hide" } else { "Show" }}
                </button>
            </div>
        </div>
    }
}
