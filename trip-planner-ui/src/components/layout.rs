//! Page Layout
//!
//! Header, main area and footer. The main area's minimum height fills
//! whatever the window leaves after the header and footer, and is
//! recomputed on resize.

use leptos::*;

use super::footer::Footer;
use super::header::Header;

/// Minimum main-area height in pixels
pub fn main_height(window_height: f64, header_height: i32, footer_height: i32) -> f64 {
    (window_height - f64::from(header_height) - f64::from(footer_height)).max(0.0)
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let header_ref = create_node_ref::<html::Header>();
    let footer_ref = create_node_ref::<html::Footer>();
    let (min_height, set_min_height) = create_signal(None::<f64>);

    let update_main_height = move || {
        let window_height = window()
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or_default();
        let header_height = header_ref.get_untracked().map(|h| h.offset_height()).unwrap_or(0);
        let footer_height = footer_ref.get_untracked().map(|f| f.offset_height()).unwrap_or(0);
        set_min_height.set(Some(main_height(window_height, header_height, footer_height)));
    };

    // Once both elements are mounted
    create_effect(move |_| {
        if header_ref.get().is_some() && footer_ref.get().is_some() {
            update_main_height();
        }
    });

    let resize = window_event_listener(ev::resize, move |_| update_main_height());
    on_cleanup(move || resize.remove());

    view! {
        <div class="min-h-screen flex flex-col bg-gray-900 text-white">
            <header node_ref=header_ref class="z-10 sticky top-0">
                <Header />
            </header>
            <main
                class="flex-grow container mx-auto px-4 sm:px-6 lg:px-8 py-8"
                style=move || match min_height.get() {
                    Some(px) => format!("min-height: {}px", px),
                    None => "min-height: auto".to_string(),
                }
            >
                <div class="bg-gray-800 shadow-md rounded-lg p-6 h-full">
                    {children()}
                </div>
            </main>
            <footer node_ref=footer_ref>
                <Footer />
            </footer>
        </div>
    }
}
