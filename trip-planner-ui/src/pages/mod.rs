//! Pages
//!
//! Top-level page components for each route.

pub mod create_trip;
pub mod home;
pub mod login;
pub mod signup;
pub mod trip_page;
pub mod trips;

pub use create_trip::CreateTrip;
pub use home::Home;
pub use login::Login;
pub use signup::Signup;
pub use trip_page::TripPage;
pub use trips::{FavoriteTrips, TripBrowser};

/// Blocking browser alert
pub(crate) fn alert(message: &str) {
    if let Err(e) = leptos::window().alert_with_message(message) {
        web_sys::console::error_1(&e);
    }
}
