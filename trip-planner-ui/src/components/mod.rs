//! UI Components
//!
//! Reusable Leptos components shared by the pages.

pub mod footer;
pub mod header;
pub mod input_field;
pub mod layout;
pub mod loading;
pub mod toast;
pub mod trip_card;
pub mod trip_detail;

pub use input_field::{InputField, PasswordField};
pub use layout::Layout;
pub use loading::{InlineLoading, Loading};
pub use toast::Toast;
pub use trip_card::TripCard;
pub use trip_detail::TripDetail;
