//! # Trip Planner
//!
//! Client for a remote trip-planning API: users sign up, log in, describe a
//! trip (destinations, budget, start date, duration, interests) and get back
//! generated day-by-day itineraries they can browse and mark as favorite.
//!
//! ## Modules
//!
//! - [`models`]: DTOs exchanged with the API
//! - [`validation`]: password-strength policy for signup
//! - [`forms`]: parsing of the login, signup and trip forms
//! - [`trips`]: list kinds and the favorite-toggle merge
//! - [`routes`]: browser routes and header navigation
//! - [`endpoints`]: REST paths and query strings
//! - [`session`]: session persistence
//! - [`api`]: native HTTP client (feature `native`)
//!
//! The core compiles for `wasm32-unknown-unknown` with default features off;
//! the Leptos front end in `trip-planner-ui` builds on it.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use trip_planner::api::TripClient;
//! use trip_planner::config::Config;
//! use trip_planner::forms::TripForm;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_default();
//!     let client = TripClient::new(&config.api)?;
//!
//!     let form = TripForm {
//!         destination: "Delhi, Noida".into(),
//!         budget: "10000".into(),
//!         start_date: "2024-11-02".into(),
//!         duration: "5".into(),
//!         interests: "art, culture".into(),
//!     };
//!     let trip = client.create_trip(&form.to_new_trip("42")?).await?;
//!     println!("Created trip {}", trip.id);
//!     Ok(())
//! }
//! ```

pub mod endpoints;
pub mod error;
pub mod format;
pub mod forms;
pub mod models;
pub mod routes;
pub mod session;
pub mod trips;
pub mod validation;

#[cfg(feature = "native")]
pub mod api;
#[cfg(feature = "native")]
pub mod config;

pub use error::{ApiErrorBody, ClientError, ClientResult, MessageOrder};
pub use forms::{FormError, LoginForm, SignupForm, TripForm};
pub use models::{Activity, DayPlan, Itinerary, NewTrip, Session, Trip, TripId};
pub use routes::{AppRoute, NavItem, NavTarget, Navigation};
pub use session::SessionStore;
pub use trips::{apply_favorite, TripListKind};
pub use validation::PasswordStrength;

#[cfg(feature = "native")]
pub use api::TripClient;
#[cfg(feature = "native")]
pub use config::{Config, ConfigError};
#[cfg(feature = "native")]
pub use session::FileSessionStore;
