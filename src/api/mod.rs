//! Trip API Client
//!
//! HTTP access to the remote trip API for the terminal client.
//!
//! # Endpoints
//!
//! - `POST /user/login` - Create a session
//! - `POST /user/signup` - Register a user
//! - `POST /trips/create` - Create a trip (201)
//! - `GET /trips/view?user_id=` - List a user's trips
//! - `GET /trips/favorite?user_id=` - List a user's favorite trips
//! - `PATCH /trips/update-favorite/:id?favorite_value=` - Set the favorite flag

pub mod client;

pub use client::TripClient;
