//! API Access
//!
//! Thin wrappers around the trip REST API using `gloo-net`.

mod client;

pub use client::*;
