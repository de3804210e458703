//! HTTP API Client
//!
//! Functions for communicating with the trip REST API.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use trip_planner::endpoints::{self, DEFAULT_API_BASE};
use trip_planner::models::{LoginRequest, LoginResponse, NewTrip, Session, SignupRequest, Trip, TripId};
use trip_planner::{ClientError, ClientResult, TripListKind};

/// API base URL, fixed at build time through `TRIP_PLANNER_API_URL`
pub fn get_api_base() -> String {
    endpoints::normalize_base(option_env!("TRIP_PLANNER_API_URL").unwrap_or(DEFAULT_API_BASE))
}

fn api_url(path: &str) -> String {
    endpoints::url(&get_api_base(), path)
}

fn network(e: gloo_net::Error) -> ClientError {
    ClientError::Network(e.to_string())
}

fn build(e: gloo_net::Error) -> ClientError {
    ClientError::Network(format!("Request build error: {}", e))
}

/// Non-matching statuses become errors; error bodies keep the server's message
async fn expect_status(response: Response, expected: u16) -> ClientResult<Response> {
    let status = response.status();
    if status == expected {
        return Ok(response);
    }
    if response.ok() {
        return Err(ClientError::UnexpectedStatus(status));
    }

    let body = response.text().await.unwrap_or_default();
    Err(ClientError::from_response(status, &body))
}

async fn expect_json<T: DeserializeOwned>(response: Response, expected: u16) -> ClientResult<T> {
    let response = expect_status(response, expected).await?;
    response
        .json()
        .await
        .map_err(|e| ClientError::Decode(e.to_string()))
}

// ============ API Functions ============

/// Log in; 200 carries the token and user id
pub async fn login(request: &LoginRequest) -> ClientResult<Session> {
    let response = Request::post(&api_url(endpoints::LOGIN))
        .json(request)
        .map_err(build)?
        .send()
        .await
        .map_err(network)?;

    let body: LoginResponse = expect_json(response, 200).await?;
    Ok(body.into())
}

/// Register a new user
pub async fn signup(request: &SignupRequest) -> ClientResult<()> {
    let response = Request::post(&api_url(endpoints::SIGNUP))
        .json(request)
        .map_err(build)?
        .send()
        .await
        .map_err(network)?;

    expect_status(response, 200).await?;
    Ok(())
}

/// Create a trip; only 201 counts as created
pub async fn create_trip(trip: &NewTrip) -> ClientResult<Trip> {
    let response = Request::post(&api_url(endpoints::CREATE_TRIP))
        .json(trip)
        .map_err(build)?
        .send()
        .await
        .map_err(network)?;

    expect_json(response, 201).await
}

/// Fetch the user's trips, all or favorites only
pub async fn fetch_trips(kind: TripListKind, user_id: &str) -> ClientResult<Vec<Trip>> {
    let response = Request::get(&api_url(&endpoints::list_trips(kind, user_id)))
        .send()
        .await
        .map_err(network)?;

    expect_json(response, 200).await
}

/// Set the favorite flag of a trip
pub async fn update_favorite(trip_id: TripId, favorite: bool) -> ClientResult<()> {
    let response = Request::patch(&api_url(&endpoints::update_favorite(trip_id, favorite)))
        .send()
        .await
        .map_err(network)?;

    expect_status(response, 200).await?;
    Ok(())
}
