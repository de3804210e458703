//! Trip API REST Client
//!
//! Native HTTP client for the remote trip API.

use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::endpoints;
use crate::error::{ClientError, ClientResult};
use crate::models::{LoginRequest, LoginResponse, NewTrip, Session, SignupRequest, Trip, TripId};
use crate::trips::TripListKind;

/// Trip API client
///
/// One request per call; nothing is retried.
#[derive(Debug, Clone)]
pub struct TripClient {
    client: Client,
    base_url: String,
}

impl TripClient {
    /// Create a new client from the API section of the config
    pub fn new(config: &ApiConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| ClientError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: endpoints::normalize_base(&config.base_url),
        })
    }

    fn url(&self, path: &str) -> String {
        endpoints::url(&self.base_url, path)
    }

    /// `POST /user/login`; 200 carries the session
    pub async fn login(&self, request: &LoginRequest) -> ClientResult<Session> {
        tracing::debug!(email = %request.email, "Logging in");
        let response = send(self.client.post(self.url(endpoints::LOGIN)).json(request)).await?;
        let body: LoginResponse = expect_json(response, StatusCode::OK).await?;
        tracing::info!(user_id = %body.id, "Logged in");
        Ok(body.into())
    }

    /// `POST /user/signup`; 200 means registered
    pub async fn signup(&self, request: &SignupRequest) -> ClientResult<()> {
        tracing::debug!(email = %request.email, "Signing up");
        let response = send(self.client.post(self.url(endpoints::SIGNUP)).json(request)).await?;
        expect_status(response, StatusCode::OK).await?;
        Ok(())
    }

    /// `POST /trips/create`; only 201 counts as created
    pub async fn create_trip(&self, trip: &NewTrip) -> ClientResult<Trip> {
        tracing::debug!(destinations = ?trip.destination, "Creating trip");
        let response =
            send(self.client.post(self.url(endpoints::CREATE_TRIP)).json(trip)).await?;
        let created: Trip = expect_json(response, StatusCode::CREATED).await?;
        tracing::info!(trip_id = created.id, "Trip created");
        Ok(created)
    }

    /// All or favorite trips of `user_id`
    pub async fn list_trips(&self, kind: TripListKind, user_id: &str) -> ClientResult<Vec<Trip>> {
        let path = endpoints::list_trips(kind, user_id);
        let response = send(self.client.get(self.url(&path))).await?;
        let trips: Vec<Trip> = expect_json(response, StatusCode::OK).await?;
        tracing::debug!(count = trips.len(), ?kind, "Fetched trips");
        Ok(trips)
    }

    /// Like [`TripClient::list_trips`], but a failed fetch is logged and
    /// reads as an empty listing
    pub async fn list_trips_or_empty(&self, kind: TripListKind, user_id: &str) -> Vec<Trip> {
        self.list_trips(kind, user_id).await.unwrap_or_else(|e| {
            tracing::error!("An error occurred while fetching trips: {}", e);
            Vec::new()
        })
    }

    /// `PATCH` the favorite flag of one trip
    pub async fn set_favorite(&self, trip_id: TripId, favorite: bool) -> ClientResult<()> {
        let path = endpoints::update_favorite(trip_id, favorite);
        let response = send(self.client.patch(self.url(&path))).await?;
        expect_status(response, StatusCode::OK).await?;
        tracing::info!(trip_id, favorite, "Favorite updated");
        Ok(())
    }
}

async fn send(request: RequestBuilder) -> ClientResult<Response> {
    request.send().await.map_err(|e| {
        tracing::error!("Request failed: {}", e);
        if e.is_timeout() {
            ClientError::Network("Request timed out".to_string())
        } else {
            ClientError::Network(e.to_string())
        }
    })
}

/// Non-success statuses become `Api` errors carrying the server's message
async fn expect_status(response: Response, expected: StatusCode) -> ClientResult<Response> {
    let status = response.status();
    if status == expected {
        return Ok(response);
    }

    if status.is_success() {
        tracing::warn!(status = status.as_u16(), expected = expected.as_u16(), "Unexpected status");
        return Err(ClientError::UnexpectedStatus(status.as_u16()));
    }

    let body = response.text().await.unwrap_or_default();
    let err = ClientError::from_response(status.as_u16(), &body);
    tracing::error!(status = status.as_u16(), error = %err, "API error");
    Err(err)
}

async fn expect_json<T: DeserializeOwned>(
    response: Response,
    expected: StatusCode,
) -> ClientResult<T> {
    let response = expect_status(response, expected).await?;
    response
        .json()
        .await
        .map_err(|e| ClientError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        extract::{Path, Query},
        http::StatusCode as AxumStatus,
        routing::{get, patch, post},
        Json, Router,
    };
    use serde_json::{json, Value};
    use std::collections::HashMap;

    fn trip_json(id: i64, favorite: bool) -> Value {
        json!({
            "id": id,
            "destination": ["Delhi", "Noida"],
            "start_date": "2024-11-02",
            "budget": 10000,
            "duration": 5,
            "interests": ["art"],
            "itineraries": [],
            "favorite": favorite
        })
    }

    async fn login(Json(body): Json<Value>) -> (AxumStatus, Json<Value>) {
        if body["password"] == "Tr1p!Plan" {
            (AxumStatus::OK, Json(json!({"token": "tok-1", "id": 42})))
        } else {
            (AxumStatus::UNAUTHORIZED, Json(json!({"message": "Invalid credentials"})))
        }
    }

    async fn signup(Json(body): Json<Value>) -> (AxumStatus, Json<Value>) {
        if body["email"] == "taken@example.com" {
            (AxumStatus::BAD_REQUEST, Json(json!({"detail": "Email already registered"})))
        } else {
            (AxumStatus::OK, Json(json!({"message": "User created"})))
        }
    }

    async fn create(Json(body): Json<Value>) -> (AxumStatus, Json<Value>) {
        if body["budget"].as_u64() == Some(0) {
            return (AxumStatus::OK, Json(body));
        }
        let mut trip = trip_json(9, false);
        trip["destination"] = body["destination"].clone();
        trip["interests"] = body["interests"].clone();
        (AxumStatus::CREATED, Json(trip))
    }

    async fn view(Query(q): Query<HashMap<String, String>>) -> Json<Value> {
        match q.get("user_id").map(String::as_str) {
            Some("42") => Json(json!([trip_json(1, false), trip_json(2, true)])),
            _ => Json(json!([])),
        }
    }

    async fn favorite(Query(q): Query<HashMap<String, String>>) -> Json<Value> {
        match q.get("user_id").map(String::as_str) {
            Some("42") => Json(json!([trip_json(2, true)])),
            _ => Json(json!([])),
        }
    }

    async fn update_favorite(
        Path(id): Path<i64>,
        Query(q): Query<HashMap<String, String>>,
    ) -> (AxumStatus, Json<Value>) {
        if id != 1 {
            return (AxumStatus::NOT_FOUND, Json(json!({"detail": "Trip not found"})));
        }
        let value = q.get("favorite_value").cloned().unwrap_or_default();
        (AxumStatus::OK, Json(json!({"id": id, "favorite": value == "true"})))
    }

    async fn spawn_mock_api() -> TripClient {
        let app = Router::new()
            .route("/user/login", post(login))
            .route("/user/signup", post(signup))
            .route("/trips/create", post(create))
            .route("/trips/view", get(view))
            .route("/trips/favorite", get(favorite))
            .route("/trips/update-favorite/:id", patch(update_favorite));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        TripClient::new(&ApiConfig {
            base_url: format!("http://{}/", addr),
            request_timeout_secs: 5,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_login_success() {
        let client = spawn_mock_api().await;
        let session = client
            .login(&LoginRequest {
                email: "asha@example.com".into(),
                password: "Tr1p!Plan".into(),
            })
            .await
            .unwrap();

        assert_eq!(session.token, "tok-1");
        assert_eq!(session.user_id, "42");
    }

    #[tokio::test]
    async fn test_login_failure_carries_message() {
        let client = spawn_mock_api().await;
        let err = client
            .login(&LoginRequest {
                email: "asha@example.com".into(),
                password: "wrong".into(),
            })
            .await
            .unwrap_err();

        assert_eq!(err.server_message(), Some("Invalid credentials"));
        assert!(matches!(err, ClientError::Api { status: 401, .. }));
    }

    #[tokio::test]
    async fn test_signup_duplicate_email() {
        let client = spawn_mock_api().await;
        let ok = client
            .signup(&SignupRequest {
                name: "Asha".into(),
                email: "asha@example.com".into(),
                password: "Tr1p!Plan".into(),
            })
            .await;
        assert!(ok.is_ok());

        let err = client
            .signup(&SignupRequest {
                name: "Asha".into(),
                email: "taken@example.com".into(),
                password: "Tr1p!Plan".into(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.user_message("fallback"), "Email already registered");
    }

    #[tokio::test]
    async fn test_create_trip_sends_lists() {
        let client = spawn_mock_api().await;
        let new_trip = NewTrip {
            user_id: "42".into(),
            destination: vec!["Goa".into(), "Panaji".into()],
            budget: 5000,
            start_date: "2024-12-20".into(),
            duration: 3,
            interests: vec!["beach".into()],
        };

        let trip = client.create_trip(&new_trip).await.unwrap();
        assert_eq!(trip.id, 9);
        assert_eq!(trip.destination, vec!["Goa", "Panaji"]);
        assert_eq!(trip.interests, vec!["beach"]);
    }

    #[tokio::test]
    async fn test_create_trip_requires_201() {
        let client = spawn_mock_api().await;
        let new_trip = NewTrip {
            user_id: "42".into(),
            destination: vec!["Goa".into()],
            budget: 0,
            start_date: "2024-12-20".into(),
            duration: 3,
            interests: Vec::new(),
        };

        let err = client.create_trip(&new_trip).await.unwrap_err();
        assert_eq!(err, ClientError::UnexpectedStatus(200));
    }

    #[tokio::test]
    async fn test_list_trips_by_kind() {
        let client = spawn_mock_api().await;

        let all = client.list_trips(TripListKind::All, "42").await.unwrap();
        assert_eq!(all.len(), 2);

        let favorites = client.list_trips(TripListKind::Favorites, "42").await.unwrap();
        assert_eq!(favorites.len(), 1);
        assert!(favorites[0].favorite);

        let empty = client.list_trips(TripListKind::All, "7").await.unwrap();
        assert!(empty.is_empty());
    }

    #[tokio::test]
    async fn test_set_favorite() {
        let client = spawn_mock_api().await;
        client.set_favorite(1, true).await.unwrap();

        let err = client.set_favorite(3, true).await.unwrap_err();
        assert_eq!(err.server_message(), Some("Trip not found"));
    }

    async fn unreachable_client() -> TripClient {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        TripClient::new(&ApiConfig {
            base_url: format!("http://{}", addr),
            request_timeout_secs: 2,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_unreachable_server_is_network_error() {
        let client = unreachable_client().await;
        let err = client.list_trips(TripListKind::All, "42").await.unwrap_err();
        assert!(err.is_network());
    }

    #[tokio::test]
    async fn test_failed_fetch_reads_as_empty_listing() {
        let client = unreachable_client().await;

        for kind in [TripListKind::All, TripListKind::Favorites] {
            let trips = client.list_trips_or_empty(kind, "42").await;
            assert!(trips.is_empty());
        }
        assert_eq!(TripListKind::All.empty_message(), "No trips available.");
    }

    #[tokio::test]
    async fn test_list_trips_or_empty_passes_trips_through() {
        let client = spawn_mock_api().await;
        let trips = client.list_trips_or_empty(TripListKind::All, "42").await;
        assert_eq!(trips.len(), 2);
    }
}
