//! Trip API Data Model
//!
//! DTOs exchanged with the remote trip API. The client treats them as
//! opaque: they are created by server responses and only the favorite flag
//! is ever changed locally.

use serde::{Deserialize, Deserializer, Serialize};

/// Trip identifier as assigned by the API
pub type TripId = i64;

/// A planned journey with its generated itineraries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    pub id: TripId,
    pub destination: Vec<String>,
    pub start_date: String,
    pub budget: f64,
    /// Length of the trip in days
    pub duration: u32,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub itineraries: Vec<Itinerary>,
    #[serde(default)]
    pub favorite: bool,
}

impl Trip {
    /// "Trip to Delhi, Noida"
    pub fn title(&self) -> String {
        format!("Trip to {}", self.destination.join(", "))
    }
}

/// Day-by-day plan for one destination of a trip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Itinerary {
    pub destination: String,
    pub budget: f64,
    pub duration: u32,
    #[serde(default)]
    pub itinerary: Vec<DayPlan>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayPlan {
    pub day: u32,
    #[serde(default)]
    pub activities: Vec<Activity>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub name: String,
    pub cost: f64,
    #[serde(default)]
    pub description: String,
}

/// Authenticated user session
///
/// Stored after login and read back by every request scoped to the
/// current user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user_id: String,
}

// ============ Requests ============

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Body of `POST /trips/create`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewTrip {
    pub user_id: String,
    pub destination: Vec<String>,
    pub budget: u64,
    /// ISO date, `YYYY-MM-DD`
    pub start_date: String,
    pub duration: u32,
    pub interests: Vec<String>,
}

// ============ Responses ============

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    /// The API returns the user id either as a number or a string
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
}

impl From<LoginResponse> for Session {
    fn from(response: LoginResponse) -> Self {
        Self {
            token: response.token,
            user_id: response.id,
        }
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected user id as string or number, got {}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trip_defaults_missing_fields() {
        let json = r#"{
            "id": 3,
            "destination": ["Delhi", "Noida"],
            "start_date": "2024-11-02",
            "budget": 10000,
            "duration": 5
        }"#;

        let trip: Trip = serde_json::from_str(json).unwrap();
        assert_eq!(trip.id, 3);
        assert!(!trip.favorite);
        assert!(trip.itineraries.is_empty());
        assert!(trip.interests.is_empty());
        assert_eq!(trip.title(), "Trip to Delhi, Noida");
    }

    #[test]
    fn test_trip_with_itineraries() {
        let json = r#"{
            "id": 7,
            "destination": ["Goa"],
            "start_date": "2024-12-20",
            "budget": 25000.5,
            "duration": 2,
            "interests": ["beach"],
            "favorite": true,
            "itineraries": [{
                "destination": "Goa",
                "budget": 25000,
                "duration": 2,
                "itinerary": [
                    {"day": 1, "activities": [{"name": "Baga Beach", "cost": 0, "description": "Swim"}]},
                    {"day": 2, "activities": []}
                ]
            }]
        }"#;

        let trip: Trip = serde_json::from_str(json).unwrap();
        assert!(trip.favorite);
        assert_eq!(trip.itineraries[0].itinerary.len(), 2);
        assert_eq!(trip.itineraries[0].itinerary[0].activities[0].name, "Baga Beach");
    }

    #[test]
    fn test_login_response_numeric_id() {
        let response: LoginResponse =
            serde_json::from_str(r#"{"token": "abc", "id": 42}"#).unwrap();
        let session = Session::from(response);
        assert_eq!(session.user_id, "42");
        assert_eq!(session.token, "abc");
    }

    #[test]
    fn test_login_response_string_id() {
        let response: LoginResponse =
            serde_json::from_str(r#"{"token": "abc", "id": "u-9"}"#).unwrap();
        assert_eq!(response.id, "u-9");
    }

    #[test]
    fn test_login_response_rejects_object_id() {
        let result: Result<LoginResponse, _> =
            serde_json::from_str(r#"{"token": "abc", "id": {"x": 1}}"#);
        assert!(result.is_err());
    }
}
