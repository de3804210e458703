//! REST Endpoints
//!
//! Paths and query strings of the remote trip API, relative to its base URL.

use crate::models::TripId;
use crate::trips::TripListKind;

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

pub const LOGIN: &str = "/user/login";
pub const SIGNUP: &str = "/user/signup";
pub const CREATE_TRIP: &str = "/trips/create";

/// Normalize a base URL: trim whitespace and trailing slashes
pub fn normalize_base(base: &str) -> String {
    base.trim().trim_end_matches('/').to_string()
}

/// Join a normalized base URL and an endpoint path
pub fn url(base: &str, path: &str) -> String {
    format!("{}{}", normalize_base(base), path)
}

/// `GET` listing of a user's trips
pub fn list_trips(kind: TripListKind, user_id: &str) -> String {
    let path = match kind {
        TripListKind::All => "/trips/view",
        TripListKind::Favorites => "/trips/favorite",
    };
    format!("{}?user_id={}", path, urlencoding::encode(user_id))
}

/// `PATCH` setting the favorite flag of one trip
pub fn update_favorite(trip_id: TripId, favorite: bool) -> String {
    format!("/trips/update-favorite/{}?favorite_value={}", trip_id, favorite)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_paths() {
        assert_eq!(list_trips(TripListKind::All, "42"), "/trips/view?user_id=42");
        assert_eq!(
            list_trips(TripListKind::Favorites, "42"),
            "/trips/favorite?user_id=42"
        );
    }

    #[test]
    fn test_user_id_is_encoded() {
        assert_eq!(
            list_trips(TripListKind::All, "a b&c"),
            "/trips/view?user_id=a%20b%26c"
        );
    }

    #[test]
    fn test_update_favorite_path() {
        assert_eq!(update_favorite(7, true), "/trips/update-favorite/7?favorite_value=true");
        assert_eq!(update_favorite(7, false), "/trips/update-favorite/7?favorite_value=false");
    }

    #[test]
    fn test_url_join() {
        assert_eq!(url("http://api.local/ ", LOGIN), "http://api.local/user/login");
        assert_eq!(url("http://api.local//", CREATE_TRIP), "http://api.local/trips/create");
    }
}
