//! Trip List Logic
//!
//! View-independent behaviour of the trip listing pages: which endpoint a
//! listing reads, what it is called, and how a favorite toggle is merged
//! into the trips already on screen.

use crate::models::{Trip, TripId};

/// Which listing a page shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TripListKind {
    /// Every trip of the current user
    All,
    /// Trips flagged as favorite (filtered server-side)
    Favorites,
}

impl TripListKind {
    pub fn heading(&self) -> &'static str {
        match self {
            TripListKind::All => "My Trips",
            TripListKind::Favorites => "My Favorite Trips",
        }
    }

    pub fn empty_message(&self) -> &'static str {
        match self {
            TripListKind::All => "No trips available.",
            TripListKind::Favorites => "No favorite trips available.",
        }
    }

    pub fn back_label(&self) -> &'static str {
        match self {
            TripListKind::All => "Back to My Trips",
            TripListKind::Favorites => "Back to Favorite Trips",
        }
    }
}

/// Merge a confirmed favorite flag into the local list
///
/// Only the trip with `trip_id` changes; the list keeps every card, so an
/// un-favorited trip stays on the favorites page until the next fetch.
/// Returns false when no such trip is on screen.
pub fn apply_favorite(trips: &mut [Trip], trip_id: TripId, favorite: bool) -> bool {
    match trips.iter_mut().find(|t| t.id == trip_id) {
        Some(trip) => {
            trip.favorite = favorite;
            true
        }
        None => false,
    }
}

pub fn find_trip(trips: &[Trip], trip_id: TripId) -> Option<&Trip> {
    trips.iter().find(|t| t.id == trip_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_trip(id: TripId, favorite: bool) -> Trip {
        Trip {
            id,
            destination: vec![format!("City {}", id)],
            start_date: "2024-11-02".to_string(),
            budget: 1000.0,
            duration: 3,
            interests: vec!["food".to_string()],
            itineraries: Vec::new(),
            favorite,
        }
    }

    #[test]
    fn test_apply_favorite_touches_only_match() {
        let mut trips = vec![make_trip(1, false), make_trip(2, false), make_trip(3, true)];
        let before = trips.clone();

        assert!(apply_favorite(&mut trips, 2, true));

        assert_eq!(trips[0], before[0]);
        assert!(trips[1].favorite);
        assert_eq!(trips[1].destination, before[1].destination);
        assert_eq!(trips[2], before[2]);
    }

    #[test]
    fn test_apply_favorite_unknown_id() {
        let mut trips = vec![make_trip(1, false)];
        assert!(!apply_favorite(&mut trips, 99, true));
        assert!(!trips[0].favorite);
    }

    #[test]
    fn test_unfavorite_keeps_card() {
        let mut trips = vec![make_trip(1, true), make_trip(2, true)];
        assert!(apply_favorite(&mut trips, 1, false));

        assert_eq!(trips.len(), 2);
        assert_eq!(trips[0].id, 1);
        assert!(!trips[0].favorite);
        assert!(trips[1].favorite);
    }

    #[test]
    fn test_empty_list_messages() {
        assert_eq!(TripListKind::All.empty_message(), "No trips available.");
        assert_eq!(TripListKind::Favorites.empty_message(), "No favorite trips available.");
    }

    #[test]
    fn test_find_trip() {
        let trips = vec![make_trip(1, false), make_trip(5, true)];
        assert_eq!(find_trip(&trips, 5).map(|t| t.id), Some(5));
        assert!(find_trip(&trips, 2).is_none());
    }
}
