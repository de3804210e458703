//! Route Table
//!
//! URL paths of the browser client and the header navigation shown on
//! each page.

use crate::models::TripId;

/// A page of the browser client
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppRoute {
    Home,
    Login,
    Signup,
    CreateTrip,
    FavoriteTrips,
    TripDetail(TripId),
}

impl AppRoute {
    pub fn path(&self) -> String {
        match self {
            AppRoute::Home => "/".to_string(),
            AppRoute::Login => "/login".to_string(),
            AppRoute::Signup => "/signup".to_string(),
            AppRoute::CreateTrip => "/create-trip".to_string(),
            AppRoute::FavoriteTrips => "/favorite-trips".to_string(),
            AppRoute::TripDetail(id) => format!("/trip/{}", id),
        }
    }

    /// Inverse of [`AppRoute::path`]; `None` for unknown paths
    pub fn parse(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Some(AppRoute::Home),
            "/login" => Some(AppRoute::Login),
            "/signup" => Some(AppRoute::Signup),
            "/create-trip" => Some(AppRoute::CreateTrip),
            "/favorite-trips" => Some(AppRoute::FavoriteTrips),
            other => other
                .strip_prefix("/trip/")
                .and_then(|id| id.parse().ok())
                .map(AppRoute::TripDetail),
        }
    }

    /// Pages that need a stored session
    pub fn requires_session(&self) -> bool {
        matches!(
            self,
            AppRoute::CreateTrip | AppRoute::FavoriteTrips | AppRoute::TripDetail(_)
        )
    }
}

/// Whether the page at `path` needs a stored session; unknown paths don't
pub fn path_requires_session(path: &str) -> bool {
    AppRoute::parse(path).is_some_and(|route| route.requires_session())
}

/// What a header link does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    Route(AppRoute),
    /// Clear the session, then go home
    LogOut,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub name: &'static str,
    pub target: NavTarget,
    pub selected: bool,
}

impl NavItem {
    fn page(name: &'static str, route: AppRoute, current: AppRoute) -> Self {
        Self {
            name,
            target: NavTarget::Route(route),
            selected: route == current,
        }
    }

    fn user(name: &'static str, target: NavTarget) -> Self {
        Self { name, target, selected: false }
    }

    /// Destination path; log out lands on home
    pub fn href(&self) -> String {
        match self.target {
            NavTarget::Route(route) => route.path(),
            NavTarget::LogOut => AppRoute::Home.path(),
        }
    }
}

/// Header links: page links on the left, account links on the right
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Navigation {
    pub pages: Vec<NavItem>,
    pub user: Vec<NavItem>,
}

impl Navigation {
    pub fn for_page(current: AppRoute, logged_in: bool) -> Self {
        match current {
            AppRoute::Login => Self {
                pages: Vec::new(),
                user: vec![NavItem::user("Sign up", NavTarget::Route(AppRoute::Signup))],
            },
            AppRoute::Signup => Self {
                pages: Vec::new(),
                user: vec![NavItem::user("Login", NavTarget::Route(AppRoute::Login))],
            },
            _ if !logged_in => Self {
                pages: Vec::new(),
                user: vec![
                    NavItem::user("Login", NavTarget::Route(AppRoute::Login)),
                    NavItem::user("Sign up", NavTarget::Route(AppRoute::Signup)),
                ],
            },
            _ => Self {
                pages: vec![
                    NavItem::page("Create a Trip", AppRoute::CreateTrip, current),
                    NavItem::page("Favorite Trips", AppRoute::FavoriteTrips, current),
                ],
                user: vec![NavItem::user("Log out", NavTarget::LogOut)],
            },
        }
    }
}
