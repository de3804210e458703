//! Form Parsing
//!
//! Turns the raw text of the login, signup and trip-creation forms into
//! request DTOs.

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::{LoginRequest, NewTrip, SignupRequest};
use crate::validation::PasswordStrength;

/// Local validation failures; nothing is sent when one occurs
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("{0} is required")]
    Missing(&'static str),

    #[error("{field} must be a whole number, got {value:?}")]
    NotANumber { field: &'static str, value: String },

    #[error("Start date must be YYYY-MM-DD, got {0:?}")]
    InvalidDate(String),

    #[error("Password is missing {}", .0.join(", "))]
    WeakPassword(Vec<&'static str>),
}

/// Split a comma-separated field into trimmed, non-empty entries
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn required<'a>(field: &'static str, value: &'a str) -> Result<&'a str, FormError> {
    let value = value.trim();
    if value.is_empty() {
        Err(FormError::Missing(field))
    } else {
        Ok(value)
    }
}

fn parse_whole<T: std::str::FromStr>(field: &'static str, raw: &str) -> Result<T, FormError> {
    let raw = required(field, raw)?;
    raw.parse().map_err(|_| FormError::NotANumber {
        field,
        value: raw.to_string(),
    })
}

/// Raw contents of the login form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn to_request(&self) -> Result<LoginRequest, FormError> {
        Ok(LoginRequest {
            email: required("Email", &self.email)?.to_string(),
            password: required("Password", &self.password)?.to_string(),
        })
    }
}

/// Raw contents of the signup form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl SignupForm {
    /// Validate and build the request; the password policy runs last
    pub fn to_request(&self) -> Result<SignupRequest, FormError> {
        let name = required("Name", &self.name)?.to_string();
        let email = required("Email", &self.email)?.to_string();

        let strength = PasswordStrength::check(&self.password);
        if !strength.is_strong() {
            return Err(FormError::WeakPassword(strength.failures()));
        }

        Ok(SignupRequest {
            name,
            email,
            password: self.password.clone(),
        })
    }
}

/// Raw contents of the trip-creation form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TripForm {
    /// Comma-separated destinations, e.g. "Delhi, Noida"
    pub destination: String,
    pub budget: String,
    pub start_date: String,
    pub duration: String,
    /// Comma-separated interests, e.g. "art, culture"
    pub interests: String,
}

impl TripForm {
    /// Compose the `NewTrip` body for the given user
    pub fn to_new_trip(&self, user_id: &str) -> Result<NewTrip, FormError> {
        let destination = split_list(&self.destination);
        if destination.is_empty() {
            return Err(FormError::Missing("Destination"));
        }

        let budget = parse_whole("Budget", &self.budget)?;

        let start_date = required("Start date", &self.start_date)?;
        NaiveDate::parse_from_str(start_date, "%Y-%m-%d")
            .map_err(|_| FormError::InvalidDate(start_date.to_string()))?;

        let duration = parse_whole("Duration", &self.duration)?;

        Ok(NewTrip {
            user_id: user_id.to_string(),
            destination,
            budget,
            start_date: start_date.to_string(),
            duration,
            interests: split_list(&self.interests),
        })
    }

    /// Reset every field
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_form() -> TripForm {
        TripForm {
            destination: " Delhi ,Noida,  ".to_string(),
            budget: "10000".to_string(),
            start_date: "2024-11-02".to_string(),
            duration: "5".to_string(),
            interests: "art, culture , history,Club".to_string(),
        }
    }

    #[test]
    fn test_split_list_trims() {
        assert_eq!(split_list("a, b ,c"), vec!["a", "b", "c"]);
        assert_eq!(split_list(" , ,"), Vec::<String>::new());
        assert_eq!(split_list("Goa"), vec!["Goa"]);
    }

    #[test]
    fn test_trip_form_to_new_trip() {
        let trip = sample_form().to_new_trip("42").unwrap();
        assert_eq!(trip.user_id, "42");
        assert_eq!(trip.destination, vec!["Delhi", "Noida"]);
        assert_eq!(trip.interests, vec!["art", "culture", "history", "Club"]);
        assert_eq!(trip.budget, 10000);
        assert_eq!(trip.duration, 5);
        assert_eq!(trip.start_date, "2024-11-02");
    }

    #[test]
    fn test_trip_form_serializes_lists() {
        let trip = sample_form().to_new_trip("42").unwrap();
        let json = serde_json::to_value(&trip).unwrap();
        assert_eq!(json["destination"], serde_json::json!(["Delhi", "Noida"]));
        assert_eq!(json["budget"], serde_json::json!(10000));
    }

    #[test]
    fn test_trip_form_rejects_bad_numbers() {
        let mut form = sample_form();
        form.budget = "10k".to_string();
        assert_eq!(
            form.to_new_trip("1"),
            Err(FormError::NotANumber { field: "Budget", value: "10k".to_string() })
        );

        let mut form = sample_form();
        form.duration = "-3".to_string();
        assert!(matches!(
            form.to_new_trip("1"),
            Err(FormError::NotANumber { field: "Duration", .. })
        ));
    }

    #[test]
    fn test_trip_form_requires_destination_and_date() {
        let mut form = sample_form();
        form.destination = " , ".to_string();
        assert_eq!(form.to_new_trip("1"), Err(FormError::Missing("Destination")));

        let mut form = sample_form();
        form.start_date = "02/11/2024".to_string();
        assert_eq!(
            form.to_new_trip("1"),
            Err(FormError::InvalidDate("02/11/2024".to_string()))
        );
    }

    #[test]
    fn test_trip_form_clear() {
        let mut form = sample_form();
        form.clear();
        assert_eq!(form, TripForm::default());
    }

    #[test]
    fn test_signup_weak_password() {
        let form = SignupForm {
            name: "Asha".to_string(),
            email: "asha@example.com".to_string(),
            password: "password".to_string(),
        };
        match form.to_request() {
            Err(FormError::WeakPassword(missing)) => {
                assert_eq!(missing, vec!["an uppercase letter", "a number", "a special character"]);
            }
            other => panic!("expected weak password, got {:?}", other),
        }
    }

    #[test]
    fn test_signup_ok() {
        let form = SignupForm {
            name: "Asha".to_string(),
            email: "asha@example.com".to_string(),
            password: "Tr1p!Plan".to_string(),
        };
        let request = form.to_request().unwrap();
        assert_eq!(request.name, "Asha");
        assert_eq!(request.password, "Tr1p!Plan");
    }

    #[test]
    fn test_login_requires_fields() {
        let form = LoginForm { email: "  ".to_string(), password: "x".to_string() };
        assert_eq!(form.to_request().unwrap_err(), FormError::Missing("Email"));
    }
}
