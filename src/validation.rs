//! Password Policy
//!
//! Strength predicate applied before a signup request is sent.

/// Minimum password length
pub const MIN_PASSWORD_LEN: usize = 8;

/// Symbols that satisfy the "special character" rule
pub const SPECIAL_CHARS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Suggestions shown next to the signup password field
pub const PASSWORD_SUGGESTIONS: &[&str] = &[
    "Use at least 8 characters",
    "Include uppercase and lowercase letters",
    "Include numbers",
    "Include special characters (!@#$%^&*(),.?\":{}|<>)",
    "Avoid using personal information",
    "Don't use common words or phrases",
];

/// Result of the five strength checks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordStrength {
    pub min_length: bool,
    pub has_uppercase: bool,
    pub has_lowercase: bool,
    pub has_digit: bool,
    pub has_special: bool,
}

impl PasswordStrength {
    pub fn check(password: &str) -> Self {
        Self {
            min_length: password.chars().count() >= MIN_PASSWORD_LEN,
            has_uppercase: password.chars().any(|c| c.is_ascii_uppercase()),
            has_lowercase: password.chars().any(|c| c.is_ascii_lowercase()),
            has_digit: password.chars().any(|c| c.is_ascii_digit()),
            has_special: password.chars().any(|c| SPECIAL_CHARS.contains(c)),
        }
    }

    /// All five checks pass
    pub fn is_strong(&self) -> bool {
        self.min_length && self.has_uppercase && self.has_lowercase && self.has_digit && self.has_special
    }

    /// Human-readable list of the failed checks
    pub fn failures(&self) -> Vec<&'static str> {
        [
            (self.min_length, "at least 8 characters"),
            (self.has_uppercase, "an uppercase letter"),
            (self.has_lowercase, "a lowercase letter"),
            (self.has_digit, "a number"),
            (self.has_special, "a special character"),
        ]
        .into_iter()
        .filter(|(ok, _)| !ok)
        .map(|(_, label)| label)
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_strong_password(password: &str) -> bool {
        PasswordStrength::check(password).is_strong()
    }

    #[test]
    fn test_strong_password() {
        assert!(is_strong_password("Tr1p!Plan"));
        assert!(PasswordStrength::check("Tr1p!Plan").failures().is_empty());
    }

    #[test]
    fn test_each_rule_rejects() {
        // Each candidate misses exactly one rule
        let cases = [
            ("Tr1p!Pl", "at least 8 characters"),
            ("tr1p!plan", "an uppercase letter"),
            ("TR1P!PLAN", "a lowercase letter"),
            ("Trip!Plan", "a number"),
            ("Tr1pPlann", "a special character"),
        ];

        for (password, missing) in cases {
            let strength = PasswordStrength::check(password);
            assert!(!strength.is_strong(), "{} should be weak", password);
            assert_eq!(strength.failures(), vec![missing], "{}", password);
        }
    }

    #[test]
    fn test_symbols_outside_set_do_not_count() {
        // '-' and '_' are not part of the accepted symbol set
        assert!(!is_strong_password("Tr1p-Plan_"));
        assert!(is_strong_password("Tr1p<Plan>"));
        assert!(is_strong_password("Tr1p\"Plan"));
    }

    #[test]
    fn test_empty_password_fails_everything() {
        assert_eq!(PasswordStrength::check("").failures().len(), 5);
    }
}
