use once_cell::sync::Lazy;
use regex::Regex;

// local@domain.tld with no whitespace and a single @
pub static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex must compile"));

// Tenant IDs are ASCII alphanumerics only
pub static TENANT_ID_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9]+$").expect("tenant id regex must compile"));

/// Trim and lowercase an email the way it is checked and sent.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(&normalize_email(email))
}

/// True when every character is `[A-Za-z0-9]`. The empty string passes;
/// callers that require a value check emptiness separately.
pub fn is_alphanumeric_id(id: &str) -> bool {
    id.is_empty() || TENANT_ID_REGEX.is_match(id)
}
