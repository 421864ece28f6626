//! Input validation helpers shared by the DTO and domain layers

use once_cell::sync::Lazy;
use regex::Regex;

/// Usernames: 3 to 30 characters of letters, digits, `_`, `-` or `.`
pub static USERNAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_.\-]{3,30}$").expect("valid username regex"));

/// Deliberately loose email shape check
pub static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email regex"));

pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const MAX_PASSWORD_LENGTH: usize = 128;

/// Check if a string is not empty after trimming
pub fn not_empty(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Check if a string length (in characters) is within bounds
pub fn length_between(value: &str, min: usize, max: usize) -> bool {
    let len = value.chars().count();
    len >= min && len <= max
}

pub fn is_valid_username(username: &str) -> bool {
    USERNAME_REGEX.is_match(username)
}

pub fn is_valid_email(email: &str) -> bool {
    email.len() <= 255 && EMAIL_REGEX.is_match(email)
}

pub fn is_valid_password(password: &str) -> bool {
    length_between(password, MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH)
}

/// Check if a URL is valid (basic check)
pub fn is_valid_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}
