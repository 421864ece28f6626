//! Account field rules shared by registration and profile updates

use bnb_shared::validation::{is_valid_email, is_valid_username};

use crate::errors::ValidationError;

pub(crate) fn validate_username(username: &str) -> Result<(), ValidationError> {
    if username.trim().is_empty() {
        return Err(ValidationError::RequiredField {
            field: "username".to_string(),
        });
    }
    if !is_valid_username(username) {
        return Err(ValidationError::InvalidFormat {
            field: "username".to_string(),
        });
    }
    Ok(())
}

/// Trim and lowercase an email, then check its shape
pub(crate) fn normalize_email(email: &str) -> Result<String, ValidationError> {
    let email = email.trim().to_lowercase();
    if email.is_empty() {
        return Err(ValidationError::RequiredField {
            field: "email".to_string(),
        });
    }
    if !is_valid_email(&email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(email)
}
