//! User profile validation: username and email shape plus length bounds on
//! the optional profile fields, kept in line with the column sizes.

use crate::error::CoreError;

pub const USERNAME_MIN_CHARS: usize = 3;
pub const USERNAME_MAX_CHARS: usize = 50;
pub const EMAIL_MAX_CHARS: usize = 100;
pub const FULL_NAME_MAX_CHARS: usize = 100;
pub const AVATAR_URL_MAX_CHARS: usize = 500;
pub const PHONE_MAX_CHARS: usize = 20;
pub const LOCATION_MAX_CHARS: usize = 100;

fn check_max(field: &'static str, value: &str, max: usize) -> Result<(), CoreError> {
    if value.chars().count() > max {
        return Err(CoreError::Validation(format!(
            "{field} must be at most {max} characters"
        )));
    }
    Ok(())
}

/// Validate a username (length only; uniqueness is a storage concern).
pub fn validate_username(username: &str) -> Result<(), CoreError> {
    let len = username.chars().count();
    if len < USERNAME_MIN_CHARS || len > USERNAME_MAX_CHARS {
        return Err(CoreError::Validation(format!(
            "Username must be between {USERNAME_MIN_CHARS} and {USERNAME_MAX_CHARS} characters"
        )));
    }
    Ok(())
}

/// Validate the shape of an email address.
///
/// Deliberately modest: one `@`, a non-empty local part, and a domain with
/// an interior dot. Deliverability is not this layer's problem.
pub fn validate_email(email: &str) -> Result<(), CoreError> {
    check_max("Email", email, EMAIL_MAX_CHARS)?;

    let invalid = || CoreError::Validation(format!("'{email}' is not a valid email address"));

    if email.chars().any(char::is_whitespace) {
        return Err(invalid());
    }
    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return Err(invalid());
    }
    match domain.split_once('.') {
        Some((host, rest)) if !host.is_empty() && !rest.is_empty() => Ok(()),
        _ => Err(invalid()),
    }
}

pub fn validate_full_name(full_name: &str) -> Result<(), CoreError> {
    check_max("Full name", full_name, FULL_NAME_MAX_CHARS)
}

pub fn validate_avatar_url(avatar_url: &str) -> Result<(), CoreError> {
    check_max("Avatar URL", avatar_url, AVATAR_URL_MAX_CHARS)
}

pub fn validate_phone(phone: &str) -> Result<(), CoreError> {
    check_max("Phone", phone, PHONE_MAX_CHARS)
}

pub fn validate_location(location: &str) -> Result<(), CoreError> {
    check_max("Location", location, LOCATION_MAX_CHARS)
}
