//! Form Validation
//!
//! Client-side checks that run before any request is sent.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::FormError;

/// Accepted identifier range (16-bit, ids start at 1)
pub const ITEM_ID_RANGE: std::ops::RangeInclusive<i64> = 1..=65_535;

/// Parse a free-text item identifier
pub fn parse_item_id(input: &str) -> Result<u32, FormError> {
    let id: i64 = input
        .trim()
        .parse()
        .map_err(|_| FormError::Invalid("Invalid item id".to_string()))?;
    if !ITEM_ID_RANGE.contains(&id) {
        return Err(FormError::Invalid(
            "The item id must be between 1 and 65535".to_string(),
        ));
    }
    // In range, so the cast cannot truncate
    Ok(id as u32)
}

/// Reject an empty required field
pub fn require(field: &str, value: &str) -> Result<(), FormError> {
    if value.trim().is_empty() {
        Err(FormError::Invalid(format!("Field <{field}> can't be null")))
    } else {
        Ok(())
    }
}

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(
            r#"^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|(".+"))@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z\-0-9]+\.)+[a-zA-Z]{2,}))$"#,
        )
        .expect("email pattern is valid")
    })
}

pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email)
}

/// Login form: both fields present, email well formed
pub fn validate_login(email: &str, password: &str) -> Result<(), FormError> {
    if email.is_empty() || password.is_empty() {
        return Err(FormError::Invalid("Invalid username or password".to_string()));
    }
    if !is_valid_email(email) {
        return Err(FormError::Invalid("Invalid username".to_string()));
    }
    Ok(())
}
