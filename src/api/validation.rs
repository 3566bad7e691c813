use super::{ApiError, FlexibleInt};
use crate::constants::trivia::{MAX_DIFFICULTY, MIN_DIFFICULTY};

pub fn validate_id(id: i32, resource: &str) -> Result<i32, ApiError> {
    if id <= 0 {
        return Err(ApiError::validation(format!(
            "Invalid {} ID: {}. ID must be a positive integer",
            resource, id
        )));
    }
    Ok(id)
}

pub fn validate_page(page: Option<u64>) -> u64 {
    page.unwrap_or(1)
}

pub fn require_text(field: &str, value: Option<String>) -> Result<String, ApiError> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(text.trim().to_string()),
        _ => Err(ApiError::validation(format!("Missing field: {}", field))),
    }
}

pub fn require_int(field: &str, value: Option<&FlexibleInt>) -> Result<i32, ApiError> {
    let value = value.ok_or_else(|| ApiError::validation(format!("Missing field: {}", field)))?;
    value
        .as_i32()
        .ok_or_else(|| ApiError::validation(format!("Field {} must be an integer", field)))
}

pub fn validate_difficulty(difficulty: i32) -> Result<i32, ApiError> {
    if !(MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(&difficulty) {
        return Err(ApiError::validation(format!(
            "Invalid difficulty: {}. Difficulty must be between {} and {}",
            difficulty, MIN_DIFFICULTY, MAX_DIFFICULTY
        )));
    }
    Ok(difficulty)
}
