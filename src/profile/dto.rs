use serde::Deserialize;
use time::Date;
use validator::Validate;

/// Profile-update payload: same shape constraints as signup minus
/// email/password, with the two preference lists arriving as
/// comma-separated strings.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    pub name: String,
    #[validate(regex(path = "crate::auth::dto::PHONE_RE", message = "Invalid phone number"))]
    pub phone_number: String,
    pub currently_renting: bool,
    #[validate(range(min = 0.0, message = "Budget must be positive"))]
    pub monthly_budget: f64,
    pub move_in_date: Date,
    pub preferred_locations: String,
    pub preferred_amenities: String,
}

/// Split a comma-separated field into trimmed entries. Empty entries from
/// doubled or trailing commas are kept: the stored list round-trips exactly
/// what the client typed.
pub fn split_csv(raw: &str) -> Vec<String> {
    raw.split(',').map(|part| part.trim().to_string()).collect()
}
