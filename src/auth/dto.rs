use jsonwebtoken::{DecodingKey, EncodingKey};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use time::{Date, OffsetDateTime};
use uuid::Uuid;
use validator::Validate;

use crate::auth::repo::User;

lazy_static! {
    pub(crate) static ref PHONE_RE: Regex = Regex::new(r"^[0-9()+\-.\s]{10,20}$").unwrap();
}

/// Request body for signup. Field names on the wire are camelCase.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    pub name: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
    #[validate(regex(path = "PHONE_RE", message = "Invalid phone number"))]
    pub phone_number: String,
    pub currently_renting: bool,
    #[validate(range(min = 0.0, message = "Budget must be positive"))]
    pub monthly_budget: f64,
    pub move_in_date: Date,
    #[serde(default)]
    pub preferred_locations: Vec<String>,
    #[serde(default)]
    pub preferred_amenities: Vec<String>,
}

/// Request body for credential sign-in.
#[derive(Debug, Deserialize)]
pub struct SigninRequest {
    pub email: String,
    pub password: String,
}

/// Response returned after a successful sign-in.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: SessionUser,
}

/// The minimal public projection embedded in the session token and returned
/// to the client on sign-in.
#[derive(Debug, Serialize)]
pub struct SessionUser {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub image: Option<String>,
}

impl From<&User> for SessionUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            name: user.name.clone(),
            image: user.image.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SignupResponse {
    pub message: String,
    pub user: UserResponse,
}

/// A full user record as returned to its owner. The password hash is not a
/// field here, so it cannot leak by serialization.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub phone_number: String,
    pub currently_renting: bool,
    pub monthly_budget: f64,
    pub move_in_date: Date,
    pub preferred_locations: Vec<String>,
    pub preferred_amenities: Vec<String>,
    pub image: Option<String>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
            phone_number: user.phone_number,
            currently_renting: user.currently_renting,
            monthly_budget: user.monthly_budget,
            move_in_date: user.move_in_date,
            preferred_locations: user.preferred_locations,
            preferred_amenities: user.preferred_amenities,
            image: user.image,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Session token claims.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,   // user ID
    pub email: String,
    pub name: String,
    pub iat: usize,  // issued at
    pub exp: usize,  // expiration time
    pub iss: String, // issuer
    pub aud: String, // audience
}

/// JWT signing and verification keys plus token policy.
#[derive(Clone)]
pub struct JwtKeys {
    pub encoding: EncodingKey,
    pub decoding: DecodingKey,
    pub issuer: String,
    pub audience: String,
    pub session_ttl: Duration,
}
