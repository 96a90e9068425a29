use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::{Date, OffsetDateTime};
use uuid::Uuid;

use crate::auth::dto::SignupRequest;

/// User record in the database.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String, // argon2 PHC string, never exposed in JSON
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

const USER_COLUMNS: &str = r#"
    id, email, password_hash, name, phone_number, currently_renting,
    monthly_budget, move_in_date, preferred_locations, preferred_amenities,
    image, created_at, updated_at
"#;

impl User {
    /// Find a user by (already lowercased) email.
    pub async fn find_by_email(db: &PgPool, email: &str) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(db)
        .await?;
        Ok(user)
    }

    pub async fn find_by_id(db: &PgPool, id: Uuid) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(db)
        .await?;
        Ok(user)
    }

    /// Create a new user with an already-hashed password.
    pub async fn create(
        db: &PgPool,
        data: &SignupRequest,
        password_hash: &str,
    ) -> anyhow::Result<User> {
        let user = sqlx::query_as::<_, User>(&format!(
            r#"
            INSERT INTO users (email, password_hash, name, phone_number, currently_renting,
                               monthly_budget, move_in_date, preferred_locations, preferred_amenities)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(&data.email)
        .bind(password_hash)
        .bind(&data.name)
        .bind(&data.phone_number)
        .bind(data.currently_renting)
        .bind(data.monthly_budget)
        .bind(data.move_in_date)
        .bind(&data.preferred_locations)
        .bind(&data.preferred_amenities)
        .fetch_one(db)
        .await?;
        Ok(user)
    }
}
