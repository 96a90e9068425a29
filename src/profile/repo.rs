use sqlx::PgPool;
use time::Date;
use uuid::Uuid;

use crate::auth::repo::User;

/// Normalized profile mutation, ready to persist. Concurrent updates to the
/// same user race with last-write-wins; there is no version column.
#[derive(Debug)]
pub struct ProfileChanges {
    pub name: String,
    pub phone_number: String,
    pub currently_renting: bool,
    pub monthly_budget: f64,
    pub move_in_date: Date,
    pub preferred_locations: Vec<String>,
    pub preferred_amenities: Vec<String>,
}

/// Apply `changes` to the user's row, returning the fresh record, or `None`
/// when no such user exists.
pub async fn update(
    db: &PgPool,
    user_id: Uuid,
    changes: &ProfileChanges,
) -> anyhow::Result<Option<User>> {
    let user = sqlx::query_as::<_, User>(
        r#"
        UPDATE users
        SET name = $2, phone_number = $3, currently_renting = $4, monthly_budget = $5,
            move_in_date = $6, preferred_locations = $7, preferred_amenities = $8,
            updated_at = now()
        WHERE id = $1
        RETURNING id, email, password_hash, name, phone_number, currently_renting,
                  monthly_budget, move_in_date, preferred_locations, preferred_amenities,
                  image, created_at, updated_at
        "#,
    )
    .bind(user_id)
    .bind(&changes.name)
    .bind(&changes.phone_number)
    .bind(changes.currently_renting)
    .bind(changes.monthly_budget)
    .bind(changes.move_in_date)
    .bind(&changes.preferred_locations)
    .bind(&changes.preferred_amenities)
    .fetch_optional(db)
    .await?;
    Ok(user)
}
