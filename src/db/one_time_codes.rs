use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::OneTimeCode;

pub async fn create(
    pool: &PgPool,
    email: &str,
    code: &str,
    expires_at: DateTime<Utc>,
) -> Result<OneTimeCode, sqlx::Error> {
    sqlx::query_as::<_, OneTimeCode>(
        "INSERT INTO one_time_codes (email, code, expires_at)
         VALUES ($1, $2, $3) RETURNING *",
    )
    .bind(email)
    .bind(code)
    .bind(expires_at)
    .fetch_one(pool)
    .await
}

pub async fn find_valid(
    pool: &PgPool,
    email: &str,
    code: &str,
) -> Result<Option<OneTimeCode>, sqlx::Error> {
    sqlx::query_as::<_, OneTimeCode>(
        "SELECT * FROM one_time_codes
         WHERE email = $1 AND code = $2 AND expires_at > now()",
    )
    .bind(email)
    .bind(code)
    .fetch_optional(pool)
    .await
}

pub async fn delete(pool: &PgPool, id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM one_time_codes WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}
