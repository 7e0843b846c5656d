use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A pending password-reset code. Deleted once redeemed; several may be
/// outstanding for the same email at once.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct OneTimeCode {
    pub id: Uuid,
    pub email: String,
    pub code: String,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}
