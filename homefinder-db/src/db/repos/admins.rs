//! Admin repository
//!
//! Admins live in their own table with their own id space.

use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};

use crate::error::Result;

/// Admin record from database
///
/// Only `admin_id` is fixed by the deployed schema. `name`, `email` and
/// `password` are assumed to mirror `users`; a table missing any of them
/// fails to decode with `ColumnNotFound`.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Admin {
    pub admin_id: i32,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing, default)]
    pub password: String,
}

/// Admin repository
pub struct AdminRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> AdminRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, admin_id: i32) -> Result<Option<Admin>> {
        let admin = sqlx::query_as::<_, Admin>(
            r#"
            SELECT * FROM admins
            WHERE admin_id = $1
            "#,
        )
        .bind(admin_id)
        .fetch_optional(self.pool)
        .await?;

        Ok(admin)
    }
}
