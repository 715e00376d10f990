//! User repository
//!
//! Lookups by email and id, registration, and the alphabetical listing that
//! feeds the message recipient picker.

use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use tracing::{debug, instrument};

use crate::error::Result;

/// User record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct User {
    pub u_id: i32,
    pub name: String,
    pub email: String,
    /// Stored exactly as supplied; hashing is the caller's job.
    #[serde(skip_serializing, default)]
    pub password: String,
}

/// Registration payload
#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// User repository
pub struct UserRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Find a user by exact email match.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        debug!(email, "Looking up user by email");

        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT * FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(self.pool)
        .await?;

        Ok(user)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT * FROM users
            WHERE u_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(user)
    }

    /// Insert a user and return the stored row with its generated id.
    ///
    /// A duplicate email surfaces as `DbError::Conflict`.
    #[instrument(skip(self, user), fields(email = %user.email))]
    pub async fn create(&self, user: &NewUser) -> Result<User> {
        let created = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, email, password)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password)
        .fetch_one(self.pool)
        .await?;

        Ok(created)
    }

    /// Every user, sorted by name ascending.
    pub async fn list_ordered_by_name(&self) -> Result<Vec<User>> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT * FROM users
            ORDER BY name ASC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        debug!(count = users.len(), "Listed users");
        Ok(users)
    }
}
