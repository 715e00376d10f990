//! Favourite repository
//!
//! Many-to-many join between users and properties. The store's primary key
//! on `(u_id, property_id)` rejects duplicates; no check-then-insert here.

use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use tracing::instrument;

use super::Property;
use crate::error::Result;

/// Favourite record from database
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Favourite {
    pub u_id: i32,
    pub property_id: i32,
}

/// Favourite repository
pub struct FavouriteRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> FavouriteRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Properties a user has favourited.
    pub async fn list_for_user(&self, user_id: i32) -> Result<Vec<Property>> {
        let properties = sqlx::query_as::<_, Property>(
            r#"
            SELECT p.property_id,owner_id,title,description,photo_url_1,photo_url_2,photo_url_3,photo_url_4,price,parking_spaces,number_of_bathrooms,number_of_bedrooms,street,city,province,post_code,sold,photo_url_5
            FROM properties AS p
            JOIN favourites AS f ON f.property_id = p.property_id
            WHERE f.u_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(properties)
    }

    /// Favourite a property.
    ///
    /// Adding the same pair twice fails with `DbError::Conflict`.
    #[instrument(skip(self))]
    pub async fn add(&self, user_id: i32, property_id: i32) -> Result<Favourite> {
        let favourite = sqlx::query_as::<_, Favourite>(
            r#"
            INSERT INTO favourites (u_id, property_id)
            VALUES ($1, $2)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(property_id)
        .fetch_one(self.pool)
        .await?;

        Ok(favourite)
    }

    /// Remove a favourite by exact pair. `None` if the pair wasn't there.
    #[instrument(skip(self))]
    pub async fn remove(&self, user_id: i32, property_id: i32) -> Result<Option<Favourite>> {
        let removed = sqlx::query_as::<_, Favourite>(
            r#"
            DELETE FROM favourites
            WHERE u_id = $1 AND property_id = $2
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(property_id)
        .fetch_optional(self.pool)
        .await?;

        Ok(removed)
    }
}
