//! Property repository
//!
//! Listing CRUD:
//! - price search: half-open range, cheapest first, one page of 20
//! - detail view: JOIN users for the owner's display name (single query)
//! - sold: unconditional flag update, safe to repeat

use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use tracing::{debug, instrument};

use crate::error::Result;

/// Maximum rows returned by a price-range search.
pub const LISTING_PAGE_LIMIT: i64 = 20;

/// Property record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Property {
    pub property_id: i32,
    pub owner_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub photo_url_1: Option<String>,
    pub photo_url_2: Option<String>,
    pub photo_url_3: Option<String>,
    pub photo_url_4: Option<String>,
    pub photo_url_5: Option<String>,
    pub price: i32,
    pub parking_spaces: i32,
    pub number_of_bathrooms: i32,
    pub number_of_bedrooms: i32,
    pub street: String,
    pub city: String,
    pub province: String,
    pub post_code: String,
    pub sold: bool,
}

impl Property {
    /// Photo URLs that are set, in slot order.
    pub fn photo_urls(&self) -> impl Iterator<Item = &str> {
        [
            &self.photo_url_1,
            &self.photo_url_2,
            &self.photo_url_3,
            &self.photo_url_4,
            &self.photo_url_5,
        ]
        .into_iter()
        .filter_map(|url| url.as_deref())
    }
}

/// Property with its owner's display name, for the detail page
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct PropertyWithOwner {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub property: Property,
    pub owner: String,
}

/// New listing payload
#[derive(Debug, Clone, Deserialize)]
pub struct NewProperty {
    pub owner_id: i32,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub photo_url_1: Option<String>,
    #[serde(default)]
    pub photo_url_2: Option<String>,
    #[serde(default)]
    pub photo_url_3: Option<String>,
    #[serde(default)]
    pub photo_url_4: Option<String>,
    #[serde(default)]
    pub photo_url_5: Option<String>,
    pub price: i32,
    pub parking_spaces: i32,
    pub number_of_bathrooms: i32,
    pub number_of_bedrooms: i32,
    pub street: String,
    pub city: String,
    pub province: String,
    pub post_code: String,
    #[serde(default)]
    pub sold: bool,
}

/// Property repository
pub struct PropertyRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> PropertyRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All listings owned by a user, oldest first.
    pub async fn list_for_owner(&self, owner_id: i32) -> Result<Vec<Property>> {
        let properties = sqlx::query_as::<_, Property>(
            r#"
            SELECT * FROM properties
            WHERE owner_id = $1
            ORDER BY property_id
            "#,
        )
        .bind(owner_id)
        .fetch_all(self.pool)
        .await?;

        Ok(properties)
    }

    /// Single listing with the owner's name attached as `owner`.
    pub async fn find_with_owner(&self, property_id: i32) -> Result<Option<PropertyWithOwner>> {
        let property = sqlx::query_as::<_, PropertyWithOwner>(
            r#"
            SELECT properties.*, users.name AS owner
            FROM properties
            JOIN users ON users.u_id = properties.owner_id
            WHERE property_id = $1
            "#,
        )
        .bind(property_id)
        .fetch_optional(self.pool)
        .await?;

        Ok(property)
    }

    /// Listings with `min_price <= price < max_price`, cheapest first,
    /// capped at [`LISTING_PAGE_LIMIT`].
    pub async fn list_by_price_range(&self, min_price: i32, max_price: i32) -> Result<Vec<Property>> {
        let properties = sqlx::query_as::<_, Property>(
            r#"
            SELECT *
            FROM properties
            WHERE price >= $1 AND price < $2
            ORDER BY price
            LIMIT $3
            "#,
        )
        .bind(min_price)
        .bind(max_price)
        .bind(LISTING_PAGE_LIMIT)
        .fetch_all(self.pool)
        .await?;

        debug!(min_price, max_price, count = properties.len(), "Price range search");
        Ok(properties)
    }

    /// Insert a listing, binding all 17 columns positionally.
    #[instrument(skip(self, property), fields(owner_id = property.owner_id))]
    pub async fn create(&self, property: &NewProperty) -> Result<Property> {
        let created = sqlx::query_as::<_, Property>(
            r#"
            INSERT INTO properties (
                owner_id,
                title,
                description,
                photo_url_1,
                photo_url_2,
                photo_url_3,
                photo_url_4,
                photo_url_5,
                price,
                parking_spaces,
                number_of_bathrooms,
                number_of_bedrooms,
                street,
                city,
                province,
                post_code,
                sold
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17)
            RETURNING *
            "#,
        )
        .bind(property.owner_id)
        .bind(&property.title)
        .bind(&property.description)
        .bind(&property.photo_url_1)
        .bind(&property.photo_url_2)
        .bind(&property.photo_url_3)
        .bind(&property.photo_url_4)
        .bind(&property.photo_url_5)
        .bind(property.price)
        .bind(property.parking_spaces)
        .bind(property.number_of_bathrooms)
        .bind(property.number_of_bedrooms)
        .bind(&property.street)
        .bind(&property.city)
        .bind(&property.province)
        .bind(&property.post_code)
        .bind(property.sold)
        .fetch_one(self.pool)
        .await?;

        Ok(created)
    }

    /// Delete a listing, returning the removed row if there was one.
    #[instrument(skip(self))]
    pub async fn delete(&self, property_id: i32) -> Result<Option<Property>> {
        let deleted = sqlx::query_as::<_, Property>(
            r#"
            DELETE FROM properties
            WHERE property_id = $1
            RETURNING *
            "#,
        )
        .bind(property_id)
        .fetch_optional(self.pool)
        .await?;

        Ok(deleted)
    }

    /// Set `sold = true` regardless of the current value.
    #[instrument(skip(self))]
    pub async fn mark_sold(&self, property_id: i32) -> Result<Option<Property>> {
        let updated = sqlx::query_as::<_, Property>(
            r#"
            UPDATE properties
            SET sold = TRUE
            WHERE property_id = $1
            RETURNING *
            "#,
        )
        .bind(property_id)
        .fetch_optional(self.pool)
        .await?;

        Ok(updated)
    }
}
