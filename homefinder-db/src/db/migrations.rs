//! Schema bootstrap for the listings tables
//!
//! Column names match the application's existing schema exactly. Only
//! creates what is missing; never alters existing tables. Foreign keys are
//! plain `REFERENCES`: delete behaviour belongs to the deployed schema.

use sqlx::PgPool;

use crate::error::Result;

/// Create all tables if they don't exist yet.
pub async fn run(pool: &PgPool) -> Result<()> {
    tracing::info!("Running homefinder migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            u_id SERIAL PRIMARY KEY,
            name VARCHAR(255) NOT NULL,
            email VARCHAR(255) NOT NULL UNIQUE,
            password VARCHAR(255) NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS admins (
            admin_id SERIAL PRIMARY KEY,
            name VARCHAR(255) NOT NULL,
            email VARCHAR(255) NOT NULL UNIQUE,
            password VARCHAR(255) NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS properties (
            property_id SERIAL PRIMARY KEY,
            owner_id INTEGER NOT NULL REFERENCES users(u_id),
            title VARCHAR(255) NOT NULL,
            description TEXT,
            photo_url_1 VARCHAR(255),
            photo_url_2 VARCHAR(255),
            photo_url_3 VARCHAR(255),
            photo_url_4 VARCHAR(255),
            photo_url_5 VARCHAR(255),
            price INTEGER NOT NULL CHECK (price >= 0),
            parking_spaces INTEGER NOT NULL DEFAULT 0,
            number_of_bathrooms INTEGER NOT NULL DEFAULT 0,
            number_of_bedrooms INTEGER NOT NULL DEFAULT 0,
            street VARCHAR(255) NOT NULL,
            city VARCHAR(255) NOT NULL,
            province VARCHAR(255) NOT NULL,
            post_code VARCHAR(255) NOT NULL,
            sold BOOLEAN NOT NULL DEFAULT FALSE
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS favourites (
            u_id INTEGER NOT NULL REFERENCES users(u_id),
            property_id INTEGER NOT NULL REFERENCES properties(property_id),
            PRIMARY KEY (u_id, property_id)
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS messages (
            id SERIAL PRIMARY KEY,
            sender_id INTEGER NOT NULL REFERENCES users(u_id),
            receiver_id INTEGER NOT NULL REFERENCES users(u_id),
            content TEXT NOT NULL,
            sent_date DATE NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Indexes for the foreign-key lookups the repos do
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_properties_owner ON properties(owner_id)")
        .execute(pool)
        .await?;
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_properties_price ON properties(price)")
        .execute(pool)
        .await?;
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_messages_receiver ON messages(receiver_id)")
        .execute(pool)
        .await?;

    tracing::info!("Migrations complete");
    Ok(())
}
