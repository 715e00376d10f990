//! Message repository
//!
//! Direct messages between users. `sent_date` is a calendar date stamped
//! at send time from the server's local clock.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use tracing::{debug, instrument};

use crate::error::Result;

/// Message record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Message {
    pub id: i32,
    pub sender_id: i32,
    pub receiver_id: i32,
    pub content: String,
    pub sent_date: NaiveDate,
}

/// Compose-form payload
#[derive(Debug, Clone, Deserialize)]
pub struct NewMessage {
    pub sender_id: i32,
    pub receiver_id: i32,
    pub content: String,
}

/// Today's date on the server's local clock.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Message repository
pub struct MessageRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> MessageRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Inbox for a user: every message they received.
    pub async fn list_for_recipient(&self, user_id: i32) -> Result<Vec<Message>> {
        let messages = sqlx::query_as::<_, Message>(
            r#"
            SELECT * FROM messages
            WHERE receiver_id = $1
            ORDER BY id
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        debug!(user_id, count = messages.len(), "Loaded inbox");
        Ok(messages)
    }

    /// Send a message stamped with today's date.
    pub async fn send(&self, message: &NewMessage) -> Result<Message> {
        self.send_on(message, today()).await
    }

    /// Send a message with an explicit `sent_date`.
    #[instrument(skip(self, message), fields(sender_id = message.sender_id, receiver_id = message.receiver_id))]
    pub async fn send_on(&self, message: &NewMessage, sent_date: NaiveDate) -> Result<Message> {
        let sent = sqlx::query_as::<_, Message>(
            r#"
            INSERT INTO messages (sender_id, receiver_id, content, sent_date)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(message.sender_id)
        .bind(message.receiver_id)
        .bind(&message.content)
        .bind(sent_date)
        .fetch_one(self.pool)
        .await?;

        Ok(sent)
    }

    /// Delete a message, returning the removed row if there was one.
    #[instrument(skip(self))]
    pub async fn delete(&self, message_id: i32) -> Result<Option<Message>> {
        let deleted = sqlx::query_as::<_, Message>(
            r#"
            DELETE FROM messages
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(message_id)
        .fetch_optional(self.pool)
        .await?;

        Ok(deleted)
    }
}
