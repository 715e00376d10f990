//! Database layer - connection pool, schema bootstrap and repositories
//!
//! # Design Principles
//!
//! - One shared `PgPool`, injected; no global connection
//! - One statement per operation, autocommit, no retries
//! - Every input is a bound parameter
//! - Rely on DB constraints and classify the error

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::{create_pool, create_pool_with_config, create_pool_with_connect_options};
pub use repos::*;
