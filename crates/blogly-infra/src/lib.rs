//! # Blogly Infrastructure
//!
//! Concrete implementations of the ports defined in `blogly-core`,
//! backed by a relational database through SeaORM.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL connections
//! - `sqlite` - SQLite connections, used for disposable test databases

pub mod database;

pub use database::{
    DatabaseConfig, DatabaseConnections, SqlPostRepository, SqlTagRepository, SqlUserRepository,
};
