//! Database connection management and repositories.

mod connections;
mod errors;
mod sql_base;
mod sql_repo;

pub mod entity;

pub use connections::{DatabaseConfig, DatabaseConnections};
pub use sql_base::{DomainEntity, SqlBaseRepository};
pub use sql_repo::{SqlPostRepository, SqlTagRepository, SqlUserRepository};
