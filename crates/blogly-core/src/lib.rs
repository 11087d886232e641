//! # Blogly Core
//!
//! The domain layer of Blogly: users, their posts, and the tags attached to them.
//! This crate contains plain entities and repository ports with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::{DomainError, RepoError};
