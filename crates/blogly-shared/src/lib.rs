//! # Blogly Shared
//!
//! Form payloads exchanged between the HTML pages and the server,
//! with the normalisation rules every handler applies to them.

pub mod dto;

pub use dto::{FormError, PostForm, TagForm, UserForm};
