//! # Blogly Server
//!
//! Actix-web application serving the Blogly HTML pages.
//! The binary in `main.rs` wires these modules together; integration tests
//! build the same route table against a throwaway database.

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod state;
pub mod telemetry;
pub mod templates;
