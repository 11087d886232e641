use std::fmt;

use serde::{Deserialize, Serialize};

/// User entity - the author who owns posts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub image_url: Option<String>,
}

impl User {
    /// First and last name joined by a single space.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "User(id={}, name={:?})", self.id, self.full_name())
    }
}

/// A user that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub image_url: Option<String>,
}

impl NewUser {
    pub fn new(first_name: String, last_name: String, image_url: Option<String>) -> Self {
        Self {
            first_name,
            last_name,
            image_url,
        }
    }
}
