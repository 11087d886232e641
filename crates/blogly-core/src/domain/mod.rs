//! Domain entities - the core business objects.

mod user;

mod post;

mod tag;

pub use post::{NewPost, Post};
pub use tag::{NewTag, Tag};
pub use user::{NewUser, User};
