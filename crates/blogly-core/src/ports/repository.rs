use async_trait::async_trait;

use crate::domain::{NewPost, NewTag, NewUser, Post, Tag, User};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
///
/// `T` is the stored entity, `N` its not-yet-stored form, `ID` the key type.
#[async_trait]
pub trait BaseRepository<T, N, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Insert a new entity; the storage layer assigns its ID.
    async fn insert(&self, entity: N) -> Result<T, RepoError>;

    /// Overwrite an existing entity. Fails with `NotFound` if the row is gone.
    async fn update(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// User repository with domain-specific methods.
#[async_trait]
pub trait UserRepository: BaseRepository<User, NewUser, i32> {
    /// All users, ordered by last name then first name.
    async fn find_all(&self) -> Result<Vec<User>, RepoError>;

    /// Posts written by a user, newest first.
    async fn list_posts_for_user(&self, user_id: i32) -> Result<Vec<Post>, RepoError>;
}

/// Post repository.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, NewPost, i32> {
    /// Tags attached to a post, ordered by name.
    async fn list_tags_for_post(&self, post_id: i32) -> Result<Vec<Tag>, RepoError>;

    /// Insert a post together with its tag links in one transaction.
    async fn create_with_tags(&self, post: NewPost, tag_ids: &[i32]) -> Result<Post, RepoError>;

    /// Update a post and replace its tag links in one transaction.
    async fn update_with_tags(&self, post: Post, tag_ids: &[i32]) -> Result<Post, RepoError>;
}

/// Tag repository.
#[async_trait]
pub trait TagRepository: BaseRepository<Tag, NewTag, i32> {
    /// All tags, ordered by name.
    async fn find_all(&self) -> Result<Vec<Tag>, RepoError>;

    /// Tags with the given IDs. Unknown IDs are skipped.
    async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<Tag>, RepoError>;

    /// Posts carrying a tag, newest first.
    async fn list_posts_for_tag(&self, tag_id: i32) -> Result<Vec<Post>, RepoError>;
}
