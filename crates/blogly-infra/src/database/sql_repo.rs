//! SQL repository implementations.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseTransaction, EntityTrait, QueryFilter, QueryOrder,
    Set, TransactionTrait,
};

use blogly_core::domain::{NewPost, Post, Tag, User};
use blogly_core::error::RepoError;
use blogly_core::ports::{PostRepository, TagRepository, UserRepository};

use super::entity::post::{self, Entity as PostEntity};
use super::entity::post_tag::{self, Entity as PostTagEntity};
use super::entity::tag::{self, Entity as TagEntity};
use super::entity::user::{self, Entity as UserEntity};
use super::errors::classify;
use super::sql_base::SqlBaseRepository;

/// SQL user repository.
pub type SqlUserRepository = SqlBaseRepository<UserEntity>;

/// SQL post repository.
pub type SqlPostRepository = SqlBaseRepository<PostEntity>;

/// SQL tag repository.
pub type SqlTagRepository = SqlBaseRepository<TagEntity>;

#[async_trait]
impl UserRepository for SqlUserRepository {
    async fn find_all(&self) -> Result<Vec<User>, RepoError> {
        let result = UserEntity::find()
            .order_by_asc(user::Column::LastName)
            .order_by_asc(user::Column::FirstName)
            .order_by_asc(user::Column::Id)
            .all(&self.db)
            .await
            .map_err(classify)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn list_posts_for_user(&self, user_id: i32) -> Result<Vec<Post>, RepoError> {
        tracing::debug!(user_id, "Listing posts for user");

        let result = PostEntity::find()
            .filter(post::Column::UserId.eq(user_id))
            .order_by_desc(post::Column::CreatedAt)
            .order_by_desc(post::Column::Id)
            .all(&self.db)
            .await
            .map_err(classify)?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}

#[async_trait]
impl PostRepository for SqlPostRepository {
    async fn list_tags_for_post(&self, post_id: i32) -> Result<Vec<Tag>, RepoError> {
        let result = TagEntity::find()
            .inner_join(PostTagEntity)
            .filter(post_tag::Column::PostId.eq(post_id))
            .order_by_asc(tag::Column::Name)
            .all(&self.db)
            .await
            .map_err(classify)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn create_with_tags(&self, post: NewPost, tag_ids: &[i32]) -> Result<Post, RepoError> {
        let txn = self.db.begin().await.map_err(classify)?;

        let staged = async {
            let model = post::ActiveModel::from(post)
                .insert(&txn)
                .await
                .map_err(classify)?;
            link_tags(&txn, model.id, tag_ids).await?;
            Ok::<_, RepoError>(model)
        }
        .await;

        let model = finish(txn, staged).await?;
        tracing::debug!(post_id = model.id, tags = tag_ids.len(), "Post created with tags");

        Ok(model.into())
    }

    async fn update_with_tags(&self, post: Post, tag_ids: &[i32]) -> Result<Post, RepoError> {
        let txn = self.db.begin().await.map_err(classify)?;

        let staged = async {
            let model = post::ActiveModel::from(post)
                .update(&txn)
                .await
                .map_err(classify)?;
            PostTagEntity::delete_many()
                .filter(post_tag::Column::PostId.eq(model.id))
                .exec(&txn)
                .await
                .map_err(classify)?;
            link_tags(&txn, model.id, tag_ids).await?;
            Ok::<_, RepoError>(model)
        }
        .await;

        let model = finish(txn, staged).await?;

        Ok(model.into())
    }
}

/// Commit `txn` if every staged write succeeded, roll it back otherwise.
async fn finish<T>(txn: DatabaseTransaction, staged: Result<T, RepoError>) -> Result<T, RepoError> {
    match staged {
        Ok(value) => {
            txn.commit().await.map_err(classify)?;
            Ok(value)
        }
        Err(err) => {
            tracing::debug!(error = %err, "Rolling back transaction");
            txn.rollback().await.map_err(classify)?;
            Err(err)
        }
    }
}

/// Insert one association row per distinct tag ID.
async fn link_tags(
    txn: &DatabaseTransaction,
    post_id: i32,
    tag_ids: &[i32],
) -> Result<(), RepoError> {
    let mut ids = tag_ids.to_vec();
    ids.sort_unstable();
    ids.dedup();

    if ids.is_empty() {
        return Ok(());
    }

    let links = ids.into_iter().map(|tag_id| post_tag::ActiveModel {
        post_id: Set(post_id),
        tag_id: Set(tag_id),
    });
    PostTagEntity::insert_many(links)
        .exec_without_returning(txn)
        .await
        .map_err(classify)?;

    Ok(())
}

#[async_trait]
impl TagRepository for SqlTagRepository {
    async fn find_all(&self) -> Result<Vec<Tag>, RepoError> {
        let result = TagEntity::find()
            .order_by_asc(tag::Column::Name)
            .all(&self.db)
            .await
            .map_err(classify)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<Tag>, RepoError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let result = TagEntity::find()
            .filter(tag::Column::Id.is_in(ids.iter().copied()))
            .order_by_asc(tag::Column::Name)
            .all(&self.db)
            .await
            .map_err(classify)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn list_posts_for_tag(&self, tag_id: i32) -> Result<Vec<Post>, RepoError> {
        let result = PostEntity::find()
            .inner_join(PostTagEntity)
            .filter(post_tag::Column::TagId.eq(tag_id))
            .order_by_desc(post::Column::CreatedAt)
            .order_by_desc(post::Column::Id)
            .all(&self.db)
            .await
            .map_err(classify)?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}
