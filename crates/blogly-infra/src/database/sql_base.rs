use std::marker::PhantomData;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DbConn, EntityTrait, IntoActiveModel, PrimaryKeyTrait,
};

use blogly_core::error::RepoError;
use blogly_core::ports::BaseRepository;

use super::errors::classify;

/// Links a SeaORM entity to the domain types it stores.
pub trait DomainEntity: EntityTrait {
    /// The stored domain entity.
    type Domain: From<Self::Model> + Into<Self::ActiveModel> + Send + Sync + 'static;
    /// The domain entity before the database has assigned its key.
    type New: Into<Self::ActiveModel> + Send + Sync + 'static;
}

/// Generic SQL repository implementation over one SeaORM entity.
pub struct SqlBaseRepository<E>
where
    E: EntityTrait,
{
    pub(crate) db: DbConn,
    _entity: PhantomData<E>,
}

impl<E> SqlBaseRepository<E>
where
    E: EntityTrait,
{
    pub fn new(db: DbConn) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }
}

type KeyOf<E> = <<E as EntityTrait>::PrimaryKey as PrimaryKeyTrait>::ValueType;

#[async_trait]
impl<E> BaseRepository<E::Domain, E::New, KeyOf<E>> for SqlBaseRepository<E>
where
    E: DomainEntity,
    E::Model: IntoActiveModel<E::ActiveModel> + Sync + Send,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + Sync,
    KeyOf<E>: Send + Sync + Copy + std::fmt::Debug + 'static,
{
    async fn find_by_id(&self, id: KeyOf<E>) -> Result<Option<E::Domain>, RepoError> {
        let result = E::find_by_id(id).one(&self.db).await.map_err(classify)?;

        Ok(result.map(Into::into))
    }

    async fn insert(&self, entity: E::New) -> Result<E::Domain, RepoError> {
        let active_model: E::ActiveModel = entity.into();
        let model = active_model.insert(&self.db).await.map_err(classify)?;

        Ok(model.into())
    }

    async fn update(&self, entity: E::Domain) -> Result<E::Domain, RepoError> {
        let active_model: E::ActiveModel = entity.into();
        let model = active_model.update(&self.db).await.map_err(classify)?;

        Ok(model.into())
    }

    async fn delete(&self, id: KeyOf<E>) -> Result<(), RepoError> {
        let result = E::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(classify)?;

        if result.rows_affected == 0 {
            tracing::debug!(?id, "Delete matched no rows");
            return Err(RepoError::NotFound);
        }

        Ok(())
    }
}
