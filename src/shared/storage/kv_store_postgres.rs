use async_trait::async_trait;
use sea_orm::sea_query::OnConflict;
use sea_orm::{DatabaseConnection, EntityTrait, Set};
use serde_json::Value;
use std::sync::Arc;

use crate::shared::storage::{KvStore, KvStoreError};

use entity::{ActiveModel as KvActiveModel, Column as KvColumn, Entity as KvEntity};

mod entity {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
    #[sea_orm(table_name = "kv_store")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub key: String,

        pub value: Json,

        pub created_at: DateTimeWithTimeZone,

        pub updated_at: DateTimeWithTimeZone,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

/// Postgres-backed implementation of `KvStore`.
///
/// One row per document in the `kv_store` table; the document itself is a
/// JSONB column. `set` is an upsert, so a write never depends on whether
/// the key already exists.
#[derive(Debug, Clone)]
pub struct PostgresKvStore {
    db: Arc<DatabaseConnection>,
}

impl PostgresKvStore {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl KvStore for PostgresKvStore {
    async fn get(&self, key: &str) -> Result<Option<Value>, KvStoreError> {
        let model = KvEntity::find_by_id(key.to_string())
            .one(&*self.db)
            .await
            .map_err(|err| KvStoreError::StorageError(err.to_string()))?;

        Ok(model.map(|m| m.value))
    }

    async fn set(&self, key: &str, value: Value) -> Result<(), KvStoreError> {
        let now = chrono::Utc::now();

        let active = KvActiveModel {
            key: Set(key.to_string()),
            value: Set(value),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        };

        KvEntity::insert(active)
            .on_conflict(
                OnConflict::column(KvColumn::Key)
                    .update_columns([KvColumn::Value, KvColumn::UpdatedAt])
                    .to_owned(),
            )
            .exec_without_returning(&*self.db)
            .await
            .map_err(|err| KvStoreError::StorageError(err.to_string()))?;

        Ok(())
    }
}
