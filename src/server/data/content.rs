//! Uploaded content repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::content::UploadContentParams;

pub struct ContentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ContentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        params: UploadContentParams,
    ) -> Result<entity::content::Model, DbErr> {
        entity::content::ActiveModel {
            purchase_id: ActiveValue::Set(params.purchase_id),
            author_id: ActiveValue::Set(params.author_id),
            title: ActiveValue::Set(params.title),
            body: ActiveValue::Set(params.body),
            anchor_text: ActiveValue::Set(params.anchor_text),
            target_url: ActiveValue::Set(params.target_url),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Content uploaded for a purchase, oldest first.
    pub async fn find_by_purchase(
        &self,
        purchase_id: i32,
    ) -> Result<Vec<entity::content::Model>, DbErr> {
        entity::prelude::Content::find()
            .filter(entity::content::Column::PurchaseId.eq(purchase_id))
            .order_by_asc(entity::content::Column::CreatedAt)
            .order_by_asc(entity::content::Column::Id)
            .all(self.db)
            .await
    }
}
