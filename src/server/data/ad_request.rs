//! Ad request repository.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::ad_request::{AdRequestStatus, CreateAdRequestParams};

pub struct AdRequestRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AdRequestRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a pending ad request addressed to the listing's publisher.
    pub async fn create(
        &self,
        params: CreateAdRequestParams,
        publisher_id: i32,
    ) -> Result<entity::ad_request::Model, DbErr> {
        entity::ad_request::ActiveModel {
            website_id: ActiveValue::Set(params.website_id),
            advertiser_id: ActiveValue::Set(params.advertiser_id),
            publisher_id: ActiveValue::Set(publisher_id),
            message: ActiveValue::Set(params.message),
            budget_cents: ActiveValue::Set(params.budget_cents),
            status: ActiveValue::Set(AdRequestStatus::Pending.as_str().to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            responded_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::ad_request::Model>, DbErr> {
        entity::prelude::AdRequest::find_by_id(id).one(self.db).await
    }

    /// Requests sent by an advertiser, newest first.
    pub async fn find_by_advertiser(
        &self,
        advertiser_id: i32,
    ) -> Result<Vec<entity::ad_request::Model>, DbErr> {
        entity::prelude::AdRequest::find()
            .filter(entity::ad_request::Column::AdvertiserId.eq(advertiser_id))
            .order_by_desc(entity::ad_request::Column::CreatedAt)
            .order_by_desc(entity::ad_request::Column::Id)
            .all(self.db)
            .await
    }

    /// Requests received by a publisher, newest first.
    pub async fn find_by_publisher(
        &self,
        publisher_id: i32,
    ) -> Result<Vec<entity::ad_request::Model>, DbErr> {
        entity::prelude::AdRequest::find()
            .filter(entity::ad_request::Column::PublisherId.eq(publisher_id))
            .order_by_desc(entity::ad_request::Column::CreatedAt)
            .order_by_desc(entity::ad_request::Column::Id)
            .all(self.db)
            .await
    }

    /// Records the publisher's answer to a still pending request.
    ///
    /// # Returns
    /// - `Ok(true)` - Answer recorded
    /// - `Ok(false)` - The request was already answered
    /// - `Err(DbErr)` - Database error during update
    pub async fn respond_if_pending(
        &self,
        id: i32,
        status: AdRequestStatus,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::AdRequest::update_many()
            .col_expr(entity::ad_request::Column::Status, Expr::value(status.as_str()))
            .col_expr(
                entity::ad_request::Column::RespondedAt,
                Expr::value(Some(Utc::now())),
            )
            .filter(entity::ad_request::Column::Id.eq(id))
            .filter(entity::ad_request::Column::Status.eq(AdRequestStatus::Pending.as_str()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }
}
