use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260301_000001_create_user_table::User, m20260301_000002_create_website_table::Website,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AdRequest::Table)
                    .if_not_exists()
                    .col(pk_auto(AdRequest::Id))
                    .col(integer(AdRequest::WebsiteId))
                    .col(integer(AdRequest::AdvertiserId))
                    .col(integer(AdRequest::PublisherId))
                    .col(text(AdRequest::Message))
                    .col(big_integer_null(AdRequest::BudgetCents))
                    .col(string(AdRequest::Status).default("pending"))
                    .col(
                        timestamp_with_time_zone(AdRequest::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_with_time_zone_null(AdRequest::RespondedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ad_request_website_id")
                            .from(AdRequest::Table, AdRequest::WebsiteId)
                            .to(Website::Table, Website::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ad_request_advertiser_id")
                            .from(AdRequest::Table, AdRequest::AdvertiserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AdRequest::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum AdRequest {
    Table,
    Id,
    WebsiteId,
    AdvertiserId,
    PublisherId,
    Message,
    BudgetCents,
    Status,
    CreatedAt,
    RespondedAt,
}
