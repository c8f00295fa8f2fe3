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
                    .table(Purchase::Table)
                    .if_not_exists()
                    .col(pk_auto(Purchase::Id))
                    .col(integer(Purchase::WebsiteId))
                    .col(integer(Purchase::BuyerId))
                    .col(integer(Purchase::SellerId))
                    .col(big_integer(Purchase::PriceCents))
                    .col(string(Purchase::Placement))
                    .col(string(Purchase::Status).default("pending"))
                    .col(string_null(Purchase::PaymentReference))
                    .col(string_null(Purchase::LiveUrl))
                    .col(text_null(Purchase::Notes))
                    .col(
                        timestamp_with_time_zone(Purchase::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Purchase::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_purchase_website_id")
                            .from(Purchase::Table, Purchase::WebsiteId)
                            .to(Website::Table, Website::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_purchase_buyer_id")
                            .from(Purchase::Table, Purchase::BuyerId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_purchase_seller_id")
                            .from(Purchase::Table, Purchase::SellerId)
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
            .drop_table(Table::drop().table(Purchase::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Purchase {
    Table,
    Id,
    WebsiteId,
    BuyerId,
    SellerId,
    PriceCents,
    Placement,
    Status,
    PaymentReference,
    LiveUrl,
    Notes,
    CreatedAt,
    UpdatedAt,
}
