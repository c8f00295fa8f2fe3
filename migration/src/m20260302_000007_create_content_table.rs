use sea_orm_migration::{prelude::*, schema::*};

use super::m20260302_000005_create_purchase_table::Purchase;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Content::Table)
                    .if_not_exists()
                    .col(pk_auto(Content::Id))
                    .col(integer(Content::PurchaseId))
                    .col(integer(Content::AuthorId))
                    .col(string(Content::Title))
                    .col(text(Content::Body))
                    .col(string_null(Content::AnchorText))
                    .col(string_null(Content::TargetUrl))
                    .col(
                        timestamp_with_time_zone(Content::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_content_purchase_id")
                            .from(Content::Table, Content::PurchaseId)
                            .to(Purchase::Table, Purchase::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Content::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Content {
    Table,
    Id,
    PurchaseId,
    AuthorId,
    Title,
    Body,
    AnchorText,
    TargetUrl,
    CreatedAt,
}
