use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000002_create_website_table::Website;

/// One row per normalized URL. The primary key is what makes claiming a URL a
/// single atomic insert.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WebsiteUrlClaim::Table)
                    .if_not_exists()
                    .col(string(WebsiteUrlClaim::NormalizedUrl).primary_key())
                    .col(integer(WebsiteUrlClaim::WebsiteId))
                    .col(string_null(WebsiteUrlClaim::ConflictGroupId))
                    .col(
                        timestamp_with_time_zone(WebsiteUrlClaim::ClaimedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_website_url_claim_website_id")
                            .from(WebsiteUrlClaim::Table, WebsiteUrlClaim::WebsiteId)
                            .to(Website::Table, Website::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(WebsiteUrlClaim::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum WebsiteUrlClaim {
    Table,
    NormalizedUrl,
    WebsiteId,
    ConflictGroupId,
    ClaimedAt,
}
