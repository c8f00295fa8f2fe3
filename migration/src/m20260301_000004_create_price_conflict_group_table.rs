use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PriceConflictGroup::Table)
                    .if_not_exists()
                    .col(string(PriceConflictGroup::Id).primary_key())
                    .col(string(PriceConflictGroup::NormalizedUrl))
                    .col(integer(PriceConflictGroup::OriginalWebsiteId))
                    .col(string(PriceConflictGroup::Status).default("open"))
                    .col(integer_null(PriceConflictGroup::WinnerWebsiteId))
                    .col(integer_null(PriceConflictGroup::ResolvedBy))
                    .col(timestamp_with_time_zone_null(PriceConflictGroup::ResolvedAt))
                    .col(
                        timestamp_with_time_zone(PriceConflictGroup::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_price_conflict_group_status")
                    .table(PriceConflictGroup::Table)
                    .col(PriceConflictGroup::Status)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PriceConflictGroup::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PriceConflictGroup {
    Table,
    Id,
    NormalizedUrl,
    OriginalWebsiteId,
    Status,
    WinnerWebsiteId,
    ResolvedBy,
    ResolvedAt,
    CreatedAt,
}
