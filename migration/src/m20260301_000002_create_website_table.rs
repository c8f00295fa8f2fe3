use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Website::Table)
                    .if_not_exists()
                    .col(pk_auto(Website::Id))
                    .col(integer(Website::OwnerId))
                    .col(string(Website::Url))
                    .col(string(Website::NormalizedUrl))
                    .col(string(Website::Name))
                    .col(text_null(Website::Description))
                    .col(string(Website::Category))
                    .col(big_integer(Website::PriceCents))
                    .col(integer_null(Website::DomainAuthority))
                    .col(big_integer_null(Website::MonthlyTraffic))
                    .col(string(Website::Status).default("pending"))
                    .col(boolean(Website::IsOriginal).default(false))
                    .col(string_null(Website::ConflictGroupId))
                    .col(integer_null(Website::ConflictsWithId))
                    .col(string_null(Website::RejectionReason))
                    .col(
                        timestamp_with_time_zone(Website::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Website::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_website_owner_id")
                            .from(Website::Table, Website::OwnerId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_website_normalized_url")
                    .table(Website::Table)
                    .col(Website::NormalizedUrl)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_website_status")
                    .table(Website::Table)
                    .col(Website::Status)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Website::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Website {
    Table,
    Id,
    OwnerId,
    Url,
    NormalizedUrl,
    Name,
    Description,
    Category,
    PriceCents,
    DomainAuthority,
    MonthlyTraffic,
    Status,
    IsOriginal,
    ConflictGroupId,
    ConflictsWithId,
    RejectionReason,
    CreatedAt,
    UpdatedAt,
}
