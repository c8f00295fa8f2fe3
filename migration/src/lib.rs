pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_user_table;
mod m20260301_000002_create_website_table;
mod m20260301_000003_create_website_url_claim_table;
mod m20260301_000004_create_price_conflict_group_table;
mod m20260302_000005_create_purchase_table;
mod m20260302_000006_create_ad_request_table;
mod m20260302_000007_create_content_table;
mod m20260303_000008_create_wishlist_item_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_user_table::Migration),
            Box::new(m20260301_000002_create_website_table::Migration),
            Box::new(m20260301_000003_create_website_url_claim_table::Migration),
            Box::new(m20260301_000004_create_price_conflict_group_table::Migration),
            Box::new(m20260302_000005_create_purchase_table::Migration),
            Box::new(m20260302_000006_create_ad_request_table::Migration),
            Box::new(m20260302_000007_create_content_table::Migration),
            Box::new(m20260303_000008_create_wishlist_item_table::Migration),
        ]
    }
}
