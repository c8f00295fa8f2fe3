use entity::prelude::*;
use sea_orm::{
    sea_query::{Index, IndexCreateStatement, TableCreateStatement},
    EntityTrait, Schema,
};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Tables are created in the order they are added, so entities with foreign keys must be
/// added after the tables they reference.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
///
/// let test = TestBuilder::new()
///     .with_listing_tables()
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed during `build()`.
    tables: Vec<TableCreateStatement>,

    /// CREATE INDEX statements executed after the tables.
    indexes: Vec<IndexCreateStatement>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            indexes: Vec::new(),
        }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using the SQLite
    /// backend, including any foreign keys declared through the entity's relations.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the tables needed for website listings and price conflicts.
    ///
    /// - User
    /// - Website
    /// - WebsiteUrlClaim
    /// - PriceConflictGroup
    pub fn with_listing_tables(self) -> Self {
        self.with_table(User)
            .with_table(Website)
            .with_table(WebsiteUrlClaim)
            .with_table(PriceConflictGroup)
    }

    /// Adds the listing tables plus purchases and uploaded content.
    pub fn with_purchase_tables(self) -> Self {
        self.with_listing_tables()
            .with_table(Purchase)
            .with_table(Content)
    }

    /// Adds every table in the schema.
    pub fn with_all_tables(self) -> Self {
        self.with_purchase_tables()
            .with_table(AdRequest)
            .with_table(WishlistItem)
            .with_index(
                Index::create()
                    .name("idx_wishlist_item_user_website")
                    .table(WishlistItem)
                    .col(entity::wishlist_item::Column::UserId)
                    .col(entity::wishlist_item::Column::WebsiteId)
                    .unique()
                    .to_owned(),
            )
    }

    /// Adds an index created once every table exists.
    ///
    /// Composite unique indexes live in the migrations rather than on the entities, so tests
    /// relying on them add the same index here.
    pub fn with_index(mut self, index: IndexCreateStatement) -> Self {
        self.indexes.push(index);
        self
    }

    /// Builds the test context and creates the configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with an in-memory database and all tables created
    /// - `Err(TestError::Database)` - Failed to connect or create a table
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;
        setup.with_indexes(self.indexes).await?;

        Ok(setup)
    }
}
