use sea_orm::DatabaseConnection;
use url::Url;

use crate::server::{
    data::{content::ContentRepository, purchase::PurchaseRepository},
    error::{auth::AuthError, AppError},
    model::{
        content::{Content, UploadContentParams},
        purchase::{Purchase, PurchaseStatus},
    },
};

pub struct ContentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ContentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Uploads the article for a paid purchase.
    ///
    /// # Returns
    /// - `Ok(Content)` - The stored content
    /// - `Err(AppError::NotFound)` - No purchase with that ID
    /// - `Err(AppError::AuthErr(AccessDenied))` - Caller is not the buyer
    /// - `Err(AppError::BadRequest)` - Purchase not paid, empty title or body, invalid target URL
    pub async fn upload(&self, params: UploadContentParams) -> Result<Content, AppError> {
        if params.title.trim().is_empty() || params.body.trim().is_empty() {
            return Err(AppError::BadRequest(
                "Title and body are required".to_string(),
            ));
        }
        if let Some(target_url) = &params.target_url {
            Url::parse(target_url)
                .map_err(|e| AppError::BadRequest(format!("Invalid target URL: {}", e)))?;
        }

        let purchase = self.find_purchase(params.purchase_id).await?;
        if purchase.buyer_id != params.author_id {
            return Err(AuthError::AccessDenied(
                params.author_id,
                format!("Only the buyer can upload content for purchase {}", purchase.id),
            )
            .into());
        }
        if purchase.status != PurchaseStatus::Paid {
            return Err(AppError::BadRequest(format!(
                "Content can only be uploaded for paid purchases, purchase {} is {}",
                purchase.id, purchase.status
            )));
        }

        let content = ContentRepository::new(self.db).create(params).await?;

        Ok(Content::from_entity(content))
    }

    /// Gets the content of a purchase for the buyer, the seller or an admin.
    pub async fn list_for_purchase(
        &self,
        user_id: i32,
        is_admin: bool,
        purchase_id: i32,
    ) -> Result<Vec<Content>, AppError> {
        let purchase = self.find_purchase(purchase_id).await?;
        if !purchase.is_party(user_id) && !is_admin {
            return Err(AuthError::AccessDenied(
                user_id,
                format!("User is not a party of purchase {}", purchase_id),
            )
            .into());
        }

        let content = ContentRepository::new(self.db)
            .find_by_purchase(purchase_id)
            .await?;

        Ok(content.into_iter().map(Content::from_entity).collect())
    }

    async fn find_purchase(&self, id: i32) -> Result<Purchase, AppError> {
        let purchase = PurchaseRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Purchase {} not found", id)))?;

        Purchase::from_entity(purchase)
    }
}
