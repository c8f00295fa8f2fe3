use sea_orm::DatabaseConnection;

use crate::server::{
    data::{ad_request::AdRequestRepository, website::WebsiteRepository},
    error::{auth::AuthError, AppError},
    model::{
        ad_request::{AdRequest, AdRequestStatus, CreateAdRequestParams},
        website::{Website, WebsiteStatus},
    },
};

pub struct AdRequestService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AdRequestService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Sends an ad request to the publisher of an approved listing.
    ///
    /// # Returns
    /// - `Ok(AdRequest)` - The pending request
    /// - `Err(AppError::NotFound)` - No listing with that ID
    /// - `Err(AppError::BadRequest)` - Empty message, negative budget, listing not approved,
    ///   or the advertiser owns the listing
    pub async fn create(&self, params: CreateAdRequestParams) -> Result<AdRequest, AppError> {
        if params.message.trim().is_empty() {
            return Err(AppError::BadRequest("A message is required".to_string()));
        }
        if params.budget_cents.is_some_and(|b| b < 0) {
            return Err(AppError::BadRequest(
                "Budget can't be negative".to_string(),
            ));
        }

        let website = WebsiteRepository::new(self.db)
            .find_by_id(params.website_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Website {} not found", params.website_id))
            })?;
        let website = Website::from_entity(website)?;

        if website.status != WebsiteStatus::Approved {
            return Err(AppError::BadRequest(format!(
                "Website {} is not accepting ad requests",
                website.id
            )));
        }
        if website.owner_id == params.advertiser_id {
            return Err(AppError::BadRequest(
                "You can't send an ad request to your own listing".to_string(),
            ));
        }

        let request = AdRequestRepository::new(self.db)
            .create(params, website.owner_id)
            .await?;

        tracing::debug!(
            "Ad request {} sent to publisher {} for website {}",
            request.id,
            request.publisher_id,
            request.website_id
        );

        AdRequest::from_entity(request)
    }

    pub async fn list_sent(&self, advertiser_id: i32) -> Result<Vec<AdRequest>, AppError> {
        let requests = AdRequestRepository::new(self.db)
            .find_by_advertiser(advertiser_id)
            .await?;

        AdRequest::from_entities(requests)
    }

    pub async fn list_received(&self, publisher_id: i32) -> Result<Vec<AdRequest>, AppError> {
        let requests = AdRequestRepository::new(self.db)
            .find_by_publisher(publisher_id)
            .await?;

        AdRequest::from_entities(requests)
    }

    /// Accepts or declines a request addressed to `publisher_id`.
    ///
    /// # Returns
    /// - `Ok(AdRequest)` - The answered request
    /// - `Err(AppError::NotFound)` - No request with that ID
    /// - `Err(AppError::AuthErr(AccessDenied))` - The request went to another publisher
    /// - `Err(AppError::Conflict)` - The request was already answered
    pub async fn respond(
        &self,
        publisher_id: i32,
        id: i32,
        accept: bool,
    ) -> Result<AdRequest, AppError> {
        let repo = AdRequestRepository::new(self.db);

        let request = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Ad request {} not found", id)))?;

        if request.publisher_id != publisher_id {
            return Err(AuthError::AccessDenied(
                publisher_id,
                format!("Ad request {} was sent to another publisher", id),
            )
            .into());
        }

        let status = if accept {
            AdRequestStatus::Accepted
        } else {
            AdRequestStatus::Declined
        };

        if !repo.respond_if_pending(id, status).await? {
            return Err(AppError::Conflict(format!(
                "Ad request {} has already been answered",
                id
            )));
        }

        let request = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Ad request {} not found", id)))?;

        AdRequest::from_entity(request)
    }
}
