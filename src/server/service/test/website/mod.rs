use crate::server::{
    data::{url_claim::UrlClaimRepository, website::WebsiteRepository},
    error::{auth::AuthError, AppError},
    model::website::{CreateWebsiteParams, UpdateWebsiteParams, WebsiteStatus},
    service::website::WebsiteService,
};
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod get;
mod review;
mod submit;
mod update;

fn submission(owner_id: i32, url: &str) -> CreateWebsiteParams {
    CreateWebsiteParams {
        owner_id,
        url: url.to_string(),
        name: "Tech Blog".to_string(),
        description: Some("Reviews and tutorials".to_string()),
        category: "technology".to_string(),
        price_cents: 25_000,
        domain_authority: Some(42),
        monthly_traffic: Some(120_000),
    }
}

fn edit(website: &entity::website::Model, price_cents: i64) -> UpdateWebsiteParams {
    UpdateWebsiteParams {
        id: website.id,
        owner_id: website.owner_id,
        name: "Renamed Blog".to_string(),
        description: None,
        category: website.category.clone(),
        price_cents,
        domain_authority: None,
        monthly_traffic: None,
    }
}
