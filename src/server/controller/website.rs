use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        website::{CreateWebsiteDto, PaginatedWebsitesDto, UpdateWebsiteDto, WebsiteDto},
    },
    server::{
        controller::{default_entries, PaginationParams},
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::website::{CreateWebsiteParams, MarketplaceFilter, UpdateWebsiteParams},
        service::website::WebsiteService,
        state::AppState,
    },
};

/// Tag for grouping website listing endpoints in OpenAPI documentation
pub static WEBSITE_TAG: &str = "website";

#[derive(Deserialize)]
pub struct MarketplaceParams {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
    pub category: Option<String>,
    pub min_price_cents: Option<i64>,
    pub max_price_cents: Option<i64>,
}

/// Browse the marketplace.
///
/// Returns approved listings, newest first, optionally filtered by category and price.
///
/// # Access Control
/// Public.
#[utoipa::path(
    get,
    path = "/api/websites",
    tag = WEBSITE_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)"),
        ("category" = Option<String>, Query, description = "Only listings in this category"),
        ("min_price_cents" = Option<i64>, Query, description = "Minimum price in cents"),
        ("max_price_cents" = Option<i64>, Query, description = "Maximum price in cents")
    ),
    responses(
        (status = 200, description = "Page of approved listings", body = PaginatedWebsitesDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_marketplace(
    State(state): State<AppState>,
    Query(params): Query<MarketplaceParams>,
) -> Result<impl IntoResponse, AppError> {
    let filter = MarketplaceFilter {
        category: params.category.filter(|c| !c.trim().is_empty()),
        min_price_cents: params.min_price_cents,
        max_price_cents: params.max_price_cents,
    };

    let websites = WebsiteService::new(&state.db)
        .list_marketplace(filter, params.page, params.entries)
        .await?;

    Ok((StatusCode::OK, Json(websites.into_dto())))
}

/// Submit a new listing.
///
/// The URL is normalized and reconciled against existing listings. A listing that shares
/// its URL with another publisher's listing is created in `priceConflict`.
///
/// # Access Control
/// - `Publisher`
///
/// # Returns
/// - `201 Created` - The new listing
/// - `400 Bad Request` - Invalid details, unsupported URL or duplicate of an own listing
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Not a publisher
#[utoipa::path(
    post,
    path = "/api/websites",
    tag = WEBSITE_TAG,
    request_body = CreateWebsiteDto,
    responses(
        (status = 201, description = "Listing submitted", body = WebsiteDto),
        (status = 400, description = "Invalid listing", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a publisher", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn submit_website(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateWebsiteDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session, &state.super_admins)
        .require(&[Permission::Publisher])
        .await?;

    let params = CreateWebsiteParams::from_dto(user.id(), payload);

    let website = WebsiteService::new(&state.db).submit(params).await?;

    Ok((StatusCode::CREATED, Json(website.into_dto())))
}

/// Get a listing.
///
/// # Access Control
/// Approved listings are public. Other listings are visible to their owner and admins.
#[utoipa::path(
    get,
    path = "/api/websites/{id}",
    tag = WEBSITE_TAG,
    params(
        ("id" = i32, Path, description = "Listing ID")
    ),
    responses(
        (status = 200, description = "The listing", body = WebsiteDto),
        (status = 404, description = "Listing not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_website(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state.db, &session, &state.super_admins)
        .current()
        .await?;

    let viewer_id = viewer.as_ref().map(|v| v.id());
    let viewer_is_admin = viewer.as_ref().is_some_and(|v| v.is_admin());

    let website = WebsiteService::new(&state.db)
        .get(id, viewer_id, viewer_is_admin)
        .await?;

    Ok((StatusCode::OK, Json(website.into_dto())))
}

/// Edit an owned listing.
///
/// Changing the price of an approved listing sends it back for review.
///
/// # Access Control
/// - `Publisher` - Owner of the listing
#[utoipa::path(
    put,
    path = "/api/websites/{id}",
    tag = WEBSITE_TAG,
    params(
        ("id" = i32, Path, description = "Listing ID")
    ),
    request_body = UpdateWebsiteDto,
    responses(
        (status = 200, description = "Listing updated", body = WebsiteDto),
        (status = 400, description = "Invalid details or listing in a price conflict", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User does not own the listing", body = ErrorDto),
        (status = 404, description = "Listing not found", body = ErrorDto),
        (status = 409, description = "Listing changed concurrently", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_website(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateWebsiteDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session, &state.super_admins)
        .require(&[Permission::Publisher])
        .await?;

    let params = UpdateWebsiteParams::from_dto(id, user.id(), payload);

    let website = WebsiteService::new(&state.db).update(params).await?;

    Ok((StatusCode::OK, Json(website.into_dto())))
}

/// Delete an owned listing.
///
/// # Access Control
/// - `Publisher` - Owner of the listing
#[utoipa::path(
    delete,
    path = "/api/websites/{id}",
    tag = WEBSITE_TAG,
    params(
        ("id" = i32, Path, description = "Listing ID")
    ),
    responses(
        (status = 204, description = "Listing deleted"),
        (status = 400, description = "Listing is in a price conflict", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User does not own the listing", body = ErrorDto),
        (status = 404, description = "Listing not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_website(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session, &state.super_admins)
        .require(&[Permission::Publisher])
        .await?;

    WebsiteService::new(&state.db).delete(user.id(), id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Send a rejected listing back into review.
///
/// # Access Control
/// - `Publisher` - Owner of the listing
#[utoipa::path(
    post,
    path = "/api/websites/{id}/resubmit",
    tag = WEBSITE_TAG,
    params(
        ("id" = i32, Path, description = "Listing ID")
    ),
    responses(
        (status = 200, description = "Listing resubmitted", body = WebsiteDto),
        (status = 400, description = "Listing is not rejected or duplicates an own listing", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User does not own the listing", body = ErrorDto),
        (status = 404, description = "Listing not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn resubmit_website(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session, &state.super_admins)
        .require(&[Permission::Publisher])
        .await?;

    let website = WebsiteService::new(&state.db).resubmit(user.id(), id).await?;

    Ok((StatusCode::OK, Json(website.into_dto())))
}

/// Get the current publisher's listings in any status.
///
/// # Access Control
/// - `Publisher`
#[utoipa::path(
    get,
    path = "/api/user/websites",
    tag = WEBSITE_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Page of owned listings", body = PaginatedWebsitesDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a publisher", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_owned_websites(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session, &state.super_admins)
        .require(&[Permission::Publisher])
        .await?;

    let websites = WebsiteService::new(&state.db)
        .list_owned(user.id(), params.page, params.entries)
        .await?;

    Ok((StatusCode::OK, Json(websites.into_dto())))
}
