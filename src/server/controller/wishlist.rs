use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, wishlist::WishlistItemDto},
    server::{
        error::AppError, middleware::auth::AuthGuard, service::wishlist::WishlistService,
        state::AppState,
    },
};

/// Tag for grouping wishlist endpoints in OpenAPI documentation
pub static WISHLIST_TAG: &str = "wishlist";

/// The current user's wishlist, newest first.
#[utoipa::path(
    get,
    path = "/api/wishlist",
    tag = WISHLIST_TAG,
    responses(
        (status = 200, description = "Wishlist entries with their listings", body = Vec<WishlistItemDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_wishlist(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session, &state.super_admins)
        .require(&[])
        .await?;

    let items = WishlistService::new(&state.db).list(user.id()).await?;

    let dtos: Vec<WishlistItemDto> = items.into_iter().map(|i| i.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Save an approved listing. Saving it twice keeps a single entry.
#[utoipa::path(
    put,
    path = "/api/wishlist/{website_id}",
    tag = WISHLIST_TAG,
    params(
        ("website_id" = i32, Path, description = "Listing ID")
    ),
    responses(
        (status = 200, description = "Listing saved", body = WishlistItemDto),
        (status = 400, description = "Listing is not approved", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Listing not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_to_wishlist(
    State(state): State<AppState>,
    session: Session,
    Path(website_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session, &state.super_admins)
        .require(&[])
        .await?;

    let item = WishlistService::new(&state.db)
        .add(user.id(), website_id)
        .await?;

    Ok((StatusCode::OK, Json(item.into_dto())))
}

/// Remove a listing from the wishlist. Removing a missing entry succeeds.
#[utoipa::path(
    delete,
    path = "/api/wishlist/{website_id}",
    tag = WISHLIST_TAG,
    params(
        ("website_id" = i32, Path, description = "Listing ID")
    ),
    responses(
        (status = 204, description = "Listing removed"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_from_wishlist(
    State(state): State<AppState>,
    session: Session,
    Path(website_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session, &state.super_admins)
        .require(&[])
        .await?;

    WishlistService::new(&state.db)
        .remove(user.id(), website_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
