use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        content::{ContentDto, UploadContentDto},
        purchase::{CompletePurchaseDto, CreatePurchaseDto, PayPurchaseDto, PurchaseDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{content::UploadContentParams, purchase::CreatePurchaseParams},
        service::{content::ContentService, purchase::PurchaseService},
        state::AppState,
    },
};

/// Tag for grouping purchase endpoints in OpenAPI documentation
pub static PURCHASE_TAG: &str = "purchase";

/// Buy a placement on an approved listing.
///
/// The listing's current price is stored on the purchase.
///
/// # Access Control
/// - `Advertiser`
///
/// # Returns
/// - `201 Created` - The pending purchase
/// - `400 Bad Request` - Unknown placement, listing not approved or owned by the buyer
/// - `404 Not Found` - Listing doesn't exist
#[utoipa::path(
    post,
    path = "/api/purchases",
    tag = PURCHASE_TAG,
    request_body = CreatePurchaseDto,
    responses(
        (status = 201, description = "Purchase created", body = PurchaseDto),
        (status = 400, description = "Invalid purchase", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an advertiser", body = ErrorDto),
        (status = 404, description = "Listing not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_purchase(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreatePurchaseDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session, &state.super_admins)
        .require(&[Permission::Advertiser])
        .await?;

    let params = CreatePurchaseParams::from_dto(user.id(), payload)?;

    let purchase = PurchaseService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(purchase.into_dto())))
}

/// Purchases made by the current user, newest first.
#[utoipa::path(
    get,
    path = "/api/purchases/bought",
    tag = PURCHASE_TAG,
    responses(
        (status = 200, description = "Purchases made by the user", body = Vec<PurchaseDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_bought_purchases(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session, &state.super_admins)
        .require(&[])
        .await?;

    let purchases = PurchaseService::new(&state.db)
        .list_bought(user.id())
        .await?;

    let dtos: Vec<PurchaseDto> = purchases.into_iter().map(|p| p.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Purchases of the current publisher's listings, newest first.
///
/// # Access Control
/// - `Publisher`
#[utoipa::path(
    get,
    path = "/api/purchases/sold",
    tag = PURCHASE_TAG,
    responses(
        (status = 200, description = "Purchases of the user's listings", body = Vec<PurchaseDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a publisher", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_sold_purchases(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session, &state.super_admins)
        .require(&[Permission::Publisher])
        .await?;

    let purchases = PurchaseService::new(&state.db).list_sold(user.id()).await?;

    let dtos: Vec<PurchaseDto> = purchases.into_iter().map(|p| p.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a purchase.
///
/// # Access Control
/// Buyer, seller or admin.
#[utoipa::path(
    get,
    path = "/api/purchases/{id}",
    tag = PURCHASE_TAG,
    params(
        ("id" = i32, Path, description = "Purchase ID")
    ),
    responses(
        (status = 200, description = "The purchase", body = PurchaseDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a party of the purchase", body = ErrorDto),
        (status = 404, description = "Purchase not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_purchase(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session, &state.super_admins)
        .require(&[])
        .await?;

    let purchase = PurchaseService::new(&state.db)
        .get(user.id(), user.is_admin(), id)
        .await?;

    Ok((StatusCode::OK, Json(purchase.into_dto())))
}

/// Record payment for a pending purchase.
///
/// # Access Control
/// Buyer only.
///
/// # Returns
/// - `200 OK` - The paid purchase
/// - `400 Bad Request` - Empty payment reference
/// - `409 Conflict` - Purchase is no longer pending
#[utoipa::path(
    post,
    path = "/api/purchases/{id}/pay",
    tag = PURCHASE_TAG,
    params(
        ("id" = i32, Path, description = "Purchase ID")
    ),
    request_body = PayPurchaseDto,
    responses(
        (status = 200, description = "Purchase paid", body = PurchaseDto),
        (status = 400, description = "Empty payment reference", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not the buyer", body = ErrorDto),
        (status = 404, description = "Purchase not found", body = ErrorDto),
        (status = 409, description = "Purchase is not pending", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn pay_purchase(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<PayPurchaseDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session, &state.super_admins)
        .require(&[])
        .await?;

    let purchase = PurchaseService::new(&state.db)
        .pay(user.id(), id, payload.payment_reference)
        .await?;

    Ok((StatusCode::OK, Json(purchase.into_dto())))
}

/// Mark a paid placement as live.
///
/// # Access Control
/// Seller only.
#[utoipa::path(
    post,
    path = "/api/purchases/{id}/complete",
    tag = PURCHASE_TAG,
    params(
        ("id" = i32, Path, description = "Purchase ID")
    ),
    request_body = CompletePurchaseDto,
    responses(
        (status = 200, description = "Purchase completed", body = PurchaseDto),
        (status = 400, description = "Invalid live URL", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not the seller", body = ErrorDto),
        (status = 404, description = "Purchase not found", body = ErrorDto),
        (status = 409, description = "Purchase is not paid", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn complete_purchase(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<CompletePurchaseDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session, &state.super_admins)
        .require(&[])
        .await?;

    let purchase = PurchaseService::new(&state.db)
        .complete(user.id(), id, payload.live_url)
        .await?;

    Ok((StatusCode::OK, Json(purchase.into_dto())))
}

/// Cancel an unpaid purchase.
///
/// # Access Control
/// Buyer or admin.
#[utoipa::path(
    post,
    path = "/api/purchases/{id}/cancel",
    tag = PURCHASE_TAG,
    params(
        ("id" = i32, Path, description = "Purchase ID")
    ),
    responses(
        (status = 200, description = "Purchase cancelled", body = PurchaseDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not the buyer", body = ErrorDto),
        (status = 404, description = "Purchase not found", body = ErrorDto),
        (status = 409, description = "Purchase is not pending", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn cancel_purchase(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session, &state.super_admins)
        .require(&[])
        .await?;

    let purchase = PurchaseService::new(&state.db)
        .cancel(user.id(), user.is_admin(), id)
        .await?;

    Ok((StatusCode::OK, Json(purchase.into_dto())))
}

/// Content uploaded for a purchase, oldest first.
///
/// # Access Control
/// Buyer, seller or admin.
#[utoipa::path(
    get,
    path = "/api/purchases/{id}/content",
    tag = PURCHASE_TAG,
    params(
        ("id" = i32, Path, description = "Purchase ID")
    ),
    responses(
        (status = 200, description = "Content of the purchase", body = Vec<ContentDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a party of the purchase", body = ErrorDto),
        (status = 404, description = "Purchase not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_purchase_content(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session, &state.super_admins)
        .require(&[])
        .await?;

    let content = ContentService::new(&state.db)
        .list_for_purchase(user.id(), user.is_admin(), id)
        .await?;

    let dtos: Vec<ContentDto> = content.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Upload the article for a paid purchase.
///
/// # Access Control
/// Buyer only.
///
/// # Returns
/// - `201 Created` - The stored content
/// - `400 Bad Request` - Missing title or body, invalid target URL or purchase not paid
#[utoipa::path(
    post,
    path = "/api/purchases/{id}/content",
    tag = PURCHASE_TAG,
    params(
        ("id" = i32, Path, description = "Purchase ID")
    ),
    request_body = UploadContentDto,
    responses(
        (status = 201, description = "Content uploaded", body = ContentDto),
        (status = 400, description = "Invalid content or purchase not paid", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not the buyer", body = ErrorDto),
        (status = 404, description = "Purchase not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upload_purchase_content(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UploadContentDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session, &state.super_admins)
        .require(&[])
        .await?;

    let params = UploadContentParams::from_dto(id, user.id(), payload);

    let content = ContentService::new(&state.db).upload(params).await?;

    Ok((StatusCode::CREATED, Json(content.into_dto())))
}
