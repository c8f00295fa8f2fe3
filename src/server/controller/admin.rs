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
        price_conflict::{PriceConflictGroupDto, ReconciliationReportDto, ResolveConflictDto},
        purchase::{PaginatedPurchasesDto, PurchaseDto},
        user::{PaginatedUsersDto, SetAdminDto, UserDto},
        website::{PaginatedWebsitesDto, RejectWebsiteDto, WebsiteDto},
    },
    server::{
        controller::{default_entries, PaginationParams},
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{price_conflict::ResolveConflictParams, website::WebsiteStatus},
        service::{
            price_conflict::PriceConflictService, purchase::PurchaseService, user::UserService,
            website::WebsiteService,
        },
        state::AppState,
    },
};

/// Tag for grouping admin endpoints in OpenAPI documentation
pub static ADMIN_TAG: &str = "admin";

#[derive(Deserialize)]
pub struct ReviewQueueParams {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
    /// One of `pending`, `priceConflict`, `approved` or `rejected`. All statuses when unset.
    pub status: Option<String>,
}

/// Get paginated users ordered by name.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    get,
    path = "/api/admin/users",
    tag = ADMIN_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Page of users", body = PaginatedUsersDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session, &state.super_admins)
        .require(&[Permission::Admin])
        .await?;

    let users = UserService::new(&state.db)
        .get_all_users(params.page, params.entries)
        .await?;

    Ok((StatusCode::OK, Json(users.into_dto(&state.super_admins))))
}

/// Grant or revoke the admin role.
///
/// # Access Control
/// - `SuperAdmin` - Only users on the super admin allowlist manage admins
///
/// # Returns
/// - `200 OK` - The updated user
/// - `403 Forbidden` - Caller is not a super admin
/// - `404 Not Found` - User doesn't exist
#[utoipa::path(
    put,
    path = "/api/admin/users/{id}/admin",
    tag = ADMIN_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    request_body = SetAdminDto,
    responses(
        (status = 200, description = "Admin role updated", body = UserDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a super admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_user_admin(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<SetAdminDto>,
) -> Result<impl IntoResponse, AppError> {
    let current = AuthGuard::new(&state.db, &session, &state.super_admins)
        .require(&[Permission::SuperAdmin])
        .await?;

    let user = UserService::new(&state.db)
        .set_admin(id, payload.admin)
        .await?;

    tracing::info!(
        "Super admin {} set admin={} for user {}",
        current.id(),
        payload.admin,
        user.id
    );

    let is_super_admin = state.super_admins.contains(user.id, &user.email);

    Ok((StatusCode::OK, Json(user.into_dto(is_super_admin))))
}

/// Review queue of listings, oldest first.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    get,
    path = "/api/admin/websites",
    tag = ADMIN_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)"),
        ("status" = Option<String>, Query, description = "Only listings in this status")
    ),
    responses(
        (status = 200, description = "Page of listings", body = PaginatedWebsitesDto),
        (status = 400, description = "Unknown status", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_websites(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<ReviewQueueParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session, &state.super_admins)
        .require(&[Permission::Admin])
        .await?;

    let status = params
        .status
        .as_deref()
        .map(str::parse::<WebsiteStatus>)
        .transpose()
        .map_err(AppError::BadRequest)?;

    let websites = WebsiteService::new(&state.db)
        .list_by_status(status, params.page, params.entries)
        .await?;

    Ok((StatusCode::OK, Json(websites.into_dto())))
}

/// Approve a pending listing.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    post,
    path = "/api/admin/websites/{id}/approve",
    tag = ADMIN_TAG,
    params(
        ("id" = i32, Path, description = "Listing ID")
    ),
    responses(
        (status = 200, description = "Listing approved", body = WebsiteDto),
        (status = 400, description = "Listing is not pending", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Listing not found", body = ErrorDto),
        (status = 409, description = "Listing changed concurrently", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn approve_website(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session, &state.super_admins)
        .require(&[Permission::Admin])
        .await?;

    let website = WebsiteService::new(&state.db).approve(id).await?;

    Ok((StatusCode::OK, Json(website.into_dto())))
}

/// Reject a pending or approved listing.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    post,
    path = "/api/admin/websites/{id}/reject",
    tag = ADMIN_TAG,
    params(
        ("id" = i32, Path, description = "Listing ID")
    ),
    request_body = RejectWebsiteDto,
    responses(
        (status = 200, description = "Listing rejected", body = WebsiteDto),
        (status = 400, description = "Missing reason or listing can't be rejected", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Listing not found", body = ErrorDto),
        (status = 409, description = "Listing changed concurrently", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reject_website(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<RejectWebsiteDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session, &state.super_admins)
        .require(&[Permission::Admin])
        .await?;

    let website = WebsiteService::new(&state.db)
        .reject(id, payload.reason)
        .await?;

    Ok((StatusCode::OK, Json(website.into_dto())))
}

/// Open price conflict groups with their members.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    get,
    path = "/api/admin/conflicts",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Open conflict groups", body = Vec<PriceConflictGroupDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_open_conflicts(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session, &state.super_admins)
        .require(&[Permission::Admin])
        .await?;

    let groups = PriceConflictService::new(&state.db).list_open().await?;

    let dtos: Vec<PriceConflictGroupDto> = groups.into_iter().map(|g| g.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a conflict group in any status.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    get,
    path = "/api/admin/conflicts/{id}",
    tag = ADMIN_TAG,
    params(
        ("id" = String, Path, description = "Conflict group ID")
    ),
    responses(
        (status = 200, description = "The conflict group", body = PriceConflictGroupDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Conflict group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_conflict(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session, &state.super_admins)
        .require(&[Permission::Admin])
        .await?;

    let group = PriceConflictService::new(&state.db)
        .get_group(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Conflict group {} not found", id)))?;

    Ok((StatusCode::OK, Json(group.into_dto())))
}

/// Resolve a conflict group by picking the winning listing.
///
/// The winner is approved and every other member is rejected. A group resolves at most
/// once; later attempts fail with 409.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    post,
    path = "/api/admin/conflicts/{id}/resolve",
    tag = ADMIN_TAG,
    params(
        ("id" = String, Path, description = "Conflict group ID")
    ),
    request_body = ResolveConflictDto,
    responses(
        (status = 200, description = "Conflict resolved", body = PriceConflictGroupDto),
        (status = 400, description = "Winner is not a member of the group", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Conflict group not found", body = ErrorDto),
        (status = 409, description = "Conflict group already resolved", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn resolve_conflict(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
    Json(payload): Json<ResolveConflictDto>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &session, &state.super_admins)
        .require(&[Permission::Admin])
        .await?;

    let params = ResolveConflictParams {
        group_id: id,
        winner_website_id: payload.winner_website_id,
        resolved_by: admin.id(),
    };

    let group = PriceConflictService::new(&state.db).resolve(params).await?;

    Ok((StatusCode::OK, Json(group.into_dto())))
}

/// Run the conflict reconciliation sweep now.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    post,
    path = "/api/admin/conflicts/reconcile",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "What the sweep changed", body = ReconciliationReportDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reconcile_conflicts(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &session, &state.super_admins)
        .require(&[Permission::Admin])
        .await?;

    tracing::info!("Admin {} triggered a reconciliation sweep", admin.id());

    let report = PriceConflictService::new(&state.db).sweep().await?;

    Ok((StatusCode::OK, Json(report.into_dto())))
}

/// Every purchase, newest first.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    get,
    path = "/api/admin/purchases",
    tag = ADMIN_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Page of purchases", body = PaginatedPurchasesDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_purchases(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session, &state.super_admins)
        .require(&[Permission::Admin])
        .await?;

    let purchases = PurchaseService::new(&state.db)
        .list_all(params.page, params.entries)
        .await?;

    Ok((StatusCode::OK, Json(purchases.into_dto())))
}

/// Refund a paid purchase.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    post,
    path = "/api/admin/purchases/{id}/refund",
    tag = ADMIN_TAG,
    params(
        ("id" = i32, Path, description = "Purchase ID")
    ),
    responses(
        (status = 200, description = "Purchase refunded", body = PurchaseDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Purchase not found", body = ErrorDto),
        (status = 409, description = "Purchase is not paid", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn refund_purchase(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &session, &state.super_admins)
        .require(&[Permission::Admin])
        .await?;

    let purchase = PurchaseService::new(&state.db).refund(id).await?;

    tracing::info!("Admin {} refunded purchase {}", admin.id(), purchase.id);

    Ok((StatusCode::OK, Json(purchase.into_dto())))
}
