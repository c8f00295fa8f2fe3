use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        ad_request::{AdRequestDto, CreateAdRequestDto, RespondAdRequestDto},
        api::ErrorDto,
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::ad_request::CreateAdRequestParams,
        service::ad_request::AdRequestService,
        state::AppState,
    },
};

/// Tag for grouping ad request endpoints in OpenAPI documentation
pub static AD_REQUEST_TAG: &str = "ad_request";

/// Ask a publisher about a custom placement.
///
/// # Access Control
/// - `Advertiser`
#[utoipa::path(
    post,
    path = "/api/ad-requests",
    tag = AD_REQUEST_TAG,
    request_body = CreateAdRequestDto,
    responses(
        (status = 201, description = "Request sent", body = AdRequestDto),
        (status = 400, description = "Invalid request", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an advertiser", body = ErrorDto),
        (status = 404, description = "Listing not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_ad_request(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateAdRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session, &state.super_admins)
        .require(&[Permission::Advertiser])
        .await?;

    let params = CreateAdRequestParams::from_dto(user.id(), payload);

    let request = AdRequestService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(request.into_dto())))
}

/// Requests sent by the current user.
#[utoipa::path(
    get,
    path = "/api/ad-requests/sent",
    tag = AD_REQUEST_TAG,
    responses(
        (status = 200, description = "Sent requests", body = Vec<AdRequestDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_sent_ad_requests(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session, &state.super_admins)
        .require(&[])
        .await?;

    let requests = AdRequestService::new(&state.db).list_sent(user.id()).await?;

    let dtos: Vec<AdRequestDto> = requests.into_iter().map(|r| r.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Requests received for the current publisher's listings.
///
/// # Access Control
/// - `Publisher`
#[utoipa::path(
    get,
    path = "/api/ad-requests/received",
    tag = AD_REQUEST_TAG,
    responses(
        (status = 200, description = "Received requests", body = Vec<AdRequestDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a publisher", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_received_ad_requests(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session, &state.super_admins)
        .require(&[Permission::Publisher])
        .await?;

    let requests = AdRequestService::new(&state.db)
        .list_received(user.id())
        .await?;

    let dtos: Vec<AdRequestDto> = requests.into_iter().map(|r| r.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Accept or decline a pending request.
///
/// # Access Control
/// - `Publisher` - The publisher the request was sent to
///
/// # Returns
/// - `200 OK` - The answered request
/// - `409 Conflict` - The request was already answered
#[utoipa::path(
    post,
    path = "/api/ad-requests/{id}/respond",
    tag = AD_REQUEST_TAG,
    params(
        ("id" = i32, Path, description = "Ad request ID")
    ),
    request_body = RespondAdRequestDto,
    responses(
        (status = 200, description = "Request answered", body = AdRequestDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Request was sent to another publisher", body = ErrorDto),
        (status = 404, description = "Request not found", body = ErrorDto),
        (status = 409, description = "Request already answered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn respond_ad_request(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<RespondAdRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session, &state.super_admins)
        .require(&[Permission::Publisher])
        .await?;

    let request = AdRequestService::new(&state.db)
        .respond(user.id(), id, payload.accept)
        .await?;

    Ok((StatusCode::OK, Json(request.into_dto())))
}
