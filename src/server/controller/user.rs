use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        user::{SetRoleDto, UserDto},
    },
    server::{error::AppError, middleware::auth::AuthGuard, service::user::UserService, state::AppState},
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// PUT /api/user/role - Switch the current user between publisher and advertiser
///
/// # Access Control
/// Any logged in user, for their own account only.
///
/// # Returns
/// - `200 OK` - The updated user
/// - `400 Bad Request` - Unknown role
/// - `401 Unauthorized` - Not logged in
#[utoipa::path(
    put,
    path = "/api/user/role",
    tag = USER_TAG,
    request_body = SetRoleDto,
    responses(
        (status = 200, description = "Role updated", body = UserDto),
        (status = 400, description = "Unknown role", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_role(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<SetRoleDto>,
) -> Result<impl IntoResponse, AppError> {
    let current = AuthGuard::new(&state.db, &session, &state.super_admins)
        .require(&[])
        .await?;

    let user = UserService::new(&state.db)
        .set_role(current.id(), &payload.role)
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto(current.is_super_admin))))
}
