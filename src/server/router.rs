use axum::{
    http::{header, HeaderValue, Method},
    Router,
};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{ad_request, admin, auth, purchase, user, website, wishlist},
    error::{config::ConfigError, AppError},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Sitemarket API",
        description = "Marketplace for guest posts and link placements"
    ),
    tags(
        (name = "auth", description = "OAuth2 login and session"),
        (name = "user", description = "Current user settings"),
        (name = "website", description = "Website listings and marketplace"),
        (name = "purchase", description = "Placement purchases and their content"),
        (name = "ad_request", description = "Custom placement requests"),
        (name = "wishlist", description = "Saved listings"),
        (name = "admin", description = "Review, conflict resolution and user management")
    )
)]
struct ApiDoc;

/// Builds the API router with OpenAPI docs served at `/api/docs`.
///
/// Cross-origin requests are allowed from `app_url` only, with credentials so the session
/// cookie is sent along.
///
/// # Returns
/// - `Ok(Router)` - Router expecting `AppState`
/// - `Err(AppError::ConfigErr)` - `app_url` is not a valid origin header value
pub fn router(app_url: &str) -> Result<Router<AppState>, AppError> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(auth::login))
        .routes(routes!(auth::callback))
        .routes(routes!(auth::logout))
        .routes(routes!(auth::get_user))
        .routes(routes!(user::set_role))
        .routes(routes!(website::get_owned_websites))
        .routes(routes!(website::get_marketplace, website::submit_website))
        .routes(routes!(
            website::get_website,
            website::update_website,
            website::delete_website
        ))
        .routes(routes!(website::resubmit_website))
        .routes(routes!(purchase::create_purchase))
        .routes(routes!(purchase::get_bought_purchases))
        .routes(routes!(purchase::get_sold_purchases))
        .routes(routes!(purchase::get_purchase))
        .routes(routes!(purchase::pay_purchase))
        .routes(routes!(purchase::complete_purchase))
        .routes(routes!(purchase::cancel_purchase))
        .routes(routes!(
            purchase::get_purchase_content,
            purchase::upload_purchase_content
        ))
        .routes(routes!(ad_request::create_ad_request))
        .routes(routes!(ad_request::get_sent_ad_requests))
        .routes(routes!(ad_request::get_received_ad_requests))
        .routes(routes!(ad_request::respond_ad_request))
        .routes(routes!(wishlist::get_wishlist))
        .routes(routes!(
            wishlist::add_to_wishlist,
            wishlist::remove_from_wishlist
        ))
        .routes(routes!(admin::get_users))
        .routes(routes!(admin::set_user_admin))
        .routes(routes!(admin::get_websites))
        .routes(routes!(admin::approve_website))
        .routes(routes!(admin::reject_website))
        .routes(routes!(admin::get_open_conflicts))
        .routes(routes!(admin::reconcile_conflicts))
        .routes(routes!(admin::get_conflict))
        .routes(routes!(admin::resolve_conflict))
        .routes(routes!(admin::get_purchases))
        .routes(routes!(admin::refund_purchase))
        .split_for_parts();

    let router = router
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .layer(cors_layer(app_url)?);

    Ok(router)
}

fn cors_layer(app_url: &str) -> Result<CorsLayer, ConfigError> {
    let origin = HeaderValue::from_str(app_url.trim_end_matches('/')).map_err(|e| {
        ConfigError::InvalidValue {
            name: "APP_URL".to_string(),
            reason: e.to_string(),
        }
    })?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .allow_credentials(true))
}
