use oauth2::{
    basic::BasicTokenType, AuthorizationCode, EmptyExtraTokenFields, StandardTokenResponse,
    TokenResponse,
};
use serde::Deserialize;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{UpsertUserParam, User},
    service::auth::AuthService,
};

/// Subset of the OpenID Connect userinfo response.
#[derive(Debug, Deserialize)]
struct UserInfo {
    sub: String,
    email: String,
    name: Option<String>,
}

impl<'a> AuthService<'a> {
    /// Completes the authorization code flow and creates or refreshes the user.
    ///
    /// # Returns
    /// - `Ok(User)` - The logged in user
    /// - `Err(AppError::AuthErr(TokenExchange))` - The provider rejected the code
    /// - `Err(AppError::ReqwestErr)` - Userinfo request failed or returned an unexpected body
    pub async fn callback(&self, authorization_code: String) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let auth_code = AuthorizationCode::new(authorization_code);

        let token = self
            .oauth_client
            .exchange_code(auth_code)
            .request_async(self.http_client)
            .await
            .map_err(|e| AuthError::TokenExchange(e.to_string()))?;

        let info = self.fetch_user_info(&token).await?;
        let name = info
            .name
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| info.email.clone());

        let user = user_repo
            .upsert(UpsertUserParam {
                subject: info.sub,
                email: info.email,
                name,
            })
            .await?;

        tracing::debug!("User {} logged in", user.id);

        User::from_entity(user)
    }

    /// Retrieves the user's profile from the provider using the access token
    async fn fetch_user_info(
        &self,
        token: &StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    ) -> Result<UserInfo, AppError> {
        let access_token = token.access_token().secret();

        let user_info = self
            .http_client
            .get(self.userinfo_url)
            .header("Authorization", format!("Bearer {}", access_token))
            .send()
            .await?
            .error_for_status()?
            .json::<UserInfo>()
            .await?;

        Ok(user_info)
    }
}
