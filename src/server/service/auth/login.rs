use oauth2::{CsrfToken, Scope};
use url::Url;

use crate::server::service::auth::{AuthService, SCOPES};

impl<'a> AuthService<'a> {
    /// Builds the provider authorize URL along with the CSRF state to keep in the session.
    pub fn login_url(&self) -> (Url, CsrfToken) {
        let (authorize_url, csrf_state) = self
            .oauth_client
            .authorize_url(CsrfToken::new_random)
            .add_scopes(SCOPES.iter().map(|s| Scope::new(s.to_string())))
            .url();

        (authorize_url, csrf_state)
    }
}
