use std::collections::HashSet;

use tokio_cron_scheduler::Job;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
/// Top of every hour, six-field cron syntax.
const DEFAULT_RECONCILE_CRON: &str = "0 0 * * * *";

pub struct Config {
    pub database_url: String,
    pub app_url: String,
    pub bind_address: String,

    pub oauth_client_id: String,
    pub oauth_client_secret: String,
    pub oauth_redirect_url: String,
    pub oauth_auth_url: String,
    pub oauth_token_url: String,
    pub oauth_userinfo_url: String,

    pub super_admins: SuperAdminAllowlist,
    pub reconcile_cron: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            app_url: required("APP_URL")?,
            bind_address: optional("BIND_ADDRESS")
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            oauth_client_id: required("OAUTH_CLIENT_ID")?,
            oauth_client_secret: required("OAUTH_CLIENT_SECRET")?,
            oauth_redirect_url: required("OAUTH_REDIRECT_URL")?,
            oauth_auth_url: required("OAUTH_AUTH_URL")?,
            oauth_token_url: required("OAUTH_TOKEN_URL")?,
            oauth_userinfo_url: required("OAUTH_USERINFO_URL")?,
            super_admins: SuperAdminAllowlist::parse(
                optional("SUPER_ADMIN_EMAILS").as_deref().unwrap_or(""),
                optional("SUPER_ADMIN_IDS").as_deref().unwrap_or(""),
            )?,
            reconcile_cron: validate_cron(
                optional("RECONCILE_CRON").unwrap_or_else(|| DEFAULT_RECONCILE_CRON.to_string()),
            )?,
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Checks that `cron` is a schedule the reconciliation job can run on.
///
/// # Returns
/// - `Ok(String)` - The expression, unchanged
/// - `Err(ConfigError::InvalidValue)` - The expression doesn't parse
fn validate_cron(cron: String) -> Result<String, ConfigError> {
    Job::new(cron.as_str(), |_, _| {}).map_err(|e| ConfigError::InvalidValue {
        name: "RECONCILE_CRON".to_string(),
        reason: format!("'{}': {}", cron, e),
    })?;

    Ok(cron)
}

/// Users with unrestricted access, configured out-of-band.
///
/// A user is a super admin when their email (case-insensitive) or their user ID appears in
/// the allowlist. Super admins pass every permission check, including the admin check, even
/// when their `admin` column is false.
#[derive(Debug, Clone, Default)]
pub struct SuperAdminAllowlist {
    emails: HashSet<String>,
    ids: HashSet<i32>,
}

impl SuperAdminAllowlist {
    /// Parses comma-separated email and ID lists. Blank entries are ignored.
    ///
    /// # Returns
    /// - `Ok(SuperAdminAllowlist)` - Parsed allowlist, possibly empty
    /// - `Err(ConfigError::InvalidValue)` - An ID entry is not an integer
    pub fn parse(emails: &str, ids: &str) -> Result<Self, ConfigError> {
        let emails = emails
            .split(',')
            .map(|e| e.trim().to_lowercase())
            .filter(|e| !e.is_empty())
            .collect();

        let ids = ids
            .split(',')
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(|id| {
                id.parse::<i32>().map_err(|e| ConfigError::InvalidValue {
                    name: "SUPER_ADMIN_IDS".to_string(),
                    reason: format!("'{}': {}", id, e),
                })
            })
            .collect::<Result<HashSet<_>, _>>()?;

        Ok(Self { emails, ids })
    }

    pub fn contains(&self, user_id: i32, email: &str) -> bool {
        self.ids.contains(&user_id) || self.emails.contains(&email.trim().to_lowercase())
    }

    pub fn is_empty(&self) -> bool {
        self.emails.is_empty() && self.ids.is_empty()
    }
}
