//! Canonical form of listing URLs.
//!
//! Two listings point at the same website when their normalized URLs are equal, so the
//! normalized form is what the URL claim table and conflict detection key on.

use url::Url;

use crate::server::error::AppError;

/// Normalizes a submitted website URL.
///
/// The scheme defaults to https when missing and never takes part in the result. The host
/// is lowercased with a leading `www.` and any port removed. The path keeps its case but
/// loses trailing slashes, and query string and fragment are dropped.
///
/// # Arguments
/// - `input` - URL as entered by the publisher
///
/// # Returns
/// - `Ok(String)` - `host` or `host/path`
/// - `Err(AppError::BadRequest)` - Empty input, unsupported scheme or no host
pub fn normalize_url(input: &str) -> Result<String, AppError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(AppError::BadRequest("Website URL is required".to_string()));
    }

    let candidate = if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    };

    let parsed = Url::parse(&candidate)
        .map_err(|e| AppError::BadRequest(format!("Invalid website URL '{}': {}", trimmed, e)))?;

    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(AppError::BadRequest(format!(
            "Unsupported URL scheme '{}'",
            parsed.scheme()
        )));
    }

    let host = match parsed.host_str() {
        Some(host) if !host.is_empty() => host.to_lowercase(),
        _ => {
            return Err(AppError::BadRequest(format!(
                "Website URL '{}' has no host",
                trimmed
            )))
        }
    };
    let host = host.strip_prefix("www.").unwrap_or(&host).to_string();

    let path = parsed.path().trim_end_matches('/');

    if path.is_empty() {
        Ok(host)
    } else {
        Ok(format!("{}{}", host, path))
    }
}
