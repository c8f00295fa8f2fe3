//! User domain models and parameters.
//!
//! Provides the application user with its marketplace role and admin flag, plus parameter
//! types for the login upsert and admin management operations.

use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};

use crate::{
    model::user::{PaginatedUsersDto, UserDto},
    server::{config::SuperAdminAllowlist, error::AppError, util::parse::parse_stored},
};

/// Marketplace side a user acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserRole {
    /// Lists websites and sells placements.
    Publisher,
    /// Buys placements and sends ad requests.
    Advertiser,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Publisher => "publisher",
            UserRole::Advertiser => "advertiser",
        }
    }
}

impl FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "publisher" => Ok(UserRole::Publisher),
            "advertiser" => Ok(UserRole::Advertiser),
            other => Err(format!("Unknown role '{}'", other)),
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Application user identified by the OAuth provider subject.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Internal user ID.
    pub id: i32,
    /// Subject claim of the identity provider.
    pub subject: String,
    /// Email address reported at the last login.
    pub email: String,
    /// Display name reported at the last login.
    pub name: String,
    /// Marketplace role selected by the user.
    pub role: UserRole,
    /// Whether the user has admin privileges.
    pub admin: bool,
    /// When the user first logged in.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model.
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user domain model
    /// - `Err(AppError::InternalErr(InvalidStoredValue))` - Unknown stored role
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            subject: entity.subject,
            email: entity.email,
            name: entity.name,
            role: parse_stored("user.role", entity.role)?,
            admin: entity.admin,
            created_at: entity.created_at,
        })
    }

    /// Converts the user domain model to a DTO for API responses.
    ///
    /// # Arguments
    /// - `super_admin` - Whether the user is on the super admin allowlist
    pub fn into_dto(self, super_admin: bool) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            name: self.name,
            role: self.role.as_str().to_string(),
            admin: self.admin || super_admin,
            super_admin,
            created_at: self.created_at,
        }
    }
}

/// Parameters for creating or refreshing a user after an OAuth login.
///
/// New users start as advertisers without admin privileges; existing users only get their
/// email and name refreshed.
#[derive(Debug, Clone)]
pub struct UpsertUserParam {
    /// Subject claim of the identity provider.
    pub subject: String,
    /// Email address from the userinfo response.
    pub email: String,
    /// Display name from the userinfo response.
    pub name: String,
}

/// Paginated collection of users with metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedUsers {
    /// Users for this page.
    pub users: Vec<User>,
    /// Total number of users across all pages.
    pub total: u64,
    /// Current page number (zero-indexed).
    pub page: u64,
    /// Number of users per page.
    pub per_page: u64,
    /// Total number of pages.
    pub total_pages: u64,
}

impl PaginatedUsers {
    /// Converts the page to a DTO, flagging users on the super admin allowlist.
    pub fn into_dto(self, super_admins: &SuperAdminAllowlist) -> PaginatedUsersDto {
        let users = self
            .users
            .into_iter()
            .map(|u| {
                let super_admin = super_admins.contains(u.id, &u.email);
                u.into_dto(super_admin)
            })
            .collect();

        PaginatedUsersDto {
            users,
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
