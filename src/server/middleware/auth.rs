use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    config::SuperAdminAllowlist,
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::{User, UserRole},
};

/// Permissions checked by `AuthGuard::require`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    /// Admin flag set, or super admin.
    Admin,
    /// On the configured super admin allowlist.
    SuperAdmin,
    /// Publisher role. Admins pass as well.
    Publisher,
    /// Advertiser role. Admins pass as well.
    Advertiser,
}

/// The logged in user resolved by the guard.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthenticatedUser {
    pub user: User,
    /// Whether the user is on the super admin allowlist.
    pub is_super_admin: bool,
}

impl AuthenticatedUser {
    pub fn id(&self) -> i32 {
        self.user.id
    }

    /// Admin flag or super admin.
    pub fn is_admin(&self) -> bool {
        self.user.admin || self.is_super_admin
    }

    fn has(&self, permission: Permission) -> bool {
        match permission {
            Permission::Admin => self.is_admin(),
            Permission::SuperAdmin => self.is_super_admin,
            Permission::Publisher => self.is_admin() || self.user.role == UserRole::Publisher,
            Permission::Advertiser => self.is_admin() || self.user.role == UserRole::Advertiser,
        }
    }
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
    super_admins: &'a SuperAdminAllowlist,
}

impl<'a> AuthGuard<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        session: &'a Session,
        super_admins: &'a SuperAdminAllowlist,
    ) -> Self {
        Self {
            db,
            session,
            super_admins,
        }
    }

    /// Resolves the session user and checks every permission in `permissions`.
    ///
    /// # Returns
    /// - `Ok(AuthenticatedUser)` - User is logged in and holds all permissions
    /// - `Err(AuthError::UserNotInSession)` - Nobody is logged in
    /// - `Err(AuthError::UserNotInDatabase)` - Session points at a deleted user
    /// - `Err(AuthError::AccessDenied)` - First permission the user lacks
    pub async fn require(&self, permissions: &[Permission]) -> Result<AuthenticatedUser, AppError> {
        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = self.load(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        for permission in permissions {
            if !user.has(*permission) {
                let message = match permission {
                    Permission::Admin => "User attempted an admin action without admin permissions",
                    Permission::SuperAdmin => {
                        "User attempted a super admin action without being on the super admin allowlist"
                    }
                    Permission::Publisher => {
                        "User attempted a publisher action without the publisher role"
                    }
                    Permission::Advertiser => {
                        "User attempted an advertiser action without the advertiser role"
                    }
                };

                return Err(AuthError::AccessDenied(user_id, message.to_string()).into());
            }
        }

        Ok(user)
    }

    /// Resolves the session user without requiring a login.
    ///
    /// Used by public endpoints that show more to owners and admins.
    pub async fn current(&self) -> Result<Option<AuthenticatedUser>, AppError> {
        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Ok(None);
        };

        self.load(user_id).await
    }

    async fn load(&self, user_id: i32) -> Result<Option<AuthenticatedUser>, AppError> {
        let Some(entity) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Ok(None);
        };

        let user = User::from_entity(entity)?;
        let is_super_admin = self.super_admins.contains(user.id, &user.email);

        Ok(Some(AuthenticatedUser {
            user,
            is_super_admin,
        }))
    }
}
