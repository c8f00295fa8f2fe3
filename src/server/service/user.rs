//! User service for business logic.
//!
//! This module provides the `UserService` for role switching and the admin views over
//! users. Login and user creation go through `AuthService`.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::{
        page_count,
        user::{PaginatedUsers, User, UserRole},
    },
};

/// Service providing business logic for user management.
pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves a user by ID.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that ID
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_user(&self, user_id: i32) -> Result<Option<User>, AppError> {
        UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .map(User::from_entity)
            .transpose()
    }

    /// Switches a user between publisher and advertiser.
    ///
    /// # Arguments
    /// - `user_id` - User changing their role
    /// - `role` - Requested role, `"publisher"` or `"advertiser"`
    ///
    /// # Returns
    /// - `Ok(User)` - The user with the new role
    /// - `Err(AppError::BadRequest)` - Unknown role
    /// - `Err(AppError::NotFound)` - User doesn't exist
    pub async fn set_role(&self, user_id: i32, role: &str) -> Result<User, AppError> {
        let role = role.parse::<UserRole>().map_err(AppError::BadRequest)?;

        if !UserRepository::new(self.db).set_role(user_id, role).await? {
            return Err(AppError::NotFound(format!("User {} not found", user_id)));
        }

        tracing::debug!("User {} switched role to {}", user_id, role);

        self.require_user(user_id).await
    }

    /// Retrieves all users with pagination, ordered by name.
    pub async fn get_all_users(&self, page: u64, per_page: u64) -> Result<PaginatedUsers, AppError> {
        let (users, total) = UserRepository::new(self.db)
            .get_all_paginated(page, per_page)
            .await?;

        Ok(PaginatedUsers {
            users: users
                .into_iter()
                .map(User::from_entity)
                .collect::<Result<Vec<_>, _>>()?,
            total,
            page,
            per_page,
            total_pages: page_count(total, per_page),
        })
    }

    /// Grants or revokes admin privileges.
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(AppError::NotFound)` - User doesn't exist
    pub async fn set_admin(&self, user_id: i32, admin: bool) -> Result<User, AppError> {
        if !UserRepository::new(self.db).set_admin(user_id, admin).await? {
            return Err(AppError::NotFound(format!("User {} not found", user_id)));
        }

        tracing::info!(
            "Admin privileges {} for user {}",
            if admin { "granted" } else { "revoked" },
            user_id
        );

        self.require_user(user_id).await
    }

    async fn require_user(&self, user_id: i32) -> Result<User, AppError> {
        self.get_user(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", user_id)))
    }
}
