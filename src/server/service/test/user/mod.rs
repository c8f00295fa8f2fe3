use crate::server::{error::AppError, model::user::UserRole, service::user::UserService};
use entity::prelude::User;
use test_utils::{builder::TestBuilder, factory};
