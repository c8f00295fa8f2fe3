use crate::server::{
    data::user::UserRepository,
    model::user::{UpsertUserParam, UserRole},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod set_admin;
mod set_role;
mod upsert;
