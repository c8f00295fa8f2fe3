use crate::server::data::wishlist::WishlistRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_by_user_with_website;
