use crate::server::{error::AppError, service::wishlist::WishlistService};
use test_utils::{builder::TestBuilder, factory};

mod add;
mod remove;
