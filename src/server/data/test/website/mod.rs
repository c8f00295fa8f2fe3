use crate::server::{
    data::website::WebsiteRepository,
    model::website::{CreateWebsiteParams, MarketplaceFilter, UpdateWebsiteParams, WebsiteStatus},
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod reset_for_review;
