use crate::server::{
    data::price_conflict_group::PriceConflictGroupRepository,
    model::price_conflict::ConflictGroupStatus,
};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod create;
mod mark_resolved_if_open;
