use crate::server::{
    error::{auth::AuthError, AppError},
    model::ad_request::{AdRequestStatus, CreateAdRequestParams},
    service::ad_request::AdRequestService,
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod respond;
