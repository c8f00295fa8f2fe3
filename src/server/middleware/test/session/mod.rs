use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::session::CsrfSession,
};
use test_utils::builder::TestBuilder;

mod csrf;
