use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::website::WebsiteDto;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct WishlistItemDto {
    pub id: i32,
    pub added_at: DateTime<Utc>,
    pub website: WebsiteDto,
}
