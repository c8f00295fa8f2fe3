//! Content uploaded by buyers for their paid placements.

use chrono::{DateTime, Utc};

use crate::model::content::{ContentDto, UploadContentDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Content {
    pub id: i32,
    pub purchase_id: i32,
    pub author_id: i32,
    pub title: String,
    pub body: String,
    pub anchor_text: Option<String>,
    pub target_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Content {
    pub fn from_entity(entity: entity::content::Model) -> Self {
        Self {
            id: entity.id,
            purchase_id: entity.purchase_id,
            author_id: entity.author_id,
            title: entity.title,
            body: entity.body,
            anchor_text: entity.anchor_text,
            target_url: entity.target_url,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> ContentDto {
        ContentDto {
            id: self.id,
            purchase_id: self.purchase_id,
            author_id: self.author_id,
            title: self.title,
            body: self.body,
            anchor_text: self.anchor_text,
            target_url: self.target_url,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UploadContentParams {
    pub purchase_id: i32,
    pub author_id: i32,
    pub title: String,
    pub body: String,
    pub anchor_text: Option<String>,
    pub target_url: Option<String>,
}

impl UploadContentParams {
    pub fn from_dto(purchase_id: i32, author_id: i32, dto: UploadContentDto) -> Self {
        Self {
            purchase_id,
            author_id,
            title: dto.title.trim().to_string(),
            body: dto.body,
            anchor_text: dto.anchor_text.filter(|a| !a.trim().is_empty()),
            target_url: dto
                .target_url
                .map(|u| u.trim().to_string())
                .filter(|u| !u.is_empty()),
        }
    }
}
