//! Ad request domain models.

use std::str::FromStr;

use chrono::{DateTime, Utc};

use crate::{
    model::ad_request::{AdRequestDto, CreateAdRequestDto},
    server::{error::AppError, util::parse::parse_stored},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdRequestStatus {
    Pending,
    Accepted,
    Declined,
}

impl AdRequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdRequestStatus::Pending => "pending",
            AdRequestStatus::Accepted => "accepted",
            AdRequestStatus::Declined => "declined",
        }
    }
}

impl FromStr for AdRequestStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(AdRequestStatus::Pending),
            "accepted" => Ok(AdRequestStatus::Accepted),
            "declined" => Ok(AdRequestStatus::Declined),
            other => Err(format!("Unknown ad request status '{}'", other)),
        }
    }
}

/// Free-form request from an advertiser to the publisher of a listing.
#[derive(Debug, Clone, PartialEq)]
pub struct AdRequest {
    pub id: i32,
    pub website_id: i32,
    pub advertiser_id: i32,
    pub publisher_id: i32,
    pub message: String,
    pub budget_cents: Option<i64>,
    pub status: AdRequestStatus,
    pub created_at: DateTime<Utc>,
    pub responded_at: Option<DateTime<Utc>>,
}

impl AdRequest {
    pub fn from_entity(entity: entity::ad_request::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            website_id: entity.website_id,
            advertiser_id: entity.advertiser_id,
            publisher_id: entity.publisher_id,
            message: entity.message,
            budget_cents: entity.budget_cents,
            status: parse_stored("ad_request.status", entity.status)?,
            created_at: entity.created_at,
            responded_at: entity.responded_at,
        })
    }

    pub fn from_entities(entities: Vec<entity::ad_request::Model>) -> Result<Vec<Self>, AppError> {
        entities.into_iter().map(Self::from_entity).collect()
    }

    pub fn into_dto(self) -> AdRequestDto {
        AdRequestDto {
            id: self.id,
            website_id: self.website_id,
            advertiser_id: self.advertiser_id,
            publisher_id: self.publisher_id,
            message: self.message,
            budget_cents: self.budget_cents,
            status: self.status.as_str().to_string(),
            created_at: self.created_at,
            responded_at: self.responded_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateAdRequestParams {
    pub advertiser_id: i32,
    pub website_id: i32,
    pub message: String,
    pub budget_cents: Option<i64>,
}

impl CreateAdRequestParams {
    pub fn from_dto(advertiser_id: i32, dto: CreateAdRequestDto) -> Self {
        Self {
            advertiser_id,
            website_id: dto.website_id,
            message: dto.message.trim().to_string(),
            budget_cents: dto.budget_cents,
        }
    }
}
