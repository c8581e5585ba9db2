//! Driving port for organizing (creating) a webinar.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::Error;

/// Request to create a scheduled webinar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizeWebinarRequest {
    /// Id of the organising user.
    pub organizer_id: String,
    /// Title shown to participants.
    pub title: String,
    /// Fixed seat capacity.
    pub seats: u32,
    /// Scheduled start.
    pub start_date: DateTime<Utc>,
    /// Scheduled end.
    pub end_date: DateTime<Utc>,
}

/// Response from creating a webinar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizeWebinarResponse {
    /// Generated id of the persisted webinar.
    pub webinar_id: String,
}

/// Driving port for the organize webinar workflow.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrganizeWebinarCommand: Send + Sync {
    /// Validate scheduling notice and seat bounds, then persist the webinar
    /// under a freshly generated id.
    async fn organize_webinar(
        &self,
        request: OrganizeWebinarRequest,
    ) -> Result<OrganizeWebinarResponse, Error>;
}
