//! Videos and the requests that create them.
//!
//! A `Video` is an immutable record once fetched. The client never patches
//! one locally (not even `num_comments`); a mutation is followed by a refetch.

use serde::{Deserialize, Serialize};

use super::validation::{self, Field, ValidationError};

/// A video as returned by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    /// Opaque stable identifier
    pub id: String,

    pub title: String,

    pub description: String,

    /// Producer-supplied link, opaque until passed through the resolver
    pub video_url: String,

    /// Owner of the video
    pub user_id: String,

    /// ISO-8601 timestamp, kept verbatim
    pub created_at: String,

    /// Server-computed comment count
    pub num_comments: u64,
}

impl Video {
    /// Resolve this video's link into an embeddable form
    pub fn embed(&self) -> Option<crate::resolver::EmbedResult> {
        crate::resolver::resolve(&self.video_url)
    }
}

/// Body of `POST /videos`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateVideoRequest {
    pub user_id: String,
    pub title: String,
    pub description: String,
    pub video_url: String,
}

impl CreateVideoRequest {
    /// Build a request from raw form input.
    ///
    /// Every user-supplied field is trimmed before validation, and the
    /// trimmed values are what gets submitted.
    pub fn new(
        user_id: impl Into<String>,
        title: &str,
        description: &str,
        video_url: &str,
    ) -> Result<Self, ValidationError> {
        Self {
            user_id: user_id.into(),
            title: title.to_string(),
            description: description.to_string(),
            video_url: video_url.to_string(),
        }
        .normalized()
    }

    /// The trimmed copy of this request that goes on the wire, if it passes
    /// the gate
    pub fn normalized(&self) -> Result<Self, ValidationError> {
        let request = Self {
            user_id: self.user_id.clone(),
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            video_url: self.video_url.trim().to_string(),
        };
        request.validate()?;
        Ok(request)
    }

    /// Check the submission gate.
    ///
    /// All three fields must be non-empty after trimming, and the link must
    /// be something the resolver recognizes. Length is left to the backend.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (field, value) in [
            (Field::Title, &self.title),
            (Field::Description, &self.description),
            (Field::VideoUrl, &self.video_url),
        ] {
            validation::require(field, value)?;
        }

        validation::supported_video_url(&self.video_url)
    }
}

/// Response of `GET /videos`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetVideosResponse {
    pub videos: Vec<Video>,
}

/// Response of `GET /videos/single`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetVideoResponse {
    pub video: Video,
}
