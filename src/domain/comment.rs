//! Comments attached to videos.

use serde::{Deserialize, Serialize};

use super::validation::{self, Field, ValidationError};

/// Maximum comment length in characters (after trimming)
pub const MAX_COMMENT_LENGTH: usize = 500;

/// A comment as returned by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,

    /// Video this comment belongs to
    pub video_id: String,

    pub user_id: String,

    pub content: String,

    /// ISO-8601 timestamp, kept verbatim
    pub created_at: String,
}

/// Body of `POST /videos/comments`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCommentRequest {
    pub video_id: String,
    pub user_id: String,
    pub content: String,
}

impl CreateCommentRequest {
    /// Build a request from raw form input, trimming the content
    pub fn new(
        video_id: impl Into<String>,
        user_id: impl Into<String>,
        content: &str,
    ) -> Result<Self, ValidationError> {
        Self {
            video_id: video_id.into(),
            user_id: user_id.into(),
            content: content.to_string(),
        }
        .normalized()
    }

    /// The copy with trimmed content that goes on the wire, if it passes
    /// the gate
    pub fn normalized(&self) -> Result<Self, ValidationError> {
        let request = Self {
            video_id: self.video_id.clone(),
            user_id: self.user_id.clone(),
            content: self.content.trim().to_string(),
        };
        request.validate()?;
        Ok(request)
    }

    /// Content must be 1..=500 characters after trimming
    pub fn validate(&self) -> Result<(), ValidationError> {
        validation::require(Field::Content, &self.content)?;
        validation::max_length(Field::Content, &self.content, MAX_COMMENT_LENGTH)
    }
}

/// Response of `GET /videos/comments`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetCommentsResponse {
    pub comments: Vec<Comment>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::validation::ValidationKind;

    #[test]
    fn test_comment_length_boundary() {
        let exact = "a".repeat(MAX_COMMENT_LENGTH);
        let request = CreateCommentRequest::new("v1", "U", &exact).unwrap();
        assert_eq!(request.content.len(), MAX_COMMENT_LENGTH);

        let over = "a".repeat(MAX_COMMENT_LENGTH + 1);
        let err = CreateCommentRequest::new("v1", "U", &over).unwrap_err();
        assert_eq!(err.field, Field::Content);
        assert_eq!(err.to_string(), "Comment cannot exceed 500 characters");
    }

    #[test]
    fn test_length_counted_after_trimming() {
        let padded = format!("   {}   ", "a".repeat(MAX_COMMENT_LENGTH));
        let request = CreateCommentRequest::new("v1", "U", &padded).unwrap();
        assert_eq!(request.content.chars().count(), MAX_COMMENT_LENGTH);
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        let accented = "é".repeat(MAX_COMMENT_LENGTH);
        assert!(CreateCommentRequest::new("v1", "U", &accented).is_ok());
    }

    #[test]
    fn test_empty_comment_rejected() {
        let err = CreateCommentRequest::new("v1", "U", " \n\t ").unwrap_err();
        assert_eq!(err.kind, ValidationKind::Required);
        assert_eq!(err.to_string(), "Comment cannot be empty");
    }

    #[test]
    fn test_comments_response_parsing() {
        let json = r#"{"comments": [
            {"id": "c1", "video_id": "v1", "user_id": "U", "content": "nice", "created_at": "2025-11-18T18:37:27Z"}
        ]}"#;

        let response: GetCommentsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.comments.len(), 1);
        assert_eq!(response.comments[0].video_id, "v1");
    }
}
