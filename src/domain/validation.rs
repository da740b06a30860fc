//! Validation rules for user-submitted videos and comments.
//!
//! Validation runs before any request is issued. It is instant feedback for
//! the user; the backend re-validates independently.

use std::fmt;

use thiserror::Error;

use crate::resolver;

/// The form input a validation failure refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Description,
    VideoUrl,
    Content,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Title => write!(f, "title"),
            Field::Description => write!(f, "description"),
            Field::VideoUrl => write!(f, "video_url"),
            Field::Content => write!(f, "content"),
        }
    }
}

/// What was wrong with the field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationKind {
    /// Empty after trimming
    Required,

    /// Longer than `max` characters after trimming
    TooLong { max: usize },

    /// The resolver does not recognize the link
    UnsupportedVideoUrl,
}

/// A rejected submission, reported next to the offending field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", self.message())]
pub struct ValidationError {
    pub field: Field,
    pub kind: ValidationKind,
}

impl ValidationError {
    pub fn new(field: Field, kind: ValidationKind) -> Self {
        Self { field, kind }
    }

    /// User-facing message for this failure
    pub fn message(&self) -> String {
        match (self.field, self.kind) {
            (Field::Content, ValidationKind::Required) => "Comment cannot be empty".to_string(),
            (Field::Content, ValidationKind::TooLong { max }) => {
                format!("Comment cannot exceed {} characters", max)
            }
            (_, ValidationKind::Required) => "All fields are required".to_string(),
            (_, ValidationKind::UnsupportedVideoUrl) => {
                "Please enter a valid YouTube, Vimeo, or Dailymotion URL".to_string()
            }
            (field, ValidationKind::TooLong { max }) => {
                format!("{} cannot exceed {} characters", field, max)
            }
        }
    }
}

/// Reject values that are empty after trimming
pub fn require(field: Field, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(field, ValidationKind::Required));
    }
    Ok(())
}

/// Reject values longer than `max` characters after trimming
pub fn max_length(field: Field, value: &str, max: usize) -> Result<(), ValidationError> {
    if value.trim().chars().count() > max {
        return Err(ValidationError::new(field, ValidationKind::TooLong { max }));
    }
    Ok(())
}

/// Accept only links the resolver can classify
pub fn supported_video_url(value: &str) -> Result<(), ValidationError> {
    if !resolver::is_supported(value.trim()) {
        return Err(ValidationError::new(
            Field::VideoUrl,
            ValidationKind::UnsupportedVideoUrl,
        ));
    }
    Ok(())
}
