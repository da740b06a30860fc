//! Domain types for the knacky client.
//!
//! This module contains the wire contracts shared with the backend:
//! - Video: a posted video and its denormalized comment count
//! - Comment: a comment attached to a video
//! - Request/response envelopes for each API operation
//! - Validation rules applied before a submission is sent
//! - Display helpers used by the presentation layer

pub mod comment;
pub mod display;
pub mod validation;
pub mod video;

// Re-export commonly used types
pub use comment::{Comment, CreateCommentRequest, GetCommentsResponse, MAX_COMMENT_LENGTH};
pub use display::{comment_count_label, format_date};
pub use validation::{Field, ValidationError, ValidationKind};
pub use video::{CreateVideoRequest, GetVideoResponse, GetVideosResponse, Video};
