//! knacky - Browsing and posting client for a small video-sharing service
//!
//! Users list videos, watch one with its comments, and post new videos and
//! comments through the backend HTTP API.
//!
//! # Architecture
//!
//! Two independent pieces carry the logic:
//! - The resolver turns third-party video links into embeddable player URLs
//!   and doubles as the input gate for new videos
//! - The content client speaks the backend's REST contract; every call is a
//!   fresh round trip with no caching
//!
//! # Modules
//!
//! - `resolver`: Video URL classification and embed URL rewriting
//! - `client`: Backend API client and transport
//! - `domain`: Data structures (Video, Comment, request/response envelopes)
//! - `preferences`: Persistent client preferences (welcome screen flag)
//! - `config`: Configuration loading
//! - `cli`: Command-line interface
//!
//! # Usage
//!
//! ```bash
//! # List your videos
//! knacky videos
//!
//! # Watch a video and read its comments
//! knacky show <video-id>
//!
//! # Post a video
//! knacky add -t "Title" -d "Description" -u https://youtu.be/dQw4w9WgXcQ
//! ```

pub mod cli;
pub mod client;
pub mod config;
pub mod domain;
pub mod preferences;
pub mod resolver;

// Re-export main types at crate root for convenience
pub use client::{ClientError, ContentClient, Resource, Transport, ValidationError, VideoPage};
pub use domain::{Comment, CreateCommentRequest, CreateVideoRequest, Video};
pub use preferences::{PreferenceStore, SplashGate};
pub use resolver::{resolve, EmbedKind, EmbedResult, Provider};
