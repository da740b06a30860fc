//! Content client for the backend video API.
//!
//! Every operation is a fresh round trip: there is no local state and no
//! caching. Reads may be retried under a bounded `ReadRetry` (disabled by
//! default); writes are issued exactly once.
//!
//! | Operation       | Method | Path               |
//! |-----------------|--------|--------------------|
//! | list videos     | GET    | `/videos`          |
//! | get video       | GET    | `/videos/single`   |
//! | create video    | POST   | `/videos`          |
//! | list comments   | GET    | `/videos/comments` |
//! | create comment  | POST   | `/videos/comments` |

pub mod retry;
pub mod transport;

use std::fmt;
use std::sync::Arc;

use anyhow::Context;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::ResolvedConfig;
use crate::domain::{
    Comment, CreateCommentRequest, CreateVideoRequest, GetCommentsResponse, GetVideoResponse,
    GetVideosResponse, Video,
};

pub use retry::ReadRetry;
pub use transport::{HttpTransport, Transport, TransportResponse};
pub use crate::domain::validation::{Field, ValidationError, ValidationKind};

const VIDEOS_PATH: &str = "/videos";
const VIDEO_PATH: &str = "/videos/single";
const COMMENTS_PATH: &str = "/videos/comments";

/// The backend resource an operation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Videos,
    Video,
    Comments,
    Comment,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::Videos => write!(f, "videos"),
            Resource::Video => write!(f, "video"),
            Resource::Comments => write!(f, "comments"),
            Resource::Comment => write!(f, "comment"),
        }
    }
}

impl Resource {
    /// Verb used when a write to this resource fails
    fn submit_verb(&self) -> &'static str {
        match self {
            Resource::Comment | Resource::Comments => "post",
            Resource::Video | Resource::Videos => "create",
        }
    }
}

/// Errors surfaced by the content client.
///
/// Network failures carry no detail beyond the resource: status codes and
/// transport errors are logged, then collapsed into one generic message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// Rejected before any request was issued
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A read failed (any non-success status, transport error or bad body)
    #[error("Failed to fetch {0}")]
    Fetch(Resource),

    /// A write failed (any non-success status or transport error)
    #[error("Failed to {verb} {0}", verb = .0.submit_verb())]
    Submission(Resource),
}

/// A video together with its comments
#[derive(Debug, Clone)]
pub struct VideoPage {
    pub video: Video,
    pub comments: Vec<Comment>,
}

/// Typed client for the backend API
#[derive(Clone)]
pub struct ContentClient {
    transport: Arc<dyn Transport>,
    read_retry: ReadRetry,
}

impl ContentClient {
    /// Create a client over any transport
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            read_retry: ReadRetry::disabled(),
        }
    }

    /// Create an HTTP client for a backend base URL
    pub fn http(base_url: impl Into<String>) -> Self {
        Self::new(Arc::new(HttpTransport::new(base_url)))
    }

    /// Create from resolved configuration
    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self::http(config.api_base_url.clone()).with_read_retry(config.read_retry.clone())
    }

    /// Retry failed reads as `retry` allows
    pub fn with_read_retry(mut self, retry: ReadRetry) -> Self {
        self.read_retry = retry;
        self
    }

    /// List a user's videos, in server order
    pub async fn list_videos(&self, user_id: &str) -> Result<Vec<Video>, ClientError> {
        let response: GetVideosResponse = self
            .fetch(Resource::Videos, VIDEOS_PATH, &[("user_id", user_id)])
            .await?;
        Ok(response.videos)
    }

    /// Get a single video by id
    pub async fn get_video(&self, video_id: &str) -> Result<Video, ClientError> {
        let response: GetVideoResponse = self
            .fetch(Resource::Video, VIDEO_PATH, &[("video_id", video_id)])
            .await?;
        Ok(response.video)
    }

    /// List a video's comments, in server order
    pub async fn list_comments(&self, video_id: &str) -> Result<Vec<Comment>, ClientError> {
        let response: GetCommentsResponse = self
            .fetch(Resource::Comments, COMMENTS_PATH, &[("video_id", video_id)])
            .await?;
        Ok(response.comments)
    }

    /// Fetch a video and its comments concurrently.
    ///
    /// Both requests are in flight at once; the first failure wins.
    pub async fn video_page(&self, video_id: &str) -> Result<VideoPage, ClientError> {
        let (video, comments) =
            tokio::try_join!(self.get_video(video_id), self.list_comments(video_id))?;
        Ok(VideoPage { video, comments })
    }

    /// Submit a new video.
    ///
    /// The trimmed request is validated and sent; an invalid request never
    /// reaches the transport.
    pub async fn create_video(&self, request: &CreateVideoRequest) -> Result<(), ClientError> {
        let request = request.normalized()?;
        self.submit(Resource::Video, VIDEOS_PATH, &request).await
    }

    /// Submit a new comment, trimmed and validated like `create_video`
    pub async fn create_comment(&self, request: &CreateCommentRequest) -> Result<(), ClientError> {
        let request = request.normalized()?;
        self.submit(Resource::Comment, COMMENTS_PATH, &request).await
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        resource: Resource,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ClientError> {
        let mut attempt = 1;

        loop {
            match self.fetch_once(path, query).await {
                Ok(value) => return Ok(value),
                Err(reason) if self.read_retry.allows_another(attempt) => {
                    let delay = self.read_retry.backoff(attempt);
                    warn!(%resource, attempt, ?delay, "Fetch failed, retrying: {:#}", reason);
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(reason) => {
                    warn!(%resource, attempt, "Fetch failed: {:#}", reason);
                    return Err(ClientError::Fetch(resource));
                }
            }
        }
    }

    async fn fetch_once<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> anyhow::Result<T> {
        let response = self.transport.get(path, query).await?;

        if !response.is_success() {
            anyhow::bail!("Backend returned HTTP {}", response.status);
        }

        serde_json::from_str(&response.body).context("Failed to parse response JSON")
    }

    async fn submit<B: Serialize>(
        &self,
        resource: Resource,
        path: &str,
        body: &B,
    ) -> Result<(), ClientError> {
        let body = serde_json::to_value(body).map_err(|e| {
            warn!(%resource, "Failed to encode request: {}", e);
            ClientError::Submission(resource)
        })?;

        debug!(%resource, "Submitting");
        match self.transport.post_json(path, &body).await {
            Ok(response) if response.is_success() => Ok(()),
            Ok(response) => {
                warn!(%resource, status = response.status, "Submission rejected");
                Err(ClientError::Submission(resource))
            }
            Err(e) => {
                warn!(%resource, "Submission failed: {:#}", e);
                Err(ClientError::Submission(resource))
            }
        }
    }
}
