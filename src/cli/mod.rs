//! Command-line interface for knacky.
//!
//! Provides commands for browsing videos, viewing a video with its
//! comments, posting videos and comments, and checking video links.
//! Every mutation is followed by a full refetch; nothing is patched locally.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::client::{ClientError, ContentClient};
use crate::config::{self, ResolvedConfig};
use crate::domain::{
    comment_count_label, format_date, Comment, CreateCommentRequest, CreateVideoRequest, Video,
};
use crate::preferences::{PreferenceStore, SplashGate};
use crate::resolver::{self, EmbedKind, EmbedResult};

/// knacky - Browse and post videos
#[derive(Parser, Debug)]
#[command(name = "knacky")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List your videos
    Videos,

    /// Show a video with its comments
    Show {
        /// Video ID
        video_id: String,
    },

    /// Add a new video
    Add {
        /// Video title
        #[arg(short, long)]
        title: String,

        /// Video description
        #[arg(short, long)]
        description: String,

        /// YouTube, Vimeo, or Dailymotion URL
        #[arg(short, long)]
        url: String,
    },

    /// Post a comment on a video
    Comment {
        /// Video ID
        video_id: String,

        /// Comment text (up to 500 characters)
        content: String,
    },

    /// Check how a video link will be played
    Resolve {
        /// Video URL
        url: String,
    },

    /// Show the welcome screen
    Welcome {
        /// Don't show the welcome screen again
        #[arg(long)]
        dismiss: bool,
    },

    /// Show resolved configuration (debug)
    Config,
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Resolve { url } => resolve_url(&url),
            Commands::Config => show_config(),
            Commands::Welcome { dismiss } => welcome(dismiss).await,
            command => {
                let cfg = config::config()?;
                splash_hint().await;
                let client = ContentClient::from_config(cfg);

                let result = match command {
                    Commands::Videos => list_videos(&client, cfg).await,
                    Commands::Show { video_id } => show_video(&client, &video_id).await,
                    Commands::Add {
                        title,
                        description,
                        url,
                    } => add_video(&client, cfg, &title, &description, &url).await,
                    Commands::Comment { video_id, content } => {
                        post_comment(&client, cfg, &video_id, &content).await
                    }
                    Commands::Resolve { .. } | Commands::Config | Commands::Welcome { .. } => {
                        Ok(())
                    }
                };

                if let Err(err) = result {
                    report_failure(&err);
                    std::process::exit(1);
                }
                Ok(())
            }
        }
    }
}

/// Print a client failure as the user sees it
fn report_failure(err: &ClientError) {
    match err {
        ClientError::Validation(validation) => {
            eprintln!("{}: {}", validation.field, validation);
        }
        _ => {
            eprintln!("{}", err);
            eprintln!("Please try again.");
        }
    }
}

/// Remind the user about the welcome screen until it is dismissed
async fn splash_hint() {
    let store = match PreferenceStore::open_default().await {
        Ok(store) => store,
        Err(e) => {
            tracing::debug!("Preferences unavailable: {:#}", e);
            return;
        }
    };

    if SplashGate::load(store).should_show() {
        eprintln!("New here? Run 'knacky welcome' to get started.\n");
    }
}

/// List the configured user's videos
async fn list_videos(client: &ContentClient, cfg: &ResolvedConfig) -> Result<(), ClientError> {
    let videos = client.list_videos(&cfg.user_id).await?;
    print_video_list(&cfg.user_id, &videos);
    Ok(())
}

fn print_video_list(user_id: &str, videos: &[Video]) {
    println!("{} Videos\n", user_id);

    if videos.is_empty() {
        println!("No videos yet. Use 'knacky add' to post one.");
        return;
    }

    println!("{:<38} {:<14} {:<14} {:<40}", "ID", "COMMENTS", "DATE", "TITLE");
    println!("{}", "-".repeat(106));

    for video in videos {
        println!(
            "{:<38} {:<14} {:<14} {:<40}",
            video.id,
            comment_count_label(video.num_comments),
            format_date(&video.created_at),
            truncate(&video.title, 40)
        );
        match resolver::thumbnail_url(&video.video_url) {
            Some(thumbnail) => println!("{:<38} thumbnail: {}", "", thumbnail),
            None => println!("{:<38} No thumbnail", ""),
        }
    }
}

/// Show a video and its comments, fetched together
async fn show_video(client: &ContentClient, video_id: &str) -> Result<(), ClientError> {
    let page = client.video_page(video_id).await?;
    let video = &page.video;

    println!("{}", player_line(video.embed().as_ref()));
    println!();
    println!("{}", video.title);
    println!("{}", video.description);
    println!("Posted by {} on {}", video.user_id, format_date(&video.created_at));
    println!();

    print_comments(&page.comments);
    Ok(())
}

/// What the player area shows for a resolved link
fn player_line(embed: Option<&EmbedResult>) -> String {
    match embed {
        Some(EmbedResult {
            embed_url,
            kind: EmbedKind::Provider { provider, .. },
        }) => format!("Player ({}): {}", provider, embed_url),
        Some(EmbedResult {
            embed_url,
            kind: EmbedKind::DirectFile,
        }) => format!("Native playback: {}", embed_url),
        None => "Unable to load video".to_string(),
    }
}

fn print_comments(comments: &[Comment]) {
    println!("{}", comment_count_label(comments.len() as u64));

    if comments.is_empty() {
        println!("No comments yet. Be the first to comment!");
        return;
    }

    for comment in comments {
        println!();
        println!("{} • {}", comment.user_id, format_date(&comment.created_at));
        println!("{}", comment.content);
    }
}

/// Validate and submit a video, then refetch the list
async fn add_video(
    client: &ContentClient,
    cfg: &ResolvedConfig,
    title: &str,
    description: &str,
    url: &str,
) -> Result<(), ClientError> {
    let request = CreateVideoRequest::new(cfg.user_id.clone(), title, description, url)?;
    client.create_video(&request).await?;

    eprintln!("Video added.\n");
    list_videos(client, cfg).await
}

/// Validate and submit a comment, then refetch the video page
async fn post_comment(
    client: &ContentClient,
    cfg: &ResolvedConfig,
    video_id: &str,
    content: &str,
) -> Result<(), ClientError> {
    let request = CreateCommentRequest::new(video_id, cfg.user_id.clone(), content)?;
    client.create_comment(&request).await?;

    eprintln!("Comment posted.\n");
    show_video(client, video_id).await
}

/// Classify a link without touching the network
fn resolve_url(url: &str) -> Result<()> {
    match resolver::resolve(url.trim()) {
        Some(result) => {
            println!("{}", player_line(Some(&result)));
            if let Some(thumbnail) = result.thumbnail_url() {
                println!("Thumbnail: {}", thumbnail);
            }
            Ok(())
        }
        None => {
            println!("{}", player_line(None));
            println!("Supported: YouTube, Vimeo, Dailymotion, or a direct video file");
            std::process::exit(1);
        }
    }
}

/// Show the welcome screen, optionally dismissing it for good
async fn welcome(dismiss: bool) -> Result<()> {
    let store = PreferenceStore::open_default().await?;
    let mut gate = SplashGate::load(store);

    println!("KNACKY");
    println!();
    println!("Share videos from YouTube, Vimeo, and Dailymotion, and talk about them.");
    println!();
    println!("  knacky videos            list your videos");
    println!("  knacky add -t -d -u      post a video");
    println!("  knacky show <id>         watch a video and read its comments");
    println!("  knacky comment <id> ...  join the conversation");

    if dismiss {
        gate.dismiss().await?;
        println!("\nYou won't see this again.");
    } else if gate.should_show() {
        println!("\nRun 'knacky welcome --dismiss' to get started.");
    }

    Ok(())
}

/// Show the resolved configuration (for debugging)
fn show_config() -> Result<()> {
    let cfg = config::config()?;

    println!("Knacky Configuration");
    println!();
    println!(
        "Config file: {}",
        cfg.config_file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(none - using defaults)".to_string())
    );
    println!();
    println!("Home:       {}", cfg.home.display());
    println!("API:        {}", cfg.api_base_url);
    println!("User:       {}", cfg.user_id);
    println!();
    println!("Read retry:");
    println!("  Attempts:      {}", cfg.read_retry.attempts);
    println!("  Backoff:       {}ms", cfg.read_retry.backoff_ms);
    println!("  Max backoff:   {}ms", cfg.read_retry.max_backoff_ms);

    Ok(())
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        let head: String = s.chars().take(max - 3).collect();
        format!("{}...", head)
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_line() {
        let embed = resolver::resolve("https://vimeo.com/12345");
        assert_eq!(
            player_line(embed.as_ref()),
            "Player (vimeo): https://player.vimeo.com/video/12345"
        );

        let direct = resolver::resolve("https://cdn.example.com/a.webm");
        assert_eq!(
            player_line(direct.as_ref()),
            "Native playback: https://cdn.example.com/a.webm"
        );

        assert_eq!(player_line(None), "Unable to load video");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdefghijkl", 10), "abcdefg...");
    }

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::parse_from([
            "knacky",
            "add",
            "--title",
            "T",
            "--description",
            "D",
            "--url",
            "https://youtu.be/abc",
        ]);
        assert!(matches!(cli.command, Commands::Add { ref title, .. } if title == "T"));

        let cli = Cli::parse_from(["knacky", "comment", "v1", "nice video"]);
        assert!(matches!(
            cli.command,
            Commands::Comment { ref video_id, ref content } if video_id == "v1" && content == "nice video"
        ));
    }
}
