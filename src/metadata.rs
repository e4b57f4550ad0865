use async_trait::async_trait;
use eyre::{Result, bail};
use log::debug;
use serde::Deserialize;

use crate::VideoMetadata;

pub const DEFAULT_DATA_API_URL: &str = "https://www.googleapis.com/youtube/v3";

/// Source of video titles and descriptions
#[async_trait]
pub trait MetadataFetcher: Send + Sync {
    async fn fetch_metadata(&self, api_key: &str, video_id: &str) -> Result<VideoMetadata>;
}

#[derive(Debug, Deserialize)]
struct VideoListResponse {
    #[serde(default)]
    items: Vec<VideoItem>,
}

#[derive(Debug, Deserialize)]
struct VideoItem {
    snippet: Snippet,
}

#[derive(Debug, Deserialize)]
struct Snippet {
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: String,
}

/// YouTube Data API v3 `videos.list` client
#[derive(Debug, Clone)]
pub struct DataApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl DataApiClient {
    pub fn new(client: reqwest::Client) -> Self {
        Self {
            client,
            base_url: DEFAULT_DATA_API_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }
}

#[async_trait]
impl MetadataFetcher for DataApiClient {
    async fn fetch_metadata(&self, api_key: &str, video_id: &str) -> Result<VideoMetadata> {
        let url = format!("{}/videos", self.base_url);
        debug!("Fetching snippet for {video_id} from {url}");

        let resp = self
            .client
            .get(&url)
            .query(&[("part", "snippet"), ("id", video_id), ("key", api_key)])
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            bail!("YouTube Data API returned {status}: {body}");
        }

        let list: VideoListResponse = resp.json().await?;
        first_snippet(list, video_id)
    }
}

fn first_snippet(list: VideoListResponse, video_id: &str) -> Result<VideoMetadata> {
    match list.items.into_iter().next() {
        Some(item) => Ok(VideoMetadata {
            title: item.snippet.title,
            description: item.snippet.description,
        }),
        None => bail!("no video found with id {video_id}"),
    }
}
