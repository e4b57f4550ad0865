use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use ytsum::VideoMetadata;
use ytsum::metadata::MetadataFetcher;

#[derive(Clone)]
pub struct MockMetadata {
    pub metadata: VideoMetadata,
    /// (api_key, video_id) per call
    pub calls: Arc<Mutex<Vec<(String, String)>>>,
    pub fail_with: Option<String>,
}

impl MockMetadata {
    pub fn new(title: &str, description: &str) -> Self {
        Self {
            metadata: VideoMetadata {
                title: title.to_string(),
                description: description.to_string(),
            },
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            fail_with: Some(msg.to_string()),
            ..Self::new("", "")
        }
    }
}

#[async_trait]
impl MetadataFetcher for MockMetadata {
    async fn fetch_metadata(&self, api_key: &str, video_id: &str) -> eyre::Result<VideoMetadata> {
        self.calls
            .lock()
            .unwrap()
            .push((api_key.to_string(), video_id.to_string()));
        if let Some(ref msg) = self.fail_with {
            return Err(eyre::eyre!("{}", msg));
        }
        Ok(self.metadata.clone())
    }
}
