use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use ytsum::youtube::{TranscriptError, TranscriptFetcher};
use ytsum::{Segment, Transcript};

#[derive(Clone)]
pub struct MockTranscripts {
    pub fragments: Vec<String>,
    /// (video_id, lang) per call
    pub calls: Arc<Mutex<Vec<(String, String)>>>,
    pub disabled: bool,
}

impl MockTranscripts {
    pub fn new(fragments: &[&str]) -> Self {
        Self {
            fragments: fragments.iter().map(|s| s.to_string()).collect(),
            calls: Arc::new(Mutex::new(Vec::new())),
            disabled: false,
        }
    }

    pub fn disabled() -> Self {
        Self {
            disabled: true,
            ..Self::new(&[])
        }
    }
}

#[async_trait]
impl TranscriptFetcher for MockTranscripts {
    async fn fetch_transcript(&self, video_id: &str, lang: &str) -> Result<Transcript, TranscriptError> {
        self.calls
            .lock()
            .unwrap()
            .push((video_id.to_string(), lang.to_string()));
        if self.disabled {
            return Err(TranscriptError::Disabled {
                video_id: video_id.to_string(),
            });
        }
        let segments = self
            .fragments
            .iter()
            .enumerate()
            .map(|(i, text)| Segment {
                text: text.clone(),
                start: i as f64,
                duration: 1.0,
            })
            .collect();
        Ok(Transcript {
            video_id: video_id.to_string(),
            language: lang.to_string(),
            segments,
        })
    }
}
