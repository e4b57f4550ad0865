use std::sync::Arc;

use log::{debug, info, warn};

use crate::error::ApiError;
use crate::metadata::MetadataFetcher;
use crate::request::SummarizeRequest;
use crate::summarize::Summarizer;
use crate::youtube::TranscriptFetcher;
use crate::{extract_video_id, prompt};

/// Validate, fetch metadata and captions, prompt the model. Calls run one after another.
#[derive(Clone)]
pub struct Pipeline {
    metadata: Arc<dyn MetadataFetcher>,
    transcripts: Arc<dyn TranscriptFetcher>,
    summarizer: Arc<dyn Summarizer>,
}

impl Pipeline {
    pub fn new(
        metadata: Arc<dyn MetadataFetcher>,
        transcripts: Arc<dyn TranscriptFetcher>,
        summarizer: Arc<dyn Summarizer>,
    ) -> Self {
        Self {
            metadata,
            transcripts,
            summarizer,
        }
    }

    pub async fn run(&self, request: SummarizeRequest) -> Result<String, ApiError> {
        let request = request.validate()?;

        let video_id = extract_video_id(&request.url).ok_or(ApiError::InvalidYoutubeUrl)?;
        info!("Summarizing {video_id} in {}", request.language);

        let metadata = self
            .metadata
            .fetch_metadata(&request.youtube_api_key, &video_id)
            .await?;
        debug!("Fetched metadata for {video_id}: {:?}", metadata.title);

        let transcript = match self
            .transcripts
            .fetch_transcript(&video_id, request.language.code())
            .await
        {
            Ok(t) => {
                debug!(
                    "Captions for {video_id}: {} segments, {:.0}s, lang={}",
                    t.segments.len(),
                    t.span_secs(),
                    t.language
                );
                t.text()
            }
            Err(e) => {
                warn!("Transcript fetch failed for {video_id}: {e}");
                String::new()
            }
        };
        if transcript.trim().is_empty() {
            return Err(ApiError::TranscriptUnavailable);
        }
        debug!("Transcript for {video_id}: {} chars", transcript.len());

        let prompt = prompt::assemble(&metadata, &transcript, request.language);
        let summary = self.summarizer.summarize(&request.groq_api_key, &prompt).await?;
        info!("Summary for {video_id}: {} chars", summary.len());

        Ok(summary)
    }
}
