//! Recording playback/download triggering.
//!
//! The mechanics of audio playback and file transfer live in an external
//! media collaborator; this service owns only the triggering contract:
//! records without a recording are rejected, and remote work is gated on
//! connectivity like every other gateway call.

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;
use voicedeck_domain::{CallLogRecord, Result, VoicedeckError};

use crate::session::ports::ConnectivityProbe;

/// Trait for the external audio playback / file download collaborator.
#[async_trait]
pub trait RecordingMedia: Send + Sync {
    /// Start playing the recording at `url`.
    async fn play(&self, url: &str) -> Result<()>;

    /// Stop any current playback.
    async fn stop(&self) -> Result<()>;

    /// Download the recording at `url`; returns the saved path.
    async fn download(&self, url: &str) -> Result<PathBuf>;
}

/// Validates and triggers recording playback and download.
pub struct RecordingService {
    media: Arc<dyn RecordingMedia>,
    connectivity: Arc<dyn ConnectivityProbe>,
}

impl RecordingService {
    /// Create a new recording service.
    pub fn new(media: Arc<dyn RecordingMedia>, connectivity: Arc<dyn ConnectivityProbe>) -> Self {
        Self { media, connectivity }
    }

    /// Play the record's recording.
    ///
    /// # Errors
    ///
    /// `NotFound` when the record has no recording, `NoConnectivity` when
    /// offline, or whatever the media collaborator reports.
    pub async fn play(&self, record: &CallLogRecord) -> Result<()> {
        let url = Self::recording_url(record)?;
        self.ensure_online().await?;
        debug!(call_id = %record.id, "starting recording playback");
        self.media.play(url).await
    }

    /// Stop playback.
    pub async fn stop(&self) -> Result<()> {
        self.media.stop().await
    }

    /// Download the record's recording; returns the saved path.
    pub async fn download(&self, record: &CallLogRecord) -> Result<PathBuf> {
        let url = Self::recording_url(record)?;
        self.ensure_online().await?;
        debug!(call_id = %record.id, "downloading recording");
        self.media.download(url).await
    }

    fn recording_url(record: &CallLogRecord) -> Result<&str> {
        record
            .recording_url
            .as_deref()
            .filter(|url| !url.is_empty())
            .ok_or_else(|| VoicedeckError::NotFound("no recording available for this call".into()))
    }

    async fn ensure_online(&self) -> Result<()> {
        if self.connectivity.check().await.is_online() {
            Ok(())
        } else {
            Err(VoicedeckError::NoConnectivity)
        }
    }
}
