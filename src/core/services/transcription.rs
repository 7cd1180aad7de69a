use std::path::{Path, PathBuf};

use async_trait::async_trait;
use log::{error, info, warn};
use teloxide::prelude::*;
use teloxide::types::FileId;
use uuid::Uuid;

use crate::core::config::json::VoiceConfig;
use crate::core::services::whisper::{self, WhisperClient};
use crate::errors::MyError;

/// Where voice attachments come from: resolve an opaque file id to a remote
/// path, then pull that path's bytes down to a local destination.
#[async_trait]
pub trait AttachmentSource: Send + Sync {
    async fn resolve(&self, file_id: &str) -> Result<String, MyError>;

    async fn download(&self, remote_path: &str, dest: &Path) -> Result<(), MyError>;
}

/// A service that turns an audio file into recognized text.
#[async_trait]
pub trait SpeechToText: Send + Sync {
    async fn transcribe(&self, audio: &Path, model: &str) -> Result<String, MyError>;
}

#[async_trait]
impl AttachmentSource for Bot {
    async fn resolve(&self, file_id: &str) -> Result<String, MyError> {
        let file = self.get_file(FileId(file_id.to_string())).send().await?;
        Ok(file.path)
    }

    async fn download(&self, remote_path: &str, dest: &Path) -> Result<(), MyError> {
        let file_url = format!(
            "https://api.telegram.org/file/bot{}/{}",
            self.token(),
            remote_path
        );
        let response = reqwest::get(file_url).await?.error_for_status()?;
        let bytes = response.bytes().await?;
        tokio::fs::write(dest, &bytes).await?;
        Ok(())
    }
}

/// A uniquely named `.ogg` file under the system temp dir, removed when the
/// guard goes out of scope.
struct TempAudioFile {
    path: PathBuf,
}

impl TempAudioFile {
    fn new() -> Self {
        let path = std::env::temp_dir().join(format!("voice-{}.ogg", Uuid::new_v4()));
        Self { path }
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempAudioFile {
    fn drop(&mut self) {
        if self.path.exists() {
            if let Err(e) = std::fs::remove_file(&self.path) {
                warn!("Failed to remove temp voice file {}: {}", self.path.display(), e);
            }
        }
    }
}

/// Check whether voice transcription is configured and usable.
pub fn is_available(config: &VoiceConfig) -> bool {
    check_available(config, whisper::is_supported())
}

fn check_available(config: &VoiceConfig, client_ready: bool) -> bool {
    if !config.enabled {
        return false;
    }
    if !client_ready {
        warn!(
            "Voice enabled but the transcription HTTP client could not be initialized; \
             rebuild with reqwest's default TLS features"
        );
        return false;
    }
    if config.openai_api_key.trim().is_empty() {
        warn!("Voice enabled but voice.openai_api_key not set");
        return false;
    }
    true
}

/// Download a Telegram voice message and transcribe it via Whisper.
///
/// Returns the transcribed text, or `None` on failure. Never errors out to
/// the caller; every failure is logged and degrades to `None`.
pub async fn transcribe_voice(
    bot: &Bot,
    voice_file_id: &str,
    config: &VoiceConfig,
) -> Option<String> {
    if config.openai_api_key.trim().is_empty() {
        return None;
    }
    let client = WhisperClient::new(&config.openai_api_key);
    transcribe_with(bot, &client, voice_file_id, config).await
}

/// Collaborator-generic transcription pipeline behind [`transcribe_voice`].
pub async fn transcribe_with<S, T>(
    source: &S,
    stt: &T,
    voice_file_id: &str,
    config: &VoiceConfig,
) -> Option<String>
where
    S: AttachmentSource,
    T: SpeechToText,
{
    match run_pipeline(source, stt, voice_file_id, config).await {
        Ok(text) => text,
        Err(e) => {
            error!("Voice transcription failed: {}", e);
            None
        }
    }
}

async fn run_pipeline<S, T>(
    source: &S,
    stt: &T,
    voice_file_id: &str,
    config: &VoiceConfig,
) -> Result<Option<String>, MyError>
where
    S: AttachmentSource,
    T: SpeechToText,
{
    let remote_path = source.resolve(voice_file_id).await?;

    let tmp = TempAudioFile::new();
    source.download(&remote_path, tmp.path()).await?;

    let size = tokio::fs::metadata(tmp.path()).await?.len();
    info!(
        "Voice file downloaded ({} bytes), transcribing with {}",
        size, config.model
    );

    let raw = stt.transcribe(tmp.path(), &config.model).await?;

    let text = raw.trim().to_string();
    if text.is_empty() {
        return Ok(None);
    }

    let preview: String = text.chars().take(100).collect();
    info!(
        "Transcription result ({} chars): {}",
        text.chars().count(),
        preview
    );
    Ok(Some(text))
}
