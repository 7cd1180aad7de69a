//! Integration tests: voice transcription pipeline against mock
//! collaborators, plus config loading from disk.
//!
//! The pipeline tests exercise the same code path `transcribe_voice` runs,
//! with the Telegram and OpenAI collaborators replaced by in-memory fakes.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use async_trait::async_trait;
use conductor_bridge::core::config::json::{read_json_config, VoiceConfig};
use conductor_bridge::core::services::transcription::{
    is_available, transcribe_with, AttachmentSource, SpeechToText,
};
use conductor_bridge::errors::MyError;

fn voice_config(enabled: bool, key: &str) -> VoiceConfig {
    VoiceConfig {
        enabled,
        openai_api_key: key.to_string(),
        model: "whisper-1".to_string(),
    }
}

struct RecordingSource {
    fail_download: bool,
    dests: Mutex<Vec<PathBuf>>,
}

impl RecordingSource {
    fn new(fail_download: bool) -> Self {
        Self {
            fail_download,
            dests: Mutex::new(vec![]),
        }
    }

    fn no_leftover_files(&self) -> bool {
        self.dests.lock().unwrap().iter().all(|d| !d.exists())
    }
}

#[async_trait]
impl AttachmentSource for RecordingSource {
    async fn resolve(&self, file_id: &str) -> Result<String, MyError> {
        Ok(format!("voice/{}", file_id))
    }

    async fn download(&self, _remote_path: &str, dest: &Path) -> Result<(), MyError> {
        self.dests.lock().unwrap().push(dest.to_path_buf());
        if self.fail_download {
            return Err(MyError::Other("simulated network error".to_string()));
        }
        std::fs::write(dest, b"OggS fake voice payload")?;
        Ok(())
    }
}

struct ScriptedStt {
    text: Option<&'static str>,
}

#[async_trait]
impl SpeechToText for ScriptedStt {
    async fn transcribe(&self, audio: &Path, model: &str) -> Result<String, MyError> {
        assert!(audio.exists());
        assert_eq!(model, "whisper-1");
        match self.text {
            Some(t) => Ok(t.to_string()),
            None => Err(MyError::Other("simulated service failure".to_string())),
        }
    }
}

/// Fully configured voice section passes the availability gate; a disabled
/// one fails it silently.
#[test]
fn availability_follows_configuration() {
    assert!(is_available(&voice_config(true, "sk-test")));
    assert!(!is_available(&voice_config(false, "sk-test")));
    assert!(!is_available(&voice_config(true, "")));
}

/// Whitespace around the recognized text never reaches the caller.
#[tokio::test]
async fn pipeline_returns_trimmed_transcript() {
    let source = RecordingSource::new(false);
    let stt = ScriptedStt {
        text: Some("  hello world  "),
    };

    let result = transcribe_with(&source, &stt, "f1", &voice_config(true, "sk-test")).await;

    assert_eq!(result.as_deref(), Some("hello world"));
    assert!(source.no_leftover_files());
}

/// A download failure degrades to `None` and leaves nothing behind in the
/// temp directory.
#[tokio::test]
async fn pipeline_download_failure_degrades_to_none() {
    let source = RecordingSource::new(true);
    let stt = ScriptedStt { text: Some("text") };

    let result = transcribe_with(&source, &stt, "f1", &voice_config(true, "sk-test")).await;

    assert_eq!(result, None);
    assert!(source.no_leftover_files());
}

/// A service failure after a successful download still removes the
/// downloaded temp file.
#[tokio::test]
async fn pipeline_service_failure_cleans_up_download() {
    let source = RecordingSource::new(false);
    let stt = ScriptedStt { text: None };

    let result = transcribe_with(&source, &stt, "f1", &voice_config(true, "sk-test")).await;

    assert_eq!(result, None);
    assert_eq!(source.dests.lock().unwrap().len(), 1);
    assert!(source.no_leftover_files());
}

/// config.json on disk deserializes into the voice section with serde
/// defaults applied.
#[test]
fn config_file_loads_with_defaults() {
    let mut file = tempfile::NamedTempFile::new().expect("create temp config");
    write!(file, r#"{{"voice": {{"enabled": true, "openai_api_key": "sk-test"}}}}"#)
        .expect("write temp config");

    let config = read_json_config(file.path()).expect("read config");

    assert!(config.voice.enabled);
    assert_eq!(config.voice.openai_api_key, "sk-test");
    assert_eq!(config.voice.model, "whisper-1");
}
