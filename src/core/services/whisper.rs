use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use log::error;
use once_cell::sync::Lazy;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::Deserialize;

use crate::core::services::transcription::SpeechToText;
use crate::errors::MyError;

const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

// One client for the whole process; building it pulls in the TLS backend.
static HTTP_CLIENT: Lazy<Option<Client>> = Lazy::new(|| {
    Client::builder()
        .timeout(Duration::from_secs(60))
        .build()
        .map_err(|e| error!("Failed to build transcription HTTP client: {}", e))
        .ok()
});

fn http_client() -> Option<&'static Client> {
    HTTP_CLIENT.as_ref()
}

/// Whether the transcription client can be used in this process.
pub fn is_supported() -> bool {
    http_client().is_some()
}

#[derive(Clone)]
pub struct WhisperClient {
    api_key: String,
    api_base: String,
}

#[derive(Debug, Deserialize)]
struct TranscriptionResponse {
    text: String,
}

#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

impl WhisperClient {
    pub fn new(api_key: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }

    /// Point the client at a self-hosted OpenAI-compatible endpoint.
    pub fn with_api_base(mut self, api_base: &str) -> Self {
        self.api_base = api_base.trim_end_matches('/').to_string();
        self
    }
}

#[async_trait]
impl SpeechToText for WhisperClient {
    async fn transcribe(&self, audio: &Path, model: &str) -> Result<String, MyError> {
        let Some(client) = http_client() else {
            return Err(MyError::Other(
                "transcription HTTP client unavailable".to_string(),
            ));
        };

        let file_bytes = tokio::fs::read(audio).await?;
        let filename = audio
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("voice.ogg")
            .to_string();

        let file_part = Part::bytes(file_bytes)
            .file_name(filename)
            .mime_str("audio/ogg")?;

        let form = Form::new()
            .part("file", file_part)
            .text("model", model.to_string());

        let response = client
            .post(format!("{}/audio/transcriptions", self.api_base))
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorResponse>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(MyError::OpenAi {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: TranscriptionResponse = response.json().await?;
        Ok(parsed.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_transcription_response() {
        let parsed: TranscriptionResponse =
            serde_json::from_str(r#"{"text": "hello world"}"#).unwrap();
        assert_eq!(parsed.text, "hello world");
    }

    #[test]
    fn parses_api_error_envelope() {
        let parsed: ApiErrorResponse =
            serde_json::from_str(r#"{"error": {"message": "Invalid API key", "type": "auth"}}"#)
                .unwrap();
        assert_eq!(parsed.error.message, "Invalid API key");
    }

    #[test]
    fn api_error_display_names_status_and_message() {
        let err = MyError::OpenAi {
            status: 401,
            message: "Invalid API key".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("401"));
        assert!(text.contains("Invalid API key"));
    }

    #[test]
    fn api_base_override_drops_trailing_slash() {
        let client = WhisperClient::new("sk-test").with_api_base("https://stt.local/v1/");
        assert_eq!(client.api_base, "https://stt.local/v1");
    }
}
