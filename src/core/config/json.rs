use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

#[derive(Deserialize, Debug, Clone, Default)]
pub struct JsonConfig {
    #[serde(default)]
    pub voice: VoiceConfig,
}

#[derive(Deserialize, Debug, Clone)]
pub struct VoiceConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub openai_api_key: String,
    #[serde(default = "default_model")]
    pub model: String,
}

impl Default for VoiceConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            openai_api_key: String::new(),
            model: default_model(),
        }
    }
}

fn default_model() -> String {
    "whisper-1".to_string()
}

pub fn read_json_config<P: AsRef<Path>>(path: P) -> Result<JsonConfig, Box<dyn std::error::Error>> {
    let mut file = File::open(path)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    let config: JsonConfig = serde_json::from_str(&contents)?;
    Ok(config)
}
