pub mod json;

use dotenv::dotenv;
use log::error;
use teloxide::Bot;

use crate::core::config::json::{read_json_config, JsonConfig, VoiceConfig};

#[derive(Clone)]
pub struct Config {
    bot: Bot,
    json_config: JsonConfig,
}

impl Config {
    pub fn new() -> Self {
        dotenv().ok();

        let Ok(bot_token) = std::env::var("BOT_TOKEN") else {
            error!("Expected BOT_TOKEN env var");
            std::process::exit(1);
        };
        let bot = Bot::new(bot_token);

        let Ok(mut json_config) = read_json_config("config.json") else {
            error!("Unable to read config.json");
            std::process::exit(1);
        };

        // Secrets may live in the environment instead of config.json.
        if json_config.voice.openai_api_key.trim().is_empty() {
            if let Ok(key) = std::env::var("OPENAI_API_KEY") {
                json_config.voice.openai_api_key = key;
            }
        }

        Config { bot, json_config }
    }

    pub fn get_bot(&self) -> &Bot {
        &self.bot
    }

    pub fn get_json_config(&self) -> &JsonConfig {
        &self.json_config
    }

    pub fn get_voice(&self) -> &VoiceConfig {
        &self.json_config.voice
    }
}
