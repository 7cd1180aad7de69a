use std::sync::Arc;

use log::error;
use teloxide::{prelude::Message, Bot};
use tokio::task;

use crate::{
    bot::commands::{speech_recognition::speech_recognition_handler, start::start_handler},
    core::config::Config,
    errors::MyError,
    util::enums::Command,
};

pub async fn command_handlers(
    bot: Bot,
    message: Message,
    cmd: Command,
    config: Arc<Config>,
) -> Result<(), MyError> {
    task::spawn(async move {
        let result = match cmd {
            Command::Start => start_handler(bot, message, &config).await,
            Command::SpeechRecognition => speech_recognition_handler(bot, message, &config).await,
        };
        if let Err(e) = result {
            error!("Command handler failed: {:?}", e);
        }
    });
    Ok(())
}
