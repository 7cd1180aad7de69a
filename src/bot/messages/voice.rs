use std::sync::Arc;

use log::error;
use teloxide::{
    prelude::*,
    types::{ParseMode, ReplyParameters},
    utils::html,
};

use crate::{
    core::{config::Config, services::transcription},
    errors::MyError,
    util::split_text,
};

pub async fn handle_voice(bot: Bot, msg: Message, config: Arc<Config>) -> Result<(), MyError> {
    let Some(user) = msg.from.as_ref() else {
        return Ok(());
    };
    if user.is_bot || msg.forward_from_user().is_some_and(|orig| orig.is_bot) {
        return Ok(());
    }

    // Disabled or misconfigured transcription is not an error for the chat.
    if !transcription::is_available(config.get_voice()) {
        return Ok(());
    }

    tokio::spawn(async move {
        if let Err(e) = reply_with_transcript(bot, &msg, &config).await {
            error!("Voice handler failed: {:?}", e);
        }
    });

    Ok(())
}

pub async fn reply_with_transcript(
    bot: Bot,
    msg: &Message,
    config: &Config,
) -> Result<(), MyError> {
    let Some(voice) = msg.voice() else {
        bot.send_message(msg.chat.id, "❌ Could not find a voice message.")
            .reply_parameters(ReplyParameters::new(msg.id))
            .await?;
        return Ok(());
    };
    let file_id = voice.file.id.0.clone();

    match transcription::transcribe_voice(&bot, &file_id, config.get_voice()).await {
        Some(text) => {
            for part in split_text(&text, 4000) {
                bot.send_message(
                    msg.chat.id,
                    format!("<blockquote expandable>{}</blockquote>", html::escape(&part)),
                )
                .parse_mode(ParseMode::Html)
                .reply_parameters(ReplyParameters::new(msg.id))
                .await?;
            }
        }
        None => {
            bot.send_message(msg.chat.id, "❌ Could not transcribe voice message.")
                .reply_parameters(ReplyParameters::new(msg.id))
                .await?;
        }
    }

    Ok(())
}
