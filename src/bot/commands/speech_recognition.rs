use teloxide::{prelude::*, types::ReplyParameters};

use crate::{
    bot::messages::voice::reply_with_transcript,
    core::{config::Config, services::transcription},
    errors::MyError,
};

pub async fn speech_recognition_handler(
    bot: Bot,
    msg: Message,
    config: &Config,
) -> Result<(), MyError> {
    if !transcription::is_available(config.get_voice()) {
        bot.send_message(msg.chat.id, "❌ Voice transcription is not configured.")
            .reply_parameters(ReplyParameters::new(msg.id))
            .await?;
        return Ok(());
    }

    let Some(message) = msg.reply_to_message() else {
        bot.send_message(msg.chat.id, "Reply to a voice message.")
            .reply_parameters(ReplyParameters::new(msg.id))
            .await?;
        return Ok(());
    };

    reply_with_transcript(bot, message, config).await?;

    Ok(())
}
