use teloxide::{
    prelude::*,
    types::{ParseMode, ReplyParameters},
};

use crate::{
    core::{config::Config, services::transcription},
    errors::MyError,
};

pub async fn start_handler(bot: Bot, message: Message, config: &Config) -> Result<(), MyError> {
    let voice_status = if transcription::is_available(config.get_voice()) {
        "✅ enabled"
    } else {
        "❌ not configured"
    };

    bot.send_message(
        message.chat.id,
        format!(
            "<b>Conductor bridge is up!</b> 🎤\n\n\
             Send or forward a voice message and I will transcribe it.\n\
             Reply to one with /speechrecognition to transcribe it on demand.\n\n\
             Voice transcription: {}",
            voice_status
        ),
    )
    .parse_mode(ParseMode::Html)
    .reply_parameters(ReplyParameters::new(message.id))
    .await?;

    Ok(())
}
