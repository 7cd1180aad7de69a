use teloxide::macros::BotCommands;

#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase")]
pub enum Command {
    #[command(description = "Start the bridge")]
    Start,
    #[command(description = "Transcribe the voice message you replied to")]
    SpeechRecognition,
}
