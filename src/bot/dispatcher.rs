use std::sync::Arc;

use log::info;
use teloxide::{
    dispatching::{Dispatcher, HandlerExt, MessageFilterExt, UpdateFilterExt},
    dptree,
    prelude::{Message, Requester},
    types::Update,
    utils::command::BotCommands,
};

use crate::{
    bot::{commander::command_handlers, messages::voice::handle_voice},
    core::config::Config,
    errors::MyError,
    util::enums::Command,
};

pub async fn run() -> Result<(), MyError> {
    let config = Arc::new(Config::new());
    let bot = config.get_bot().clone();

    bot.set_my_commands(Command::bot_commands()).await?;

    let me = bot.get_me().await?;
    info!("Bot name: {:?}", me.username());

    let handlers = dptree::entry()
        .branch(
            Update::filter_message()
                .filter_command::<Command>()
                .endpoint(command_handlers),
        )
        .branch(Update::filter_message().branch(Message::filter_voice().endpoint(handle_voice)));

    Dispatcher::builder(bot, handlers)
        .dependencies(dptree::deps![config])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}
