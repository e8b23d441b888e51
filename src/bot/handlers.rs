//! Dispatcher tree and endpoints.

use crate::bot::{self, Command};
use crate::config::Config;
use crate::core::traits::ChatService;
use crate::error::Error;
use chrono::Utc;
use di::Ref;
use log::{debug, info};
use std::sync::Arc;
use teloxide::dispatching::{HandlerExt, UpdateHandler};
use teloxide::prelude::*;
use teloxide::types::ChatId;
use teloxide::utils::command::BotCommands;

pub type HandlerResult = Result<(), Error>;

pub fn schema() -> UpdateHandler<Error> {
    Update::filter_message()
        .branch(
            dptree::entry()
                .filter_command::<Command>()
                .endpoint(answer_command),
        )
        .branch(dptree::endpoint(ingest_message))
}

/// Registers the command menu and processes updates until interrupted.
pub async fn run(config: Config, service: Ref<dyn ChatService>) -> Result<(), Error> {
    let bot = Bot::new(&config.bot_token);
    bot.set_my_commands(Command::bot_commands()).await?;

    info!("Starting bot...");
    Dispatcher::builder(bot, schema())
        .dependencies(dptree::deps![service, Arc::new(config)])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;
    info!("Shutting down...");

    Ok(())
}

async fn answer_command(
    bot: Bot,
    msg: Message,
    cmd: Command,
    service: Ref<dyn ChatService>,
) -> HandlerResult {
    info!("command {cmd:?} in chat {}", msg.chat.id);
    let group = bot::group_of(&msg);
    let reply = bot::respond(cmd, group.as_ref(), &*service).await?;
    bot.send_message(msg.chat.id, reply).await?;
    Ok(())
}

async fn ingest_message(
    bot: Bot,
    msg: Message,
    service: Ref<dyn ChatService>,
    config: Arc<Config>,
) -> HandlerResult {
    let Some(inbound) = bot::inbound_from(&msg) else {
        debug!("not recording message {} in chat {}", msg.id.0, msg.chat.id);
        return Ok(());
    };

    service.record_message(inbound, Utc::now()).await?;

    match config.forward_chat_id {
        Some(target) => {
            bot.forward_message(ChatId(target), msg.chat.id, msg.id).await?;
        }
        None => info!("Message recorded: {:?}", msg.text()),
    }

    Ok(())
}
