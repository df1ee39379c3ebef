//! Telegram bot handler tree configuration
//!
//! This module provides the main dispatcher schema for the bot. The handlers
//! are organized so that integration tests can use the same handler tree as
//! production code.
//!
//! User-visible failure behavior on the translation path is uniformly
//! silence: the bot either replies with a translation or says nothing.
//! Only command usage errors produce explicit messages.

use std::sync::Arc;

use teloxide::dispatching::{UpdateFilterExt, UpdateHandler};
use teloxide::prelude::*;
use teloxide::types::ReplyParameters;

use crate::storage::prefs::PrefStore;
use crate::telegram::bot::Command;
use crate::translate::{lang, Pipeline};

/// Error type for handlers
pub type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Dependencies required by handlers
#[derive(Clone)]
pub struct HandlerDeps {
    pub pipeline: Arc<Pipeline>,
    pub prefs: Arc<PrefStore>,
}

impl HandlerDeps {
    /// Create new handler dependencies
    pub fn new(pipeline: Arc<Pipeline>, prefs: Arc<PrefStore>) -> Self {
        Self { pipeline, prefs }
    }
}

const HELP_TEXT: &str = "Команди:\n\
/setlang <код> — зафіксувати вашу цільову мову (en, uk, ru, pl, tr, de, fr, es, it, ar, zh-cn, zh-tw)\n\
/mylang — показати вашу цільову мову\n\
/help — ця довідка\n\
\n\
Правила за замовчуванням:\n\
• якщо вхідна мова uk/ru → переклад у pl\n\
• інакше → переклад у ru\n\
Автокорекція: \"привыт\" → \"привіт\"";

const START_TEXT: &str =
    "Привіт! За замовчуванням uk/ru → pl, інші → ru. Можна змінити для себе через /setlang. /help — деталі.";

/// Creates the main dispatcher schema for the Telegram bot.
///
/// Commands are matched first; any other text message goes through the
/// translation pipeline.
pub fn schema(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    let deps_commands = deps.clone();
    let deps_messages = deps;

    dptree::entry()
        .branch(command_handler(deps_commands))
        .branch(message_handler(deps_messages))
}

fn command_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_message().branch(dptree::entry().filter_command::<Command>().endpoint(
        move |bot: Bot, msg: Message, cmd: Command| {
            let deps = deps.clone();
            async move {
                log::info!("Received command: {:?} from chat {}", cmd, msg.chat.id);

                match cmd {
                    Command::Start => {
                        bot.send_message(msg.chat.id, START_TEXT).await?;
                    }
                    Command::Help => {
                        bot.send_message(msg.chat.id, HELP_TEXT).await?;
                    }
                    Command::Setlang(arg) => {
                        handle_setlang_command(&bot, &msg, &deps, &arg).await?;
                    }
                    Command::Mylang => {
                        handle_mylang_command(&bot, &msg, &deps).await?;
                    }
                }
                Ok(())
            }
        },
    ))
}

/// Handle /setlang: canonicalize and store the user's target language.
///
/// A missing argument is a usage error and gets an explicit reply, unlike
/// translation failures, which stay silent.
async fn handle_setlang_command(
    bot: &Bot,
    msg: &Message,
    deps: &HandlerDeps,
    arg: &str,
) -> Result<(), HandlerError> {
    let Some(user) = msg.from.as_ref() else {
        return Ok(());
    };

    let raw = arg.split_whitespace().next().unwrap_or("").to_lowercase();
    if raw.is_empty() {
        bot.send_message(msg.chat.id, "Вкажіть код мови. Напр.: /setlang pl").await?;
        return Ok(());
    }

    let normalized = lang::canonical_or_raw(&raw);
    deps.prefs.set(user.id.0, normalized.clone());
    bot.send_message(msg.chat.id, format!("Готово! Цільова мова для вас: {}", normalized))
        .await?;
    Ok(())
}

/// Handle /mylang: report the stored preference or an explicit "not set".
async fn handle_mylang_command(bot: &Bot, msg: &Message, deps: &HandlerDeps) -> Result<(), HandlerError> {
    let Some(user) = msg.from.as_ref() else {
        return Ok(());
    };

    let pref = deps
        .prefs
        .get(user.id.0)
        .unwrap_or_else(|| "(не встановлено)".to_string());
    bot.send_message(msg.chat.id, format!("Ваше /setlang: {}", pref)).await?;
    Ok(())
}

fn message_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_message().endpoint(move |bot: Bot, msg: Message| {
        let deps = deps.clone();
        async move {
            // The dispatch loop must survive anything a single message does.
            if let Err(e) = handle_text_message(&bot, &msg, &deps).await {
                log::error!("Message handler error: {}", e);
            }
            Ok(())
        }
    })
}

/// Runs one text message through the translation pipeline and replies with
/// the result, quoting the original message.
///
/// No reply is sent when the pipeline yields nothing: identity language
/// pair, provider outage, or a non-text message all end the same way.
async fn handle_text_message(bot: &Bot, msg: &Message, deps: &HandlerDeps) -> Result<(), HandlerError> {
    let Some(user) = msg.from.as_ref() else {
        return Ok(());
    };
    if user.is_bot {
        return Ok(());
    }
    let Some(text) = msg.text() else {
        return Ok(());
    };

    log::debug!("Processing message from {}: {:?}", user.id, text);

    let Some(translation) = deps.pipeline.process(user.id.0, text).await else {
        return Ok(());
    };

    let reply = format!(
        "Переклад ({}→{}):\n{}",
        translation.source, translation.target, translation.text
    );
    bot.send_message(msg.chat.id, reply)
        .reply_parameters(ReplyParameters::new(msg.id))
        .await?;

    Ok(())
}
