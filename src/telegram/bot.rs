//! Bot initialization and command registration
//!
//! This module contains:
//! - Command enum definition
//! - Bot instance creation
//! - Command registration in the Telegram UI

use reqwest::ClientBuilder;
use teloxide::prelude::*;
use teloxide::utils::command::{BotCommands, ParseError};

use crate::core::config;
use crate::core::error::{AppError, AppResult};

/// Passes the whole argument tail through as-is, so a bare command still
/// matches and the handler can answer with a usage hint.
fn rest(input: String) -> Result<(String,), ParseError> {
    Ok((input.trim().to_string(),))
}

/// Bot commands enum with descriptions
#[derive(BotCommands, Clone, Debug)]
#[command(rename_rule = "lowercase", description = "Я вмію:")]
pub enum Command {
    #[command(description = "почати роботу з ботом")]
    Start,
    #[command(description = "довідка про правила перекладу")]
    Help,
    #[command(description = "зафіксувати вашу цільову мову", parse_with = rest)]
    Setlang(String),
    #[command(description = "показати вашу цільову мову")]
    Mylang,
}

/// Creates a Bot instance with custom or default API URL
///
/// # Returns
/// * `Ok(Bot)` - Successfully created bot instance
/// * `Err(AppError)` - Missing token, invalid URL, or client build failure
pub fn create_bot() -> AppResult<Bot> {
    let token = config::BOT_TOKEN.clone();
    if token.is_empty() {
        return Err(AppError::Config("BOT_TOKEN environment variable is not set".to_string()));
    }

    let client = ClientBuilder::new().timeout(config::network::telegram_timeout()).build()?;
    let bot = Bot::with_client(token, client);

    // Check if local Bot API server is configured
    let bot = if let Ok(bot_api_url) = std::env::var("BOT_API_URL") {
        log::info!("Using custom Bot API URL: {}", bot_api_url);
        let url = url::Url::parse(&bot_api_url)
            .map_err(|e| AppError::Config(format!("Invalid BOT_API_URL: {}", e)))?;
        bot.set_api_url(url)
    } else {
        bot
    };

    Ok(bot)
}

/// Sets up bot commands in Telegram UI
///
/// # Arguments
/// * `bot` - Bot instance to configure
pub async fn setup_bot_commands(bot: &Bot) -> AppResult<()> {
    use teloxide::types::BotCommand;

    bot.set_my_commands(vec![
        BotCommand::new("start", "почати роботу з ботом"),
        BotCommand::new("help", "довідка про правила перекладу"),
        BotCommand::new("setlang", "зафіксувати вашу цільову мову"),
        BotCommand::new("mylang", "показати вашу цільову мову"),
    ])
    .await?;

    Ok(())
}
