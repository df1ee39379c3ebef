use anyhow::Result;
use dotenvy::dotenv;
use std::sync::Arc;
use teloxide::prelude::*;

use tolmach::cli::{Cli, Commands};
use tolmach::core::{config, init_logger};
use tolmach::storage::PrefStore;
use tolmach::telegram::{create_bot, schema, setup_bot_commands, HandlerDeps};
use tolmach::translate::Pipeline;

/// Main entry point for the Telegram bot
///
/// # Errors
/// Returns an error if initialization fails (logging, missing bot token).
#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse_args();

    // Load environment variables from .env if present
    let _ = dotenv();

    // Set up global panic handler so a panicking handler task gets logged
    // instead of silently disappearing
    std::panic::set_hook(Box::new(|panic_info| {
        log::error!("Panic caught: {:?}", panic_info);
        if let Some(location) = panic_info.location() {
            log::error!("Panic at {}:{}:{}", location.file(), location.line(), location.column());
        }
    }));

    // Initialize logger (console + file)
    init_logger(&config::LOG_FILE_PATH)?;

    match cli.command {
        Some(Commands::Run) | None => run_bot().await,
    }
}

/// Run the bot in long polling mode until ctrl-c.
async fn run_bot() -> Result<()> {
    // Missing BOT_TOKEN aborts startup
    let bot = create_bot()?;

    if let Err(e) = setup_bot_commands(&bot).await {
        log::warn!("Failed to register bot commands: {}", e);
    }

    let prefs = Arc::new(PrefStore::new());
    let pipeline = Arc::new(Pipeline::new(Arc::clone(&prefs)));
    let handler = schema(HandlerDeps::new(pipeline, prefs));

    log::info!("Starting bot in long polling mode");

    use teloxide::update_listeners::Polling;

    // Create polling listener that drops pending updates on start
    let listener = Polling::builder(bot.clone()).drop_pending_updates().build();

    Dispatcher::builder(bot, handler)
        .dependencies(DependencyMap::new())
        .enable_ctrlc_handler()
        .build()
        .dispatch_with_listener(
            listener,
            LoggingErrorHandler::with_custom_text("An error from the update listener"),
        )
        .await;

    Ok(())
}
