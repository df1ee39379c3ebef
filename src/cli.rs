use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tolmach")]
#[command(author, version, about = "Telegram bot that fixes mixed-keyboard typos and translates messages", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the bot in long polling mode
    Run,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
