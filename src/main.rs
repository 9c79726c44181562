use anyhow::Result;
use clap::Parser;

use chapterbar::cli::{Cli, Commands, ConfigCommands};
use chapterbar::{logging, Config};

mod commands;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Completions need neither config nor logging
    if let Commands::Completions { shell } = cli.command {
        return commands::completions::handle(shell);
    }

    let config = Config::load()?;
    if let Err(e) = logging::init(&config.log) {
        eprintln!("warning: logging disabled: {:#}", e);
    }

    match cli.command {
        Commands::Play {
            chapters,
            duration,
            paused,
            speed,
        } => commands::play::handle(&config, chapters.as_deref(), duration, paused, speed),
        Commands::Chapters { chapters, duration } => {
            commands::chapters::handle(&config, chapters.as_deref(), duration)
        }
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(&config),
            ConfigCommands::Edit => commands::config::handle_edit(&config),
            ConfigCommands::Path => commands::config::handle_path(),
        },
        Commands::Completions { .. } => Ok(()),
    }
}
