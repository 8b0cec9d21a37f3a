use clap::Parser;
use colored::*;
use dotenv::dotenv;
use log::LevelFilter;
use std::error::Error;

mod app;
mod chat;
mod cli;
mod config;
mod logging;
mod output;
mod pdf;
mod prompts;
mod report;
mod zodiac;

use crate::cli::{Args, Command};
use crate::logging::{log_error, log_info};
use astromaestro_core::config::{get_default_config_file, GeminiConfig};

/// Main function - dispatches the selected reading or the chat assistant
#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize logger; RUST_LOG overrides the default level
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(LevelFilter::Warn.to_string()),
    )
    .init();

    // Load environment variables from a .env file if present
    dotenv().ok();

    // Parse command-line arguments
    let args = Args::parse();

    let config_path = get_default_config_file("astromaestro")?;
    let mut cfg = GeminiConfig::load_from_file(&config_path)?;
    log_info(&format!(
        "Loaded configuration from {}",
        config_path.display()
    ));

    // The environment supplies a key when none is configured
    if cfg.api_key.is_none() {
        if let Ok(key) = std::env::var("GEMINI_API_KEY") {
            cfg.api_key = Some(key);
        }
    }

    if config::handle_config_flags(&args, &mut cfg, &config_path)? {
        return Ok(());
    }

    let result = match args.command {
        Some(Command::Astrology {
            name,
            dob,
            tob,
            place,
            system,
            pdf,
            chat,
        }) => {
            app::run_astrology(
                &cfg,
                &name,
                &dob,
                &tob,
                &place,
                system,
                app::FollowUps { pdf, chat },
            )
            .await
        }
        Some(Command::Numerology {
            name,
            dob,
            variant,
            pdf,
            chat,
        }) => {
            app::run_numerology(&cfg, &name, &dob, variant, app::FollowUps { pdf, chat }).await
        }
        Some(Command::Horoscope { dob }) => app::run_horoscope(&cfg, &dob).await,
        Some(Command::Tarot { question }) => app::run_tarot(&cfg, &question).await,
        Some(Command::Chat) => app::run_chat_command(&cfg).await,
        None => {
            output::print_usage_instructions();
            Ok(())
        }
    };

    if let Err(e) = result {
        log_error(&format!("Command failed: {}", e));
        eprintln!("{}", format!("Error: {:#}", e).red());
        std::process::exit(1);
    }

    Ok(())
}
