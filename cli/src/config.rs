use anyhow::Result;
use colored::*;
use std::path::Path;

use astromaestro_core::GeminiConfig;

use crate::cli::Args;
use crate::logging::log_info;

/// Handles configuration-related flags and returns true if the program should exit.
pub fn handle_config_flags(
    args: &Args,
    cfg: &mut GeminiConfig,
    config_file_path: &Path,
) -> Result<bool> {
    let mut config_updated = false;

    if let Some(key) = &args.set_api_key {
        if cfg.api_key.as_deref() != Some(key) {
            cfg.api_key = Some(key.clone());
            config_updated = true;
            println!("{}", "API Key updated.".green());
        }
    }

    if let Some(model) = &args.set_model {
        if cfg.model_name.as_deref() != Some(model) {
            cfg.model_name = Some(model.clone());
            config_updated = true;
            println!("{}", "Model name updated.".green());
        }
    }

    if let Some(prompt) = &args.set_system_prompt {
        if cfg.system_prompt.as_deref() != Some(prompt) {
            cfg.system_prompt = Some(prompt.clone());
            config_updated = true;
            println!("{}", "System prompt updated.".green());
        }
    }

    if config_updated {
        cfg.save_to_file(config_file_path)?;
        log_info(&format!(
            "Configuration saved to {}",
            config_file_path.display()
        ));
    }

    if args.show_config {
        println!(
            "{} ({})",
            "Current Configuration".cyan().bold(),
            config_file_path.display()
        );
        let api_key_display = cfg.api_key.as_deref().map_or_else(
            || "Not Set".yellow().to_string(),
            |k| mask_api_key(k).bright_black().to_string(),
        );
        println!("  {}: {}", "API Key".blue(), api_key_display);
        println!(
            "  {}: {}",
            "Model".blue(),
            cfg.model_name
                .as_deref()
                .unwrap_or("gemini-2.0-flash")
                .bright_black()
        );
        let system_prompt_display = cfg.system_prompt.as_deref().map_or_else(
            || "Default".yellow().to_string(),
            |p| truncate_for_display(p, 50).italic().to_string(),
        );
        println!("  {}: {}", "System Prompt".blue(), system_prompt_display);
        return Ok(true); // Exit after showing config
    }

    // Exit when config flags were the whole invocation
    Ok(config_updated && args.command.is_none())
}

fn mask_api_key(key: &str) -> String {
    if key.chars().count() > 8 {
        let head: String = key.chars().take(8).collect();
        format!("{}...", head)
    } else {
        "Set".to_string()
    }
}

fn truncate_for_display(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let head: String = text.chars().take(max).collect();
        format!("{}...", head)
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    #[test]
    fn mask_hides_all_but_the_prefix() {
        assert_eq!(mask_api_key("test-key-12345"), "test-key...");
        assert_eq!(mask_api_key("short"), "Set");
    }

    #[test]
    fn truncation_appends_ellipsis_only_when_needed() {
        assert_eq!(truncate_for_display("Be mystical.", 50), "Be mystical.");
        let long = "x".repeat(60);
        assert_eq!(truncate_for_display(&long, 50).chars().count(), 53);
    }

    #[test]
    fn set_api_key_persists_and_exits_without_command() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let args = Args::parse_from(["astromaestro", "--set-api-key", "abc"]);
        let mut cfg = GeminiConfig::default();

        let should_exit = handle_config_flags(&args, &mut cfg, &path).unwrap();
        assert!(should_exit);

        let reloaded = GeminiConfig::load_from_file(&path).unwrap();
        assert_eq!(reloaded.api_key.as_deref(), Some("abc"));
    }

    #[test]
    fn set_api_key_with_command_continues() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let args = Args::parse_from([
            "astromaestro",
            "--set-api-key",
            "abc",
            "horoscope",
            "--dob",
            "1990-04-19",
        ]);
        let mut cfg = GeminiConfig::default();

        let should_exit = handle_config_flags(&args, &mut cfg, &path).unwrap();
        assert!(!should_exit);
        assert_eq!(cfg.api_key.as_deref(), Some("abc"));
    }

    #[test]
    fn show_config_always_exits() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let args = Args::parse_from(["astromaestro", "--show-config"]);
        let mut cfg = GeminiConfig::default();

        assert!(handle_config_flags(&args, &mut cfg, &path).unwrap());
        // Nothing was changed, so nothing was written
        assert!(!path.exists());
    }
}
