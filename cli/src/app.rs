use anyhow::{Context, Result};
use chrono::Local;
use colored::*;
use dialoguer::{theme::ColorfulTheme, Confirm};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::IsTerminal;
use std::path::Path;
use std::time::Duration;

use astromaestro_core::{GeminiClient, GeminiConfig};

use crate::chat;
use crate::cli::{AstroSystem, NumerologyVariant};
use crate::logging::{log_error, log_info};
use crate::output::print_report;
use crate::pdf;
use crate::prompts;
use crate::report::{ReportContext, ReportKind};
use crate::zodiac;

const GENERATION_ERROR: &str =
    "Failed to generate report. Please try again. (Error: API communication issue)";
const HOROSCOPE_ERROR: &str =
    "Failed to generate horoscope. Please try again. (Error: API communication issue)";
const TAROT_ERROR: &str =
    "Failed to perform reading. Please try again. (Error: API communication issue)";
const INVALID_DOB: &str = "Please enter a valid date of birth to determine your Zodiac sign.";

/// Post-report actions requested on the command line. When neither flag is
/// set and we are attached to a terminal, the user is asked instead.
pub struct FollowUps {
    pub pdf: bool,
    pub chat: bool,
}

fn build_client(config: &GeminiConfig) -> Result<GeminiClient> {
    GeminiClient::new(config.clone()).context(
        "No Gemini API key configured. Set one with --set-api-key or the GEMINI_API_KEY \
         environment variable.",
    )
}

/// Generate a full birth chart report
pub async fn run_astrology(
    config: &GeminiConfig,
    name: &str,
    dob: &str,
    tob: &str,
    place: &str,
    system: AstroSystem,
    follow_ups: FollowUps,
) -> Result<()> {
    let client = build_client(config)?;
    let prompt = prompts::astrology_prompt(system, name, dob, tob, place);

    let spinner = loading_spinner("Generating your cosmic revelation... Please wait.");
    match client.generate(&prompt).await {
        Ok(text) => {
            spinner.finish_and_clear();
            print_report(
                ReportKind::Astrology.title(),
                &text,
                Some(prompts::ASTROLOGY_DISCLAIMER),
            );
            let report = ReportContext {
                kind: ReportKind::Astrology,
                subject: format!(
                    "It was for {} born on {} at {} in {}, using the {} system.",
                    name, dob, tob, place, system
                ),
                content: text,
            };
            finish_report(&client, &report, follow_ups).await
        }
        Err(e) => {
            spinner.finish_and_clear();
            generation_failed(GENERATION_ERROR, e)
        }
    }
}

/// Generate a numerology report
pub async fn run_numerology(
    config: &GeminiConfig,
    name: &str,
    dob: &str,
    variant: NumerologyVariant,
    follow_ups: FollowUps,
) -> Result<()> {
    let client = build_client(config)?;
    let prompt = prompts::numerology_prompt(variant, name, dob);

    let spinner = loading_spinner("Deciphering your numerical destiny... Please wait.");
    match client.generate(&prompt).await {
        Ok(text) => {
            spinner.finish_and_clear();
            print_report(
                ReportKind::Numerology.title(),
                &text,
                Some(prompts::NUMEROLOGY_DISCLAIMER),
            );
            let report = ReportContext {
                kind: ReportKind::Numerology,
                subject: format!("It was for {} born on {}.", name, dob),
                content: text,
            };
            finish_report(&client, &report, follow_ups).await
        }
        Err(e) => {
            spinner.finish_and_clear();
            generation_failed(GENERATION_ERROR, e)
        }
    }
}

/// Today's horoscope for the zodiac sign of a birth date.
/// An unrecognizable date aborts before any network activity.
pub async fn run_horoscope(config: &GeminiConfig, dob: &str) -> Result<()> {
    let Some(sign) = zodiac::sign_for_date(dob) else {
        println!("{}", INVALID_DOB.red());
        return Ok(());
    };

    let client = build_client(config)?;
    let today = Local::now().format("%B %-d, %Y").to_string();
    let prompt = prompts::daily_horoscope_prompt(sign.name(), &today);

    let spinner = loading_spinner("Consulting the stars for your daily forecast... Please wait.");
    match client.generate(&prompt).await {
        Ok(text) => {
            spinner.finish_and_clear();
            print_report(ReportKind::Horoscope.title(), &text, None);
            Ok(())
        }
        Err(e) => {
            spinner.finish_and_clear();
            generation_failed(HOROSCOPE_ERROR, e)
        }
    }
}

/// A three-card tarot reading for a free-text question
pub async fn run_tarot(config: &GeminiConfig, question: &str) -> Result<()> {
    let client = build_client(config)?;
    let prompt = prompts::tarot_prompt(question);

    let spinner = loading_spinner("Drawing the cards of destiny... Please wait.");
    match client.generate(&prompt).await {
        Ok(text) => {
            spinner.finish_and_clear();
            print_report(ReportKind::Tarot.title(), &text, None);
            Ok(())
        }
        Err(e) => {
            spinner.finish_and_clear();
            generation_failed(TAROT_ERROR, e)
        }
    }
}

/// Open the chat assistant without report context
pub async fn run_chat_command(config: &GeminiConfig) -> Result<()> {
    let client = build_client(config)?;
    chat::run_chat(&client, None).await
}

/// PDF export and chat follow-up after a successful report
async fn finish_report(
    client: &GeminiClient,
    report: &ReportContext,
    follow_ups: FollowUps,
) -> Result<()> {
    if follow_ups.pdf
        || (std::io::stdin().is_terminal() && confirm("Save this report as a PDF?")?)
    {
        export_pdf(report);
    }

    if follow_ups.chat
        || (std::io::stdin().is_terminal()
            && confirm("Discuss this reading with AstroMaestro AI?")?)
    {
        chat::run_chat(client, Some(report)).await?;
    }

    Ok(())
}

fn export_pdf(report: &ReportContext) {
    match pdf::export_report(report, Path::new(".")) {
        Ok(path) => {
            log_info(&format!("PDF written to {}", path.display()));
            println!(
                "{} {}",
                "Report saved to".green(),
                path.display().to_string().green().bold()
            );
        }
        Err(e) => {
            log_error(&format!("PDF export failed: {}", e));
            println!(
                "{}",
                format!("Failed to generate PDF. Please try again. ({})", e).red()
            );
        }
    }
}

fn generation_failed(message: &str, error: astromaestro_core::GeminiError) -> Result<()> {
    log_error(&format!("Generation failed: {}", error));
    println!("{}", message.red());
    Ok(())
}

fn confirm(prompt: &str) -> Result<bool> {
    Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(false)
        .interact()
        .context("Failed to read confirmation")
}

fn loading_spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
            .template("{spinner} {msg}")
            .unwrap(),
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(120));
    spinner
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn horoscope_short_circuits_on_invalid_date() {
        // No API key is configured; this only succeeds because the sentinel
        // check runs before the client is ever constructed.
        let config = GeminiConfig {
            api_key: None,
            ..GeminiConfig::default()
        };
        run_horoscope(&config, "not-a-date").await.unwrap();
    }
}
