use anyhow::{Context, Result};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};
use std::time::Duration;

use astromaestro_core::{ChatSession, GeminiClient};

use crate::logging::log_error;
use crate::output::print_bot_message;
use crate::prompts;
use crate::report::ReportContext;

/// Explicit UI state for the assistant. The greeting and the proactive
/// report mention each happen at most once per session, tracked here
/// rather than inferred from what has been printed.
#[derive(Debug, Default)]
struct ChatState {
    greeted: bool,
    primed: bool,
}

/// Run the interactive chat assistant.
///
/// When a freshly generated report is supplied, its content is shared with
/// the session as a hidden priming turn before the user types anything.
pub async fn run_chat(client: &GeminiClient, last_report: Option<&ReportContext>) -> Result<()> {
    let mut session = ChatSession::new(client.clone());
    let mut state = ChatState::default();

    open_chat(&mut session, &mut state, last_report).await;

    println!("{}", "Type 'exit' or 'quit' to leave the chat.".dimmed());
    println!();

    loop {
        print!("{}: ", "You".green().bold());
        io::stdout().flush().context("Failed to flush stdout")?;

        let mut input = String::new();
        let bytes_read = io::stdin()
            .read_line(&mut input)
            .context("Failed to read input")?;
        if bytes_read == 0 {
            // stdin closed
            break;
        }

        let input = input.trim();
        if input.is_empty() {
            continue;
        }
        if input.eq_ignore_ascii_case("exit") || input.eq_ignore_ascii_case("quit") {
            println!("May the stars light your path. Farewell!");
            break;
        }

        let spinner = thinking_spinner();
        match session.send_message(input).await {
            Ok(reply) => {
                spinner.finish_and_clear();
                print_bot_message(&reply);
            }
            Err(e) => {
                spinner.finish_and_clear();
                log_error(&format!("Chat turn failed: {}", e));
                print_bot_message(prompts::CHAT_APOLOGY);
            }
        }

        println!();
    }

    Ok(())
}

/// Greeting and optional report priming, shown once when the chat opens.
/// The greeting goes to the display only and is never sent to the session.
async fn open_chat(
    session: &mut ChatSession,
    state: &mut ChatState,
    last_report: Option<&ReportContext>,
) {
    if !state.greeted {
        print_bot_message(prompts::CHAT_GREETING);
        println!();
        state.greeted = true;
    }

    let report = match last_report {
        Some(report) if !state.primed => report,
        _ => return,
    };

    let spinner = thinking_spinner();
    match session.send_message(&report.priming_message()).await {
        Ok(_) => {
            spinner.finish_and_clear();
            state.primed = true;
            print_bot_message(&report.proactive_line());
            println!();
        }
        Err(e) => {
            spinner.finish_and_clear();
            log_error(&format!("Failed to prime chat with report context: {}", e));
            print_bot_message(prompts::CONTEXT_APOLOGY);
            println!();
        }
    }
}

fn thinking_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
            .template("{spinner} {msg}")
            .unwrap(),
    );
    spinner.set_message("AstroMaestro AI is thinking...");
    spinner.enable_steady_tick(Duration::from_millis(120));
    spinner
}
