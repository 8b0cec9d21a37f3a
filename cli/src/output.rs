use colored::*;
use pulldown_cmark::{
    CodeBlockKind, Event as MdEvent, HeadingLevel, Options, Parser as MdParser, Tag,
};

fn md_options() -> Options {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options
}

/// Render model-produced Markdown as ANSI-styled terminal text.
///
/// Only model output goes through here; user-typed chat input is printed
/// literally and never parsed.
pub fn render_markdown(markdown: &str) -> String {
    let parser = MdParser::new_ext(markdown, md_options());

    let mut output = String::new();
    let mut heading: Option<HeadingLevel> = None;
    let mut strong = false;
    let mut emphasis = false;
    let mut in_code_block = false;
    let mut code_block_content = String::new();

    // Table state tracking
    let mut in_table_cell = false;
    let mut current_row: Vec<String> = Vec::new();
    let mut table_rows: Vec<Vec<String>> = Vec::new();

    for event in parser {
        match event {
            MdEvent::Start(Tag::Heading(level, ..)) => {
                if !output.is_empty() && !output.ends_with('\n') {
                    output.push('\n');
                }
                output.push('\n');
                heading = Some(level);
            }
            MdEvent::End(Tag::Heading(..)) => {
                heading = None;
                output.push('\n');
            }
            MdEvent::Start(Tag::Paragraph) => {
                if !output.is_empty() && !output.ends_with("\n\n") {
                    output.push('\n');
                }
            }
            MdEvent::End(Tag::Paragraph) => {
                output.push('\n');
            }
            MdEvent::Start(Tag::BlockQuote) | MdEvent::End(Tag::BlockQuote) => {
                output.push('\n');
            }
            MdEvent::Start(Tag::CodeBlock(info)) => {
                in_code_block = true;
                code_block_content.clear();
                if let CodeBlockKind::Fenced(lang) = info {
                    if !lang.is_empty() {
                        output.push_str(&format!("\n{}:\n", lang.cyan()));
                    } else {
                        output.push('\n');
                    }
                } else {
                    output.push('\n');
                }
            }
            MdEvent::End(Tag::CodeBlock(_)) => {
                output.push_str(&"─".repeat(40).dimmed().to_string());
                output.push('\n');
                output.push_str(&code_block_content.dimmed().to_string());
                if !code_block_content.ends_with('\n') {
                    output.push('\n');
                }
                output.push_str(&"─".repeat(40).dimmed().to_string());
                output.push('\n');
                in_code_block = false;
            }
            MdEvent::Start(Tag::List(_)) => {
                if !output.ends_with('\n') {
                    output.push('\n');
                }
            }
            MdEvent::End(Tag::List(_)) => {
                output.push('\n');
            }
            MdEvent::Start(Tag::Item) => {
                output.push_str(&format!("{}  ", "•".yellow()));
            }
            MdEvent::End(Tag::Item) => {
                output.push('\n');
            }
            MdEvent::Start(Tag::Strong) => strong = true,
            MdEvent::End(Tag::Strong) => strong = false,
            MdEvent::Start(Tag::Emphasis) => emphasis = true,
            MdEvent::End(Tag::Emphasis) => emphasis = false,
            MdEvent::Start(Tag::Table(_)) => {
                table_rows.clear();
                output.push('\n');
            }
            MdEvent::End(Tag::Table(_)) => {
                output.push_str(&format_table(&table_rows));
                output.push('\n');
            }
            MdEvent::Start(Tag::TableRow) | MdEvent::Start(Tag::TableHead) => {
                current_row.clear();
            }
            MdEvent::End(Tag::TableRow) | MdEvent::End(Tag::TableHead) => {
                if !current_row.is_empty() {
                    table_rows.push(current_row.clone());
                }
            }
            MdEvent::Start(Tag::TableCell) => {
                in_table_cell = true;
                current_row.push(String::new());
            }
            MdEvent::End(Tag::TableCell) => {
                in_table_cell = false;
            }
            MdEvent::Code(ref code) => {
                if in_table_cell {
                    if let Some(cell) = current_row.last_mut() {
                        cell.push_str(code);
                    }
                } else {
                    output.push_str(&format!("`{}`", code.white().on_bright_black()));
                }
            }
            MdEvent::Text(ref text) => {
                if in_code_block {
                    code_block_content.push_str(text);
                } else if in_table_cell {
                    if let Some(cell) = current_row.last_mut() {
                        cell.push_str(text);
                    }
                } else {
                    output.push_str(&style_text(text, heading, strong, emphasis));
                }
            }
            MdEvent::SoftBreak => {
                if !in_table_cell {
                    output.push(' ');
                }
            }
            MdEvent::HardBreak => {
                if !in_table_cell {
                    output.push('\n');
                }
            }
            MdEvent::Rule => {
                output.push_str(&format!("\n{}\n", "─".repeat(40).dimmed()));
            }
            _ => {}
        }
    }

    output
}

fn style_text(
    text: &str,
    heading: Option<HeadingLevel>,
    strong: bool,
    emphasis: bool,
) -> String {
    match heading {
        Some(HeadingLevel::H1) | Some(HeadingLevel::H2) => {
            text.bright_cyan().bold().to_string()
        }
        Some(_) => text.cyan().bold().to_string(),
        None if strong => text.bold().to_string(),
        None if emphasis => text.italic().to_string(),
        None => text.to_string(),
    }
}

/// Column-aligned table with a bold header row
fn format_table(rows: &[Vec<String>]) -> String {
    if rows.is_empty() {
        return String::new();
    }

    let col_count = rows.iter().map(|row| row.len()).max().unwrap_or(0);
    let mut col_widths = vec![0; col_count];
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            col_widths[i] = col_widths[i].max(cell.chars().count());
        }
    }

    let mut out = String::new();
    for (i, row) in rows.iter().enumerate() {
        for (j, cell) in row.iter().enumerate() {
            let padding = col_widths[j].saturating_sub(cell.chars().count());
            let padded = format!("{}{}  ", cell, " ".repeat(padding));
            if i == 0 {
                out.push_str(&padded.bold().to_string());
            } else {
                out.push_str(&padded);
            }
        }
        out.push('\n');
        if i == 0 {
            let total: usize = col_widths.iter().map(|w| w + 2).sum();
            out.push_str(&"─".repeat(total).dimmed().to_string());
            out.push('\n');
        }
    }
    out
}

/// Flatten Markdown to unstyled text for the PDF exporter
pub fn markdown_to_plain(markdown: &str) -> String {
    let parser = MdParser::new_ext(markdown, md_options());

    let mut output = String::new();
    let mut in_table_cell = false;
    let mut first_cell_in_row = true;

    for event in parser {
        match event {
            MdEvent::Start(Tag::Heading(..)) => {
                if !output.is_empty() {
                    output.push('\n');
                }
            }
            MdEvent::End(Tag::Heading(..)) | MdEvent::End(Tag::Paragraph) => {
                output.push('\n');
            }
            MdEvent::Start(Tag::Item) => output.push_str("- "),
            MdEvent::End(Tag::Item) => output.push('\n'),
            MdEvent::End(Tag::List(_)) | MdEvent::End(Tag::BlockQuote) => {
                output.push('\n');
            }
            MdEvent::Start(Tag::TableRow) | MdEvent::Start(Tag::TableHead) => {
                first_cell_in_row = true;
            }
            MdEvent::End(Tag::TableRow) | MdEvent::End(Tag::TableHead) => {
                output.push('\n');
            }
            MdEvent::Start(Tag::TableCell) => {
                if !first_cell_in_row {
                    output.push_str(" | ");
                }
                first_cell_in_row = false;
                in_table_cell = true;
            }
            MdEvent::End(Tag::TableCell) => {
                in_table_cell = false;
            }
            MdEvent::Text(ref text) | MdEvent::Code(ref text) => {
                output.push_str(text);
            }
            MdEvent::SoftBreak => {
                if !in_table_cell {
                    output.push(' ');
                }
            }
            MdEvent::HardBreak => {
                if !in_table_cell {
                    output.push('\n');
                }
            }
            MdEvent::Rule => output.push('\n'),
            _ => {}
        }
    }

    output
}

/// Print a rendered report with its title and optional fixed disclaimer
pub fn print_report(title: &str, markdown: &str, disclaimer: Option<&str>) {
    println!();
    println!("{}", format!("═══ {} ═══", title).bright_magenta().bold());
    println!("{}", render_markdown(markdown).trim_end());
    if let Some(text) = disclaimer {
        println!();
        println!("{}", "─".repeat(60).dimmed());
        println!("{}", render_markdown(text).trim_end());
    }
    println!();
}

/// Print one bot chat turn, Markdown-rendered
pub fn print_bot_message(markdown: &str) {
    println!(
        "{}: {}",
        "AstroMaestro AI".blue().bold(),
        render_markdown(markdown).trim()
    );
}

/// Show usage instructions when no subcommand is provided
pub fn print_usage_instructions() {
    println!("{}", "No command provided. Here are your options:".yellow());
    println!(
        "  {}",
        "astromaestro astrology --name \"Jane\" --dob 1990-04-19 --tob 14:30 --place Jaipur"
            .green()
            .bold()
    );
    println!("    Generate a full birth chart report (add --system western for Western astrology)");
    println!();
    println!(
        "  {}",
        "astromaestro numerology --name \"Jane\" --dob 1990-04-19".green().bold()
    );
    println!("    Generate a numerology report");
    println!();
    println!("  {}", "astromaestro horoscope --dob 1990-04-19".green().bold());
    println!("    Today's horoscope for your zodiac sign");
    println!();
    println!(
        "  {}",
        "astromaestro tarot \"Will I find my path?\"".green().bold()
    );
    println!("    A three-card tarot reading");
    println!();
    println!("  {}", "astromaestro chat".green().bold());
    println!("    Chat with AstroMaestro AI about your readings");
    println!();
    println!("{}", "Configuration options:".cyan());
    println!("  {}", "--set-api-key, --set-model, --set-system-prompt, --show-config");
    println!();
    println!("{}", "Use --help for more options.".cyan());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(markdown: &str) -> String {
        colored::control::set_override(false);
        render_markdown(markdown)
    }

    #[test]
    fn headings_and_lists_are_rendered() {
        let out = plain("## Life Path Number\n- bold destiny\n- quiet strength\n");
        assert!(out.contains("Life Path Number"));
        assert!(out.contains("•  bold destiny"));
        assert!(out.contains("•  quiet strength"));
    }

    #[test]
    fn strong_text_survives_rendering() {
        let out = plain("The **Moon** rules tides.");
        assert!(out.contains("The Moon rules tides."));
    }

    #[test]
    fn tables_are_column_aligned() {
        let out = plain("| Planet | House |\n|---|---|\n| Mars | 7th |\n");
        assert!(out.contains("Planet"));
        assert!(out.contains("Mars"));
        // Header separator line present
        assert!(out.contains('─'));
    }

    #[test]
    fn markdown_to_plain_strips_formatting() {
        colored::control::set_override(false);
        let out = markdown_to_plain("## Title\nSome **bold** and *soft* words.\n- one\n- two\n");
        assert!(out.contains("Title"));
        assert!(out.contains("Some bold and soft words."));
        assert!(out.contains("- one"));
        assert!(!out.contains("**"));
        assert!(!out.contains('•'));
    }

    #[test]
    fn plain_tables_join_cells() {
        colored::control::set_override(false);
        let out = markdown_to_plain("| A | B |\n|---|---|\n| 1 | 2 |\n");
        assert!(out.contains("A | B"));
        assert!(out.contains("1 | 2"));
    }
}
