use anyhow::{anyhow, bail, Context, Result};
use printpdf::{BuiltinFont, Mm, PdfDocument};
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use crate::output::markdown_to_plain;
use crate::report::ReportContext;

// A4 portrait
const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 18.0;
const HEADER_HEIGHT_MM: f32 = 18.0;
const LINE_HEIGHT_MM: f32 = 5.0;
const TITLE_FONT_SIZE: f32 = 16.0;
const SUBJECT_FONT_SIZE: f32 = 9.0;
const BODY_FONT_SIZE: f32 = 10.0;
const MAX_LINE_CHARS: usize = 95;

/// Export a generated report as a paginated A4 PDF in `dir`.
///
/// The filename is fixed per report kind. Fails before touching the
/// filesystem when the report has no exportable content; a partially
/// written file is removed if the write itself fails.
pub fn export_report(report: &ReportContext, dir: &Path) -> Result<PathBuf> {
    let filename = report
        .kind
        .pdf_filename()
        .ok_or_else(|| anyhow!("{} readings have no PDF export", report.kind))?;

    let plain = markdown_to_plain(&report.content);
    let lines = wrap_text(&plain, MAX_LINE_CHARS);
    if lines.iter().all(|line| line.trim().is_empty()) {
        bail!("Report content is empty; nothing to export.");
    }

    let usable_height = PAGE_HEIGHT_MM - 2.0 * MARGIN_MM - HEADER_HEIGHT_MM;
    let lines_per_page = (usable_height / LINE_HEIGHT_MM).floor();
    if !lines_per_page.is_finite() || lines_per_page < 1.0 {
        bail!("Computed page layout is invalid; cannot paginate the report.");
    }

    let path = dir.join(filename);
    let result = write_document(report, &lines, &path);
    if result.is_err() {
        // Unconditional cleanup: never leave a partial file behind
        let _ = fs::remove_file(&path);
    }
    result?;

    Ok(path)
}

fn write_document(report: &ReportContext, lines: &[String], path: &Path) -> Result<()> {
    let (doc, first_page, first_layer) = PdfDocument::new(
        report.kind.title(),
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "Page 1",
    );

    let body_font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| anyhow!("Failed to load PDF body font: {}", e))?;
    let title_font = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| anyhow!("Failed to load PDF title font: {}", e))?;
    let subject_font = doc
        .add_builtin_font(BuiltinFont::HelveticaOblique)
        .map_err(|e| anyhow!("Failed to load PDF subject font: {}", e))?;

    let mut layer = doc.get_page(first_page).get_layer(first_layer);
    let mut y = PAGE_HEIGHT_MM - MARGIN_MM;

    layer.use_text(
        report.kind.title(),
        TITLE_FONT_SIZE,
        Mm(MARGIN_MM),
        Mm(y),
        &title_font,
    );
    y -= 7.0;

    for subject_line in wrap_text(&report.subject, MAX_LINE_CHARS) {
        layer.use_text(
            subject_line,
            SUBJECT_FONT_SIZE,
            Mm(MARGIN_MM),
            Mm(y),
            &subject_font,
        );
        y -= LINE_HEIGHT_MM;
    }
    y -= LINE_HEIGHT_MM;

    let mut page_count = 1;
    for line in lines {
        if y < MARGIN_MM {
            page_count += 1;
            let (page, layer_index) = doc.add_page(
                Mm(PAGE_WIDTH_MM),
                Mm(PAGE_HEIGHT_MM),
                format!("Page {}", page_count),
            );
            layer = doc.get_page(page).get_layer(layer_index);
            y = PAGE_HEIGHT_MM - MARGIN_MM;
        }
        if !line.trim().is_empty() {
            layer.use_text(line.as_str(), BODY_FONT_SIZE, Mm(MARGIN_MM), Mm(y), &body_font);
        }
        y -= LINE_HEIGHT_MM;
    }

    let file = File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    doc.save(&mut BufWriter::new(file))
        .map_err(|e| anyhow!("Failed to write PDF: {}", e))?;

    Ok(())
}

/// Word-wrap flattened text to a fixed column width
fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for raw_line in text.lines() {
        if raw_line.chars().count() <= max_chars {
            lines.push(raw_line.to_string());
            continue;
        }

        let mut current = String::new();
        for word in raw_line.split_whitespace() {
            if !current.is_empty()
                && current.chars().count() + 1 + word.chars().count() > max_chars
            {
                lines.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        }
        if !current.is_empty() {
            lines.push(current);
        }
    }
    lines
}
