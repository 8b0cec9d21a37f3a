use std::fmt;

/// Maximum number of characters of report text shared with the chat session
const PRIMING_LIMIT: usize = 5000;

/// The four reading features
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Astrology,
    Numerology,
    Horoscope,
    Tarot,
}

impl ReportKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            ReportKind::Astrology => "astrology",
            ReportKind::Numerology => "numerology",
            ReportKind::Horoscope => "daily horoscope",
            ReportKind::Tarot => "tarot",
        }
    }

    /// Title used for rendered output and the PDF header
    pub fn title(&self) -> &'static str {
        match self {
            ReportKind::Astrology => "Astrology Birth Chart Report",
            ReportKind::Numerology => "Numerology Report",
            ReportKind::Horoscope => "Daily Horoscope",
            ReportKind::Tarot => "Tarot Reading",
        }
    }

    /// Fixed filename for PDF export; only full reports are exportable
    pub fn pdf_filename(&self) -> Option<&'static str> {
        match self {
            ReportKind::Astrology => Some("AstroMaestro_Astrology_Report.pdf"),
            ReportKind::Numerology => Some("AstroMaestro_Numerology_Report.pdf"),
            ReportKind::Horoscope | ReportKind::Tarot => None,
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// The last generated report, kept in memory for chat priming and PDF export.
/// Built only on successful generation; a failed call leaves nothing behind.
#[derive(Debug, Clone)]
pub struct ReportContext {
    pub kind: ReportKind,
    /// One-sentence description of who/what the report was for
    pub subject: String,
    /// Full Markdown body as returned by the model
    pub content: String,
}

impl ReportContext {
    /// The hidden chat turn that primes the session with this report.
    /// The body is truncated so the context stays within token limits.
    pub fn priming_message(&self) -> String {
        let truncated = if self.content.chars().count() > PRIMING_LIMIT {
            let head: String = self.content.chars().take(PRIMING_LIMIT).collect();
            format!(
                "{}\n...(Report truncated for brevity in chat context)...",
                head
            )
        } else {
            self.content.clone()
        };

        format!(
            "The user recently generated a {} report. {} The full content of this report is \
             provided below for context in any follow-up questions the user might have about \
             it:\n\n{}",
            self.kind.display_name(),
            self.subject,
            truncated
        )
    }

    /// The proactive chat line shown once when the assistant opens with context
    pub fn proactive_line(&self) -> String {
        format!(
            "I see you have just received your {} reading. Feel free to ask me anything about it!",
            self.kind.display_name()
        )
    }
}
