use clap::{Parser, Subcommand, ValueEnum};
use std::fmt;

/// Terminal companion for AI astrology, numerology, horoscope and tarot readings
#[derive(Parser, Debug)]
#[command(name = "astromaestro", author, version, about, long_about = None)]
pub struct Args {
    /// Set and save the Gemini API Key persistently
    #[arg(long)]
    pub set_api_key: Option<String>,

    /// Set and save the Gemini model name persistently
    #[arg(long)]
    pub set_model: Option<String>,

    /// Set and save the chat system prompt persistently
    #[arg(long)]
    pub set_system_prompt: Option<String>,

    /// Show the current configuration
    #[arg(long, default_value_t = false)]
    pub show_config: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a full astrological birth chart report
    Astrology {
        /// Full name of the person the chart is for
        #[arg(long)]
        name: String,

        /// Date of birth (YYYY-MM-DD)
        #[arg(long)]
        dob: String,

        /// Time of birth (e.g. 14:30)
        #[arg(long)]
        tob: String,

        /// Place of birth
        #[arg(long)]
        place: String,

        /// Astrological system to use for the interpretation
        #[arg(long, value_enum, default_value_t = AstroSystem::Vedic)]
        system: AstroSystem,

        /// Save the report as a PDF after generation
        #[arg(long, default_value_t = false)]
        pdf: bool,

        /// Open the chat assistant with this report as context
        #[arg(long, default_value_t = false)]
        chat: bool,
    },

    /// Generate a numerology report
    Numerology {
        /// Full name used for the number calculations
        #[arg(long)]
        name: String,

        /// Date of birth (YYYY-MM-DD)
        #[arg(long)]
        dob: String,

        /// Numerology tradition to interpret with
        #[arg(long, value_enum, default_value_t = NumerologyVariant::Pythagorean)]
        variant: NumerologyVariant,

        /// Save the report as a PDF after generation
        #[arg(long, default_value_t = false)]
        pdf: bool,

        /// Open the chat assistant with this report as context
        #[arg(long, default_value_t = false)]
        chat: bool,
    },

    /// Today's horoscope for the zodiac sign of a birth date
    Horoscope {
        /// Date of birth (YYYY-MM-DD)
        #[arg(long)]
        dob: String,
    },

    /// A three-card tarot reading for a question
    Tarot {
        /// The question to put to the cards
        question: String,
    },

    /// Chat with AstroMaestro AI
    Chat,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum AstroSystem {
    Vedic,
    Western,
}

impl fmt::Display for AstroSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AstroSystem::Vedic => write!(f, "Vedic"),
            AstroSystem::Western => write!(f, "Western"),
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum NumerologyVariant {
    Pythagorean,
    Chaldean,
}

impl fmt::Display for NumerologyVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumerologyVariant::Pythagorean => write!(f, "Pythagorean"),
            NumerologyVariant::Chaldean => write!(f, "Chaldean"),
        }
    }
}
