//! Prompt templates for the hosted model.
//!
//! These are pure string-formatting functions; everything interpretive is
//! delegated to the model. The disclaimers are fixed boilerplate appended
//! after the generated content and are never produced by the model.

use crate::cli::{AstroSystem, NumerologyVariant};

pub const ASTROLOGY_DISCLAIMER: &str = "**Important Note:** This report is generated by an AI \
based on vast astrological knowledge and patterns. It provides interpretive insights and \
symbolic guidance. It does not perform real-time astronomical calculations or generate visual \
birth charts (Lagna Kundalis/Western wheels). For precise calculations and visual charts, it is \
recommended to consult a professional astrologer or specialized software.";

pub const NUMEROLOGY_DISCLAIMER: &str = "**Important Note:** This report is generated by an AI \
based on vast numerological knowledge and patterns. It provides interpretive insights and \
symbolic guidance. For precise numerical analysis, consulting a professional numerologist is \
recommended, as this AI does not perform live calculations or generate visual charts.";

pub const CHAT_GREETING: &str = "Hello! I am AstroMaestro AI, your cosmic guide. How may I \
assist you today regarding mystical knowledge?\n\nYou can ask me about:\n\
- Your generated reports\n\
- Astrological concepts (e.g. \"What is a retrograde?\")\n\
- Numerological meanings\n\
- Or simply \"What's my daily horoscope?\"";

pub const CHAT_APOLOGY: &str =
    "*Apologies, I encountered a cosmic disturbance. Please try again.*";

pub const CONTEXT_APOLOGY: &str = "*Apologies, I couldn't load the full context of your last \
report for this chat due to a technical issue. You can still ask general questions!*";

/// Build the birth chart prompt for the selected astrological system
pub fn astrology_prompt(
    system: AstroSystem,
    name: &str,
    dob: &str,
    tob: &str,
    place: &str,
) -> String {
    match system {
        AstroSystem::Vedic => vedic_astrology_prompt(name, dob, tob, place),
        AstroSystem::Western => western_astrology_prompt(name, dob, tob, place),
    }
}

fn vedic_astrology_prompt(name: &str, dob: &str, tob: &str, place: &str) -> String {
    format!(
        r#"Generate a highly detailed and comprehensive Vedic (Indian) astrology birth chart report for a person named "{name}", born on {dob} at {tob} in {place}. All astrological interpretations should strictly adhere to Vedic principles, including the use of **Lahiri Ayanamsa**.

**Crucial Instruction for AI:** As an AI, you are not performing real-time astronomical calculations. Instead, you are tasked with generating a detailed *interpretive report*. Please proceed by inferring or stating the most probable **Sidereal Sun Sign, Sidereal Moon Sign (Rashi), and Ascendant (Lagna) Sign & Degree** based on typical Lahiri Ayanamsa conventions and general astrological correlations for the provided birth details, then provide the comprehensive interpretations for each section as if these initial chart facts were accurately calculated.

Include the following sections with rich, insightful detail, using Markdown for clear formatting:

## Basic Astrological Details
- **Personal Information:** Name, Date of Birth, Time of Birth, Place of Birth.
- **Core Vedic Data (Inferred/Stated for Interpretation):** Sidereal Sun Sign, Sidereal Moon Sign (Rashi), Ascendant (Lagna) Sign & Degree, Nakshatra & Pada for the Moon, Tithi, Karana, Yoga, Day of Birth, Ayanamsa used (Lahiri).
- **Avkahada Chakra Points:** brief interpretations for Paya, Varna, Yoni, Gana, Vasya, Nadi.
- **Favourable/Ghatak Points:** lucky numbers, lucky days, good planets, friendly signs, lucky metal and stone, and the malefic counterparts.

## Lagna Kundali (Birth Chart - Textual Overview)
Provide a textual representation of the Lagna chart: for each of the 12 houses, the sign it represents and any planets placed within it. This is a textual description, **not a graphical chart**.

## Planetary Interpretations (Navagrahas)
For each of the Navagrahas (Sun, Moon, Mars, Mercury, Jupiter, Venus, Saturn, Rahu, Ketu): its inferred sign and house placement, a detailed interpretation of its influence on personality, life events, strengths and challenges, and any significant aspects (drishti) it makes.

## Major Yogas (Planetary Combinations)
Identify and explain any prominent beneficial or challenging Yogas inferred to be present (e.g. Raja Yoga, Dhana Yoga, Gaja Kesari Yoga, Kemadruma Yoga) and their implications. If no major yogas are identified, state that.

## Vimshottari Dasha Predictions
The current Mahadasha based on the inferred Moon Nakshatra, a comprehensive overview of its themes, the current Antardasha with its predictions, and relevant remedies if needed.

## Sade Sati Analysis
Based on the inferred Moon Sign, whether Sade Sati is active or upcoming and in which phase, its effects for this Moon Sign, and specific, actionable Vedic remedies if applicable.

## Mangal Dosha (Kuja Dosha) Analysis
Whether Mangal Dosha is inferred present from Mars's placement, its implications for marriage and partnerships, and remedies if present.

## Kalsarpa Dosha Analysis
Whether Kalsarpa Dosha is inferred present, its general impact, and remedies if present.

## Lal Kitab Predictions and Remedies
For each prominently placed planet, a concise Lal Kitab prediction and at least one specific, actionable Lal Kitab remedy drawn from traditional practice.

## General Life Path & Destiny Insights
Character & personality, health, family & relationships, career & occupation, finance, and education.

Maintain a deeply spiritual, mystical, and authoritative tone, as if a seasoned and compassionate Vedic astrologer is providing insights. Format the output using **Markdown** with clear, bold headings (## for main sections, ### for sub-sections), bullet points for lists, and **bold text** for emphasis. Ensure the content is easy to read, structured for a comprehensive report, and inspiring."#
    )
}

fn western_astrology_prompt(name: &str, dob: &str, tob: &str, place: &str) -> String {
    format!(
        r###"Generate a comprehensive Western astrological birth chart report for {name}, born on {dob} at {tob} in {place}.
This report should adhere to Western astrological principles. Include detailed interpretations for:
- **Personal Information:** Name, Date of Birth, Time of Birth, Place of Birth.
- **Planetary Placements:** Sun, Moon, Ascendant, Mercury, Venus, Mars, Jupiter, Saturn, Uranus, Neptune, and Pluto. For each, describe its sign and house placement and its general influence on personality and life areas.
- **Major Aspects:** Briefly interpret key aspects between planets (conjunctions, oppositions, squares, trines, sextiles), highlighting their dynamic impact.
- **House Interpretations:** Describe the general significance of each of the 12 houses and how the planets placed within them might influence those life areas.
- **Elemental & Modal Balance:** Briefly discuss the balance of elements (Fire, Earth, Air, Water) and modalities (Cardinal, Fixed, Mutable) in the chart and what it suggests about their temperament.
- **General Life Path & Destiny:** Provide an overarching summary of their life purpose, challenges, strengths, and areas of growth based on the complete chart.
Maintain an inspiring, insightful, and mystical tone. Format the output using **Markdown** with clear, bold headings for each section (e.g. "## The Cosmic Core: Sun, Moon & Ascendant"), use bullet points for lists, and bold text for emphasis."###
    )
}

/// Build the numerology prompt for the selected tradition
pub fn numerology_prompt(variant: NumerologyVariant, name: &str, dob: &str) -> String {
    format!(
        r###"Generate a detailed {variant} numerology report for {name}, born on {dob}.
Calculate and interpret the Life Path Number, Destiny Number (Expression Number), and Soul Urge Number (Heart's Desire Number).
Explain what each number means for their personality, talents, challenges, and purpose in life.
Provide the calculation steps briefly for each number if possible, or just the resulting number and its interpretation.
Maintain an insightful and ancient tone, reflecting the wisdom of numbers. Format the output using **Markdown** with clear headings for each section (e.g. "## Life Path Number", "## Destiny Number"), use bullet points for lists, and bold text for emphasis."###
    )
}

/// Build the daily horoscope prompt for a zodiac sign
pub fn daily_horoscope_prompt(sign: &str, today: &str) -> String {
    format!(
        "Generate a concise and inspiring daily horoscope for a {sign} for today, {today}. \
         Focus on general themes like career, relationships, and well-being. Make it feel \
         mystical and encouraging. Format the output using **Markdown** with a bold heading \
         for the sign and today's date, and use bullet points or paragraphs for insights."
    )
}

/// Build the three-card tarot reading prompt
pub fn tarot_prompt(question: &str) -> String {
    format!(
        r#"You are performing a 3-card Tarot reading (Past/Situation, Present/Challenge, Future/Guidance) for the user's question: "{question}".
Randomly "select" three plausible Tarot cards (Major or Minor Arcana, indicate if reversed). For each card, provide its name, whether it's reversed, and a brief mystical interpretation relevant to its position (Past, Present, Future).
Conclude with a concise overall message or guidance.
Maintain a mystical and insightful tone. Format the output using **Markdown** with clear, bold headings for each card and the overall message. Use bullet points for interpretations if helpful."#
    )
}
