use chrono::{Datelike, NaiveDate};
use std::fmt;

/// The 12 tropical zodiac signs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl ZodiacSign {
    pub fn name(&self) -> &'static str {
        match self {
            ZodiacSign::Aries => "Aries",
            ZodiacSign::Taurus => "Taurus",
            ZodiacSign::Gemini => "Gemini",
            ZodiacSign::Cancer => "Cancer",
            ZodiacSign::Leo => "Leo",
            ZodiacSign::Virgo => "Virgo",
            ZodiacSign::Libra => "Libra",
            ZodiacSign::Scorpio => "Scorpio",
            ZodiacSign::Sagittarius => "Sagittarius",
            ZodiacSign::Capricorn => "Capricorn",
            ZodiacSign::Aquarius => "Aquarius",
            ZodiacSign::Pisces => "Pisces",
        }
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Look up the zodiac sign for a `YYYY-MM-DD` date string.
///
/// Inclusive day ranges per month, Northern-hemisphere tropical convention,
/// with the Dec/Jan wrap for Capricorn. Unparseable input yields `None`.
pub fn sign_for_date(input: &str) -> Option<ZodiacSign> {
    let date = NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").ok()?;
    sign_for_month_day(date.month(), date.day())
}

fn sign_for_month_day(month: u32, day: u32) -> Option<ZodiacSign> {
    use ZodiacSign::*;

    let sign = match (month, day) {
        (3, 21..) | (4, ..=19) => Aries,
        (4, 20..) | (5, ..=20) => Taurus,
        (5, 21..) | (6, ..=20) => Gemini,
        (6, 21..) | (7, ..=22) => Cancer,
        (7, 23..) | (8, ..=22) => Leo,
        (8, 23..) | (9, ..=22) => Virgo,
        (9, 23..) | (10, ..=22) => Libra,
        (10, 23..) | (11, ..=21) => Scorpio,
        (11, 22..) | (12, ..=21) => Sagittarius,
        (12, 22..) | (1, ..=19) => Capricorn,
        (1, 20..) | (2, ..=18) => Aquarius,
        (2, 19..) | (3, ..=20) => Pisces,
        _ => return None,
    };

    Some(sign)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aries_boundaries() {
        assert_eq!(sign_for_date("2024-03-21"), Some(ZodiacSign::Aries));
        assert_eq!(sign_for_date("2024-04-19"), Some(ZodiacSign::Aries));
        assert_eq!(sign_for_date("2024-04-20"), Some(ZodiacSign::Taurus));
        assert_eq!(sign_for_date("2024-03-20"), Some(ZodiacSign::Pisces));
    }

    #[test]
    fn capricorn_wraps_over_new_year() {
        assert_eq!(sign_for_date("2024-12-22"), Some(ZodiacSign::Capricorn));
        assert_eq!(sign_for_date("2024-12-31"), Some(ZodiacSign::Capricorn));
        assert_eq!(sign_for_date("2025-01-01"), Some(ZodiacSign::Capricorn));
        assert_eq!(sign_for_date("2025-01-19"), Some(ZodiacSign::Capricorn));
        assert_eq!(sign_for_date("2025-01-20"), Some(ZodiacSign::Aquarius));
    }

    #[test]
    fn every_day_of_the_year_has_a_sign() {
        // 2024 is a leap year, so Feb 29 is covered too
        let mut date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        while date < end {
            let formatted = date.format("%Y-%m-%d").to_string();
            assert!(
                sign_for_date(&formatted).is_some(),
                "no sign for {}",
                formatted
            );
            date = date.succ_opt().unwrap();
        }
    }

    #[test]
    fn malformed_input_yields_none() {
        assert_eq!(sign_for_date("not-a-date"), None);
        assert_eq!(sign_for_date("2024-13-01"), None);
        assert_eq!(sign_for_date("2024-02-30"), None);
        assert_eq!(sign_for_date(""), None);
    }

    #[test]
    fn whitespace_is_tolerated() {
        assert_eq!(sign_for_date("  1990-08-15 "), Some(ZodiacSign::Leo));
    }
}
