use chrono::{DateTime, Utc};

/// Formatting locale, resolved from a BCP 47 tag.
///
/// The backend's UI is Turkish-first, so `tr` tags get Turkish date and
/// decimal conventions; anything unrecognised falls back to `en-US`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    TrTr,
    EnUs,
}

impl Locale {
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().get(..2) {
            Some(prefix) if prefix.eq_ignore_ascii_case("tr") => Locale::TrTr,
            _ => Locale::EnUs,
        }
    }
}

/// Locale-sensitive display formatting for dates and prices.
#[derive(Debug, Clone, Copy, Default)]
pub struct Formatter {
    locale: Locale,
}

impl Formatter {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn from_tag(tag: &str) -> Self {
        Self::new(Locale::from_tag(tag))
    }

    /// Format a creation timestamp for display.
    pub fn date_time(&self, stamp: &DateTime<Utc>) -> String {
        match self.locale {
            Locale::TrTr => stamp.format("%d.%m.%Y %H:%M").to_string(),
            Locale::EnUs => stamp.format("%m/%d/%Y %H:%M").to_string(),
        }
    }

    /// Format a price to two decimals plus the currency code, trimmed.
    pub fn price(&self, value: f64, currency: Option<&str>) -> String {
        let amount = format!("{value:.2}");
        let amount = match self.locale {
            Locale::TrTr => amount.replace('.', ","),
            Locale::EnUs => amount,
        };
        match currency.map(str::trim).filter(|c| !c.is_empty()) {
            Some(code) => format!("{amount} {code}"),
            None => amount,
        }
    }
}
