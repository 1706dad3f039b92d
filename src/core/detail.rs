//! # Detail View Model
//!
//! Turns a [`CountryDetail`] into labelled rows for the details page. Empty
//! fields render as `N/A`; they are not errors.

use crate::api::{BorderCountry, CountryDetail, CountryRecord};

pub const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoRow {
    pub label: &'static str,
    pub value: String,
}

impl InfoRow {
    fn new(label: &'static str, value: String) -> Self {
        Self { label, value }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub title: String,
    pub flag_url: String,
    pub primary: Vec<InfoRow>,
    pub secondary: Vec<InfoRow>,
}

impl DetailView {
    pub fn new(detail: &CountryDetail) -> Self {
        let primary = vec![
            InfoRow::new("Native Name", detail.name.official.clone()),
            InfoRow::new("Population", format_population(detail.population)),
            InfoRow::new("Region", detail.region.to_string()),
            InfoRow::new("Sub Region", or_na(detail.subregion.clone())),
            InfoRow::new("Capital", join_or_na(detail.capital.iter().map(String::as_str))),
        ];
        let secondary = vec![
            InfoRow::new(
                "Top Level Domain",
                detail.tld.first().cloned().map_or_else(|| NOT_AVAILABLE.to_string(), or_na),
            ),
            InfoRow::new(
                "Currencies",
                join_or_na(detail.currencies.values().map(|c| c.name.as_str())),
            ),
            InfoRow::new(
                "Languages",
                join_or_na(detail.languages.values().map(String::as_str)),
            ),
        ];
        Self {
            title: detail.name.common.clone(),
            flag_url: detail.flags.svg.clone(),
            primary,
            secondary,
        }
    }
}

/// Capital line for a listing card.
pub fn capital_label(record: &CountryRecord) -> String {
    join_or_na(record.capital.iter().map(String::as_str))
}

/// Border chip labels; a single `N/A` chip when the country has no neighbours.
pub fn border_labels(borders: &[BorderCountry]) -> Vec<String> {
    if borders.is_empty() {
        return vec![NOT_AVAILABLE.to_string()];
    }
    borders.iter().map(|b| b.label().to_string()).collect()
}

/// Border entries carrying only their codes, used when name lookup fails.
pub fn unresolved_borders(codes: &[String]) -> Vec<BorderCountry> {
    codes
        .iter()
        .map(|code| BorderCountry {
            code: code.clone(),
            name: None,
        })
        .collect()
}

/// Formats a count with comma thousands separators: `67391582` → `67,391,582`.
pub fn format_population(population: u64) -> String {
    let digits = population.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn or_na(value: String) -> String {
    if value.trim().is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        value
    }
}

fn join_or_na<'a>(values: impl Iterator<Item = &'a str>) -> String {
    let joined = values.filter(|v| !v.is_empty()).collect::<Vec<_>>().join(", ");
    or_na(joined)
}
