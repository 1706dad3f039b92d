use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// World region as tagged by the REST Countries API.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Africa,
    Americas,
    Asia,
    Europe,
    Oceania,
    Antarctic,
    /// Any region string this build does not know about.
    #[serde(other)]
    Unknown,
}

impl Region {
    /// Regions offered by the "Filter by Region" picker, in display order.
    pub const FILTERABLE: [Region; 5] = [
        Region::Africa,
        Region::Americas,
        Region::Asia,
        Region::Europe,
        Region::Oceania,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Region::Africa => "Africa",
            Region::Americas => "Americas",
            Region::Asia => "Asia",
            Region::Europe => "Europe",
            Region::Oceania => "Oceania",
            Region::Antarctic => "Antarctic",
            Region::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Name {
    pub common: String,
    pub official: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Flags {
    #[serde(default)]
    pub png: String,
    #[serde(default)]
    pub svg: String,
    #[serde(default)]
    pub alt: Option<String>,
}

/// One entry of the `/all` listing.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CountryRecord {
    pub name: Name,
    pub region: Region,
    pub population: u64,
    #[serde(default)]
    pub capital: Vec<String>,
    #[serde(default)]
    pub flags: Flags,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Currency {
    pub name: String,
    #[serde(default)]
    pub symbol: String,
}

/// Full record for the details page. Maps are keyed by ISO code, so
/// iteration order is by code rather than by API response order.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CountryDetail {
    pub name: Name,
    pub region: Region,
    #[serde(default)]
    pub subregion: String,
    pub population: u64,
    #[serde(default)]
    pub capital: Vec<String>,
    #[serde(default)]
    pub flags: Flags,
    #[serde(default)]
    pub tld: Vec<String>,
    #[serde(default)]
    pub currencies: BTreeMap<String, Currency>,
    #[serde(default)]
    pub languages: BTreeMap<String, String>,
    #[serde(default)]
    pub borders: Vec<String>,
}

/// A neighbour resolved from its alpha-3 code. `name` is `None` when the
/// lookup failed and only the code is known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BorderCountry {
    pub code: String,
    pub name: Option<String>,
}

impl BorderCountry {
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.code)
    }
}

/// Row of the `/alpha?codes=` lookup.
#[derive(Deserialize, Debug)]
pub(crate) struct CodeName {
    pub name: Name,
    pub cca3: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_deserializes_without_capital() {
        let json = r#"{
            "name": {"common": "Antarctica", "official": "Antarctica", "nativeName": {}},
            "region": "Antarctic",
            "population": 1000,
            "flags": {"png": "a.png", "svg": "a.svg"}
        }"#;
        let record: CountryRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.name.common, "Antarctica");
        assert_eq!(record.region, Region::Antarctic);
        assert!(record.capital.is_empty());
        assert_eq!(record.flags.alt, None);
    }

    #[test]
    fn test_unknown_region_falls_back() {
        let json = r#"{"name": {"common": "X", "official": "X"}, "region": "Atlantis", "population": 0}"#;
        let record: CountryRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.region, Region::Unknown);
    }

    #[test]
    fn test_detail_maps_are_keyed_by_code() {
        let json = r#"{
            "name": {"common": "Switzerland", "official": "Swiss Confederation"},
            "region": "Europe",
            "subregion": "Western Europe",
            "population": 8654622,
            "capital": ["Bern"],
            "tld": [".ch"],
            "currencies": {"CHF": {"name": "Swiss franc", "symbol": "Fr."}},
            "languages": {"roh": "Romansh", "fra": "French", "gsw": "Swiss German", "ita": "Italian"},
            "borders": ["AUT", "FRA", "ITA", "LIE", "DEU"]
        }"#;
        let detail: CountryDetail = serde_json::from_str(json).unwrap();
        let langs: Vec<&str> = detail.languages.values().map(String::as_str).collect();
        assert_eq!(langs, vec!["French", "Swiss German", "Italian", "Romansh"]);
        assert_eq!(detail.currencies["CHF"].symbol, "Fr.");
        assert_eq!(detail.borders.len(), 5);
    }

    #[test]
    fn test_border_label_falls_back_to_code() {
        let known = BorderCountry { code: "FRA".into(), name: Some("France".into()) };
        let unknown = BorderCountry { code: "XKX".into(), name: None };
        assert_eq!(known.label(), "France");
        assert_eq!(unknown.label(), "XKX");
    }

    #[test]
    fn test_filterable_regions_exclude_antarctic() {
        assert!(!Region::FILTERABLE.contains(&Region::Antarctic));
        assert_eq!(Region::FILTERABLE[0].to_string(), "Africa");
    }
}
