//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::api::{
    ApiError, BorderCountry, CountryDetail, CountryRecord, CountrySource, Currency, Flags, Name,
    Region,
};
use crate::core::config::ResolvedConfig;
use crate::core::detail::unresolved_borders;
use crate::core::state::App;

pub fn country(name: &str, region: Region, population: u64) -> CountryRecord {
    CountryRecord {
        name: Name {
            common: name.to_string(),
            official: format!("Republic of {name}"),
        },
        region,
        population,
        capital: vec![format!("{name} City")],
        flags: Flags {
            png: format!("https://flags.test/{name}.png"),
            svg: format!("https://flags.test/{name}.svg"),
            alt: None,
        },
    }
}

/// A small world: six European countries, three African, and a few others.
pub fn sample_dataset() -> Vec<CountryRecord> {
    vec![
        country("Germany", Region::Europe, 83_240_525),
        country("Brazil", Region::Americas, 212_559_409),
        country("Nigeria", Region::Africa, 206_139_587),
        country("France", Region::Europe, 67_391_582),
        country("Japan", Region::Asia, 125_836_021),
        country("South Africa", Region::Africa, 59_308_690),
        country("Spain", Region::Europe, 47_351_567),
        country("Canada", Region::Americas, 38_005_238),
        country("India", Region::Asia, 1_380_004_385),
        country("Italy", Region::Europe, 59_554_023),
        country("Australia", Region::Oceania, 25_687_041),
        country("Kenya", Region::Africa, 53_771_300),
        country("Switzerland", Region::Europe, 8_654_622),
        country("China", Region::Asia, 1_402_112_000),
        country("Portugal", Region::Europe, 10_305_564),
        country("New Zealand", Region::Oceania, 5_084_300),
        country("Antarctica", Region::Antarctic, 1_000),
    ]
}

/// `n` generic countries named "Country 00", "Country 01", ...
pub fn numbered_dataset(n: usize) -> Vec<CountryRecord> {
    (0..n)
        .map(|i| {
            let region = Region::FILTERABLE[i % Region::FILTERABLE.len()];
            country(&format!("Country {i:02}"), region, 1_000 * i as u64)
        })
        .collect()
}

pub fn france_detail() -> CountryDetail {
    let mut currencies = BTreeMap::new();
    currencies.insert(
        "EUR".to_string(),
        Currency {
            name: "Euro".to_string(),
            symbol: "€".to_string(),
        },
    );
    let mut languages = BTreeMap::new();
    languages.insert("fra".to_string(), "French".to_string());
    CountryDetail {
        name: Name {
            common: "France".to_string(),
            official: "French Republic".to_string(),
        },
        region: Region::Europe,
        subregion: "Western Europe".to_string(),
        population: 67_391_582,
        capital: vec!["Paris".to_string()],
        flags: Flags {
            png: "https://flagcdn.com/w320/fr.png".to_string(),
            svg: "https://flagcdn.com/fr.svg".to_string(),
            alt: None,
        },
        tld: vec![".fr".to_string()],
        currencies,
        languages,
        borders: vec!["BEL".to_string(), "DEU".to_string(), "ESP".to_string()],
    }
}

/// A source that serves fixed data and never touches the network.
pub struct StaticSource {
    pub records: Vec<CountryRecord>,
    pub details: Vec<CountryDetail>,
}

#[async_trait]
impl CountrySource for StaticSource {
    fn name(&self) -> &str {
        "static"
    }

    async fn fetch_all(&self) -> Result<Vec<CountryRecord>, ApiError> {
        Ok(self.records.clone())
    }

    async fn fetch_detail(&self, name: &str) -> Result<CountryDetail, ApiError> {
        self.details
            .iter()
            .find(|d| d.name.common == name)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(name.to_string()))
    }

    async fn resolve_borders(&self, codes: &[String]) -> Result<Vec<BorderCountry>, ApiError> {
        Ok(unresolved_borders(codes))
    }
}

pub fn test_source() -> Arc<dyn CountrySource> {
    Arc::new(StaticSource {
        records: sample_dataset(),
        details: vec![france_detail()],
    })
}

pub fn test_config() -> ResolvedConfig {
    ResolvedConfig {
        base_url: "http://127.0.0.1:9".to_string(),
        page_size: 24,
        scroll_top_threshold: 400,
        route: crate::core::route::Route::Countries,
    }
}

/// Creates an App over [`sample_dataset`] with default settings.
pub fn test_app() -> App {
    App::new(test_source(), Arc::new(sample_dataset()), &test_config())
}
