pub mod client;
pub mod types;

pub use client::{ApiError, CountrySource, DEFAULT_BASE_URL, RestCountriesClient};
pub use types::{BorderCountry, CountryDetail, CountryRecord, Currency, Flags, Name, Region};
