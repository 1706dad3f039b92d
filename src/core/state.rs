//! # Application State
//!
//! Core business state for Terra. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── source: Arc<dyn CountrySource>   // where details come from
//! ├── dataset: Arc<Vec<CountryRecord>> // fetched once at startup
//! ├── route: Route                     // /countries or /countries/{name}
//! ├── listing: Listing                 // search/filter/pagination state
//! ├── detail: DetailState              // details page data
//! └── status_message: String           // title bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use std::sync::Arc;

use crate::api::{BorderCountry, CountryDetail, CountryRecord, CountrySource};
use crate::core::config::ResolvedConfig;
use crate::core::listing::Listing;
use crate::core::route::Route;

/// What the details page currently has to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailState {
    /// Not on a details route.
    Idle,
    Loading,
    Loaded {
        detail: CountryDetail,
        borders: Vec<BorderCountry>,
    },
    Failed(String),
}

pub struct App {
    pub source: Arc<dyn CountrySource>,
    pub dataset: Arc<Vec<CountryRecord>>,
    pub route: Route,
    pub listing: Listing,
    pub detail: DetailState,
    pub status_message: String,
}

impl App {
    /// Starts on `/countries`. The configured start route is dispatched by the
    /// event loop so a details fetch goes through the usual effect path.
    pub fn new(
        source: Arc<dyn CountrySource>,
        dataset: Arc<Vec<CountryRecord>>,
        config: &ResolvedConfig,
    ) -> Self {
        let options = config.listing_options();
        Self {
            source,
            listing: Listing::new(dataset.clone(), options),
            dataset,
            route: Route::Countries,
            detail: DetailState::Idle,
            status_message: String::new(),
        }
    }

    /// Fresh listing with both filters clear.
    pub fn reset_listing(&mut self) {
        self.listing = Listing::new(self.dataset.clone(), self.listing.options());
    }
}
