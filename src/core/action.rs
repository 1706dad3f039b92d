//! # Actions
//!
//! Everything that can happen in Terra becomes an `Action`.
//! User types in the search box? That's `Action::Listing(SearchChanged(text))`.
//! Details arrive from the API? That's `Action::DetailLoaded { .. }`.
//!
//! The `update()` function takes the current state and an action,
//! mutates the state, and returns an `Effect` describing any I/O the
//! caller must perform. No side effects here. I/O happens elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info, warn};

use crate::api::{BorderCountry, CountryDetail};
use crate::core::listing::ListingEvent;
use crate::core::route::Route;
use crate::core::state::{App, DetailState};

#[derive(Debug)]
pub enum Action {
    /// Forwarded to the listing reducer.
    Listing(ListingEvent),
    Navigate(Route),
    /// Back from a details page to `/countries`.
    GoBack,
    DetailLoaded {
        name: String,
        result: Result<(CountryDetail, Vec<BorderCountry>), String>,
    },
    Quit,
}

/// I/O requested by `update()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    FetchDetail(String),
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Listing(event) => {
            app.listing.apply(event);
            Effect::None
        }
        Action::Navigate(Route::Countries) | Action::GoBack => {
            if app.route != Route::Countries {
                info!("Navigating to /countries");
                app.route = Route::Countries;
                app.detail = DetailState::Idle;
                app.status_message.clear();
                app.reset_listing();
            }
            Effect::None
        }
        Action::Navigate(Route::Country(name)) => {
            info!("Navigating to /countries/{}", name);
            app.route = Route::Country(name.clone());
            app.detail = DetailState::Loading;
            app.status_message = format!("Loading {name}...");
            Effect::FetchDetail(name)
        }
        Action::DetailLoaded { name, result } => {
            if app.route != Route::Country(name.clone()) {
                debug!("Dropping stale details for {}", name);
                return Effect::None;
            }
            app.status_message.clear();
            app.detail = match result {
                Ok((detail, borders)) => DetailState::Loaded { detail, borders },
                Err(message) => {
                    warn!("Details for {} failed: {}", name, message);
                    DetailState::Failed(message)
                }
            };
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}
