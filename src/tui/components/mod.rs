//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as struct fields:
//! - `TitleBar`: heading, route, status, scroll-to-top hint
//! - `CountryCard`: one country in the grid
//!
//! ### Stateful Components (Event-Driven)
//!
//! Persistent state that lives in `TuiState`, paired with a transient
//! wrapper built each frame:
//! - `SearchBox`: search text input
//! - `CountryGridState` / `CountryGrid`: card grid, selection, scrolling
//! - `RegionPickerState` / `RegionPicker`: region filter overlay
//! - `DetailPageState` / `DetailPage`: details page and border chips
//!
//! ### Props-Based Data Flow
//!
//! Components receive external data as props rather than reading `App`
//! directly:
//!
//! ```rust,ignore
//! // Dependencies are explicit
//! CountryGrid::new(&mut tui.grid, &visible, remaining).render(frame, area);
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs            (this file)
//! ├── title_bar.rs      (Top status bar)
//! ├── search_box.rs     (Search input)
//! ├── region_picker.rs  (Region filter overlay)
//! ├── country_card.rs   (Single card widget)
//! ├── country_grid.rs   (Scrollable card grid + Load More)
//! └── detail_page.rs    (Country details)
//! ```

pub mod country_card;
pub mod country_grid;
pub mod detail_page;
pub mod region_picker;
pub mod search_box;
mod title_bar;

pub use country_grid::{CountryGrid, CountryGridState, GridEvent};
pub use detail_page::{DetailEvent, DetailPage, DetailPageState};
pub use region_picker::{RegionPicker, RegionPickerEvent, RegionPickerState};
pub use search_box::{SearchBox, SearchEvent};
pub use title_bar::TitleBar;
