//! # Country Listing
//!
//! The search / filter / pagination state machine behind `/countries`.
//!
//! ```text
//! SearchState { input, region }
//!        │
//!        ├── input  ──► name index   ──► by_text   ─┐
//!        │                                          ├─► filtered ──► visible (prefix)
//!        └── region ──► region index ──► by_region ─┘
//! ```
//!
//! Two filters change independently. Each user event goes through
//! [`Listing::apply`], which runs exactly one reconciliation: refresh the
//! filter that changed, intersect, reset the window. No step depends on the
//! order in which some other part of the app observes the change.
//!
//! Row sets are stored as dataset indices. `Matches::All` stands for "every
//! row" so the unfiltered case never allocates and `load_more` reads the
//! dataset directly.

use std::sync::Arc;

use log::debug;

use crate::api::{CountryRecord, Region};
use crate::core::fuzzy::FuzzyIndex;

/// Number of cards added to the window per page.
pub const PAGE_SIZE: usize = 24;

/// Scroll offset above which the "scroll to top" control is shown.
pub const SCROLL_TOP_THRESHOLD: u32 = 400;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingOptions {
    pub page_size: usize,
    pub scroll_top_threshold: u32,
}

impl Default for ListingOptions {
    fn default() -> Self {
        Self {
            page_size: PAGE_SIZE,
            scroll_top_threshold: SCROLL_TOP_THRESHOLD,
        }
    }
}

/// The two user-controlled filter inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    pub input: String,
    pub region: Option<Region>,
}

impl SearchState {
    /// The search text as used for matching: the raw input, or empty when the
    /// input is only whitespace.
    pub fn query(&self) -> &str {
        if self.input.trim().is_empty() { "" } else { &self.input }
    }

    pub fn is_clear(&self) -> bool {
        self.query().is_empty() && self.region.is_none()
    }
}

/// Events the listing reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingEvent {
    SearchChanged(String),
    RegionChanged(Option<Region>),
    LoadMore,
    Scrolled(u32),
}

/// A set of dataset rows, ascending.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Matches {
    All,
    Only(Vec<usize>),
}

impl Matches {
    fn len(&self, total: usize) -> usize {
        match self {
            Matches::All => total,
            Matches::Only(rows) => rows.len(),
        }
    }
}

pub struct Listing {
    dataset: Arc<Vec<CountryRecord>>,
    names: FuzzyIndex,
    regions: FuzzyIndex,
    options: ListingOptions,
    search: SearchState,
    by_text: Matches,
    by_region: Matches,
    filtered: Matches,
    visible_len: usize,
    show_scroll_top: bool,
}

impl Listing {
    /// Creates a listing over `dataset` with both filters clear and the
    /// first page visible.
    pub fn new(dataset: Arc<Vec<CountryRecord>>, options: ListingOptions) -> Self {
        let names = FuzzyIndex::new(dataset.iter().map(|c| c.name.common.clone()));
        let regions = FuzzyIndex::new(dataset.iter().map(|c| c.region.as_str()));
        let mut listing = Self {
            dataset,
            names,
            regions,
            options,
            search: SearchState::default(),
            by_text: Matches::All,
            by_region: Matches::All,
            filtered: Matches::All,
            visible_len: 0,
            show_scroll_top: false,
        };
        listing.reset_window();
        listing
    }

    /// Single entry point: one event, one deterministic reconciliation.
    pub fn apply(&mut self, event: ListingEvent) {
        match event {
            ListingEvent::SearchChanged(text) => self.set_search_text(text),
            ListingEvent::RegionChanged(region) => self.set_region_filter(region),
            ListingEvent::LoadMore => {
                self.load_more();
            }
            ListingEvent::Scrolled(offset) => {
                self.on_scroll(offset);
            }
        }
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search.input = text.into();
        if self.reset_if_clear() {
            return;
        }
        let query = self.search.query();
        self.by_text = if query.is_empty() {
            Matches::All
        } else {
            Matches::Only(self.names.search(query))
        };
        self.recompute_intersection();
        self.reset_window();
    }

    pub fn set_region_filter(&mut self, region: Option<Region>) {
        self.search.region = region;
        if self.reset_if_clear() {
            return;
        }
        self.by_region = match region {
            None => Matches::All,
            Some(region) => Matches::Only(self.regions.search(region.as_str())),
        };
        self.recompute_intersection();
        self.reset_window();
    }

    /// Both filters clear: restore the full dataset without consulting the
    /// matcher. Returns whether the reset happened.
    fn reset_if_clear(&mut self) -> bool {
        if !self.search.is_clear() {
            return false;
        }
        debug!("Filters cleared, restoring {} countries", self.dataset.len());
        self.by_text = Matches::All;
        self.by_region = Matches::All;
        self.filtered = Matches::All;
        self.reset_window();
        true
    }

    /// `filtered` = rows in both `by_text` and `by_region`, dataset order.
    pub fn recompute_intersection(&mut self) {
        self.filtered = match (&self.by_text, &self.by_region) {
            (Matches::All, Matches::All) => Matches::All,
            (Matches::All, Matches::Only(rows)) | (Matches::Only(rows), Matches::All) => {
                Matches::Only(rows.clone())
            }
            (Matches::Only(text), Matches::Only(region)) => Matches::Only(
                text.iter()
                    .copied()
                    .filter(|row| region.binary_search(row).is_ok())
                    .collect(),
            ),
        };
        debug!(
            "Filter '{}' / {:?} -> {} countries",
            self.search.query(),
            self.search.region,
            self.filtered_len()
        );
    }

    pub fn reset_window(&mut self) {
        self.visible_len = self.options.page_size.min(self.filtered_len());
    }

    /// Grows the window by one page. Returns how many rows were added.
    pub fn load_more(&mut self) -> usize {
        let before = self.visible_len;
        self.visible_len = (before + self.options.page_size).min(self.filtered_len());
        self.visible_len - before
    }

    /// Updates the scroll-to-top flag from the current scroll offset.
    pub fn on_scroll(&mut self, offset: u32) -> bool {
        self.show_scroll_top = offset > self.options.scroll_top_threshold;
        self.show_scroll_top
    }

    pub fn search(&self) -> &SearchState {
        &self.search
    }

    pub fn options(&self) -> ListingOptions {
        self.options
    }

    pub fn dataset(&self) -> &Arc<Vec<CountryRecord>> {
        &self.dataset
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered.len(self.dataset.len())
    }

    pub fn visible_len(&self) -> usize {
        self.visible_len
    }

    pub fn has_more(&self) -> bool {
        self.visible_len < self.filtered_len()
    }

    pub fn show_scroll_top(&self) -> bool {
        self.show_scroll_top
    }

    /// Every row passing both filters, in dataset order.
    pub fn filtered(&self) -> Vec<&CountryRecord> {
        self.rows(self.filtered_len())
    }

    /// The rendered window: a prefix of [`Listing::filtered`].
    pub fn visible(&self) -> Vec<&CountryRecord> {
        self.rows(self.visible_len)
    }

    fn rows(&self, len: usize) -> Vec<&CountryRecord> {
        match &self.filtered {
            Matches::All => self.dataset.iter().take(len).collect(),
            Matches::Only(rows) => rows.iter().take(len).map(|&row| &self.dataset[row]).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{country, numbered_dataset, sample_dataset};

    fn names(rows: &[&CountryRecord]) -> Vec<String> {
        rows.iter().map(|c| c.name.common.clone()).collect()
    }

    fn listing(dataset: Vec<CountryRecord>) -> Listing {
        Listing::new(Arc::new(dataset), ListingOptions::default())
    }

    #[test]
    fn test_initial_window_of_thirty() {
        let mut list = listing(numbered_dataset(30));
        assert_eq!(list.visible_len(), 24);
        assert_eq!(list.filtered_len(), 30);
        assert!(list.has_more());

        assert_eq!(list.load_more(), 6);
        assert_eq!(list.visible_len(), 30);
        assert!(!list.has_more());
    }

    #[test]
    fn test_load_more_grows_by_page_until_exhausted() {
        let mut list = listing(numbered_dataset(60));
        assert_eq!(list.load_more(), 24);
        assert_eq!(list.visible_len(), 48);
        assert_eq!(list.load_more(), 12);
        assert_eq!(list.visible_len(), 60);
        assert_eq!(list.load_more(), 0);
        assert_eq!(list.visible_len(), 60);
    }

    #[test]
    fn test_small_dataset_fits_first_page() {
        let list = listing(numbered_dataset(5));
        assert_eq!(list.visible_len(), 5);
        assert!(!list.has_more());
    }

    #[test]
    fn test_empty_dataset() {
        let mut list = listing(Vec::new());
        assert_eq!(list.visible_len(), 0);
        assert!(!list.has_more());
        list.set_search_text("fra");
        assert!(list.visible().is_empty());
        assert_eq!(list.load_more(), 0);
    }

    #[test]
    fn test_empty_query_keeps_full_dataset() {
        let mut list = listing(sample_dataset());
        list.set_search_text("ger");
        list.set_search_text("");
        assert_eq!(list.filtered_len(), list.dataset().len());
    }

    #[test]
    fn test_empty_query_leaves_region_filter_alone() {
        let mut list = listing(sample_dataset());
        list.set_region_filter(Some(Region::Europe));
        list.set_search_text("spa");
        list.set_search_text("");
        assert_eq!(list.filtered_len(), 6);
        assert!(list.filtered().iter().all(|c| c.region == Region::Europe));
    }

    #[test]
    fn test_no_region_keeps_full_dataset() {
        let mut list = listing(sample_dataset());
        list.set_region_filter(Some(Region::Asia));
        list.set_region_filter(None);
        assert_eq!(list.filtered_len(), list.dataset().len());
    }

    #[test]
    fn test_whitespace_query_counts_as_empty() {
        let mut list = listing(sample_dataset());
        list.set_search_text("   ");
        assert_eq!(list.filtered_len(), list.dataset().len());
    }

    #[test]
    fn test_surrounding_whitespace_is_matched_verbatim() {
        let mut list = listing(sample_dataset());
        list.set_search_text("fra ");
        assert_eq!(list.search().query(), "fra ");

        let names_index = FuzzyIndex::new(sample_dataset().iter().map(|c| c.name.common.clone()));
        let expected: Vec<String> = names_index
            .search("fra ")
            .into_iter()
            .map(|i| sample_dataset()[i].name.common.clone())
            .collect();
        assert_eq!(names(&list.filtered()), expected);
    }

    #[test]
    fn test_search_fra_then_europe_narrows_to_france() {
        let mut list = listing(sample_dataset());

        list.apply(ListingEvent::SearchChanged("fra".into()));
        let hits = names(&list.filtered());
        assert!(hits.contains(&"France".to_string()));
        assert!(hits.contains(&"South Africa".to_string()));

        list.apply(ListingEvent::RegionChanged(Some(Region::Europe)));
        assert_eq!(names(&list.filtered()), vec!["France"]);
        assert_eq!(names(&list.visible()), vec!["France"]);
        assert!(!list.has_more());
    }

    #[test]
    fn test_region_only_filter() {
        let mut list = listing(sample_dataset());
        list.set_region_filter(Some(Region::Africa));
        assert_eq!(names(&list.filtered()), vec!["Nigeria", "South Africa", "Kenya"]);
    }

    #[test]
    fn test_intersection_preserves_dataset_order() {
        let mut list = listing(sample_dataset());
        list.set_search_text("a");
        list.set_region_filter(Some(Region::Europe));

        let dataset = list.dataset().clone();
        let positions: Vec<usize> = list
            .filtered()
            .iter()
            .map(|c| dataset.iter().position(|d| d == *c).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(list.filtered().iter().all(|c| c.region == Region::Europe));
    }

    #[test]
    fn test_intersection_is_both_individual_sets() {
        let dataset = sample_dataset();
        let mut text_only = listing(dataset.clone());
        text_only.set_search_text("an");
        let mut region_only = listing(dataset.clone());
        region_only.set_region_filter(Some(Region::Asia));
        let mut both = listing(dataset);
        both.set_search_text("an");
        both.set_region_filter(Some(Region::Asia));

        let text_names = names(&text_only.filtered());
        let region_names = names(&region_only.filtered());
        let expected: Vec<String> = text_names
            .into_iter()
            .filter(|n| region_names.contains(n))
            .collect();
        assert_eq!(names(&both.filtered()), expected);
    }

    #[test]
    fn test_clearing_both_filters_restores_dataset() {
        let mut dataset = numbered_dataset(40);
        dataset.push(country("France", Region::Europe, 67_391_582));
        let mut list = listing(dataset.clone());

        list.set_search_text("fra");
        list.set_region_filter(Some(Region::Europe));
        assert_eq!(list.filtered_len(), 1);

        list.set_search_text("");
        list.set_region_filter(None);
        assert_eq!(list.filtered_len(), dataset.len());
        assert_eq!(list.visible_len(), 24);
        let expected: Vec<&CountryRecord> = dataset.iter().take(24).collect();
        assert_eq!(list.visible(), expected);
    }

    #[test]
    fn test_filter_change_resets_window() {
        let mut list = listing(numbered_dataset(80));
        list.load_more();
        list.load_more();
        assert_eq!(list.visible_len(), 72);

        list.set_search_text("Country 1");
        assert!(list.visible_len() <= 24);
        list.set_search_text("");
        assert_eq!(list.visible_len(), 24);
    }

    #[test]
    fn test_visible_is_prefix_of_filtered() {
        let mut list = listing(numbered_dataset(50));
        list.set_search_text("1");
        list.load_more();
        let filtered = list.filtered();
        let visible = list.visible();
        assert!(visible.len() <= filtered.len());
        assert_eq!(&filtered[..visible.len()], &visible[..]);
        assert_eq!(list.has_more(), visible.len() < filtered.len());
    }

    #[test]
    fn test_no_match_empties_window() {
        let mut list = listing(sample_dataset());
        list.set_search_text("zzzz");
        assert_eq!(list.filtered_len(), 0);
        assert_eq!(list.visible_len(), 0);
        assert!(!list.has_more());
    }

    #[test]
    fn test_scroll_threshold_toggles_without_hysteresis() {
        let mut list = listing(sample_dataset());
        assert!(!list.on_scroll(399));
        assert!(list.on_scroll(401));
        assert!(list.show_scroll_top());
        assert!(!list.on_scroll(400));
        list.apply(ListingEvent::Scrolled(1000));
        assert!(list.show_scroll_top());
        list.apply(ListingEvent::Scrolled(0));
        assert!(!list.show_scroll_top());
    }

    #[test]
    fn test_custom_page_size() {
        let options = ListingOptions { page_size: 10, scroll_top_threshold: 5 };
        let mut list = Listing::new(Arc::new(numbered_dataset(25)), options);
        assert_eq!(list.visible_len(), 10);
        list.apply(ListingEvent::LoadMore);
        assert_eq!(list.visible_len(), 20);
        assert!(list.on_scroll(6));
    }

    #[test]
    fn test_search_state_tracks_inputs() {
        let mut list = listing(sample_dataset());
        list.apply(ListingEvent::SearchChanged("ger".into()));
        list.apply(ListingEvent::RegionChanged(Some(Region::Europe)));
        assert_eq!(
            list.search(),
            &SearchState { input: "ger".into(), region: Some(Region::Europe) }
        );
        assert!(!list.search().is_clear());
    }
}
