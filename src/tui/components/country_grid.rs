//! # CountryGrid Component
//!
//! Scrollable grid of country cards for the listing page, with a
//! "Load More" row under the last card while the filtered set has more
//! entries than the visible window.
//!
//! `CountryGrid` is transient (built each frame with the visible countries
//! as props) and wraps `&'a mut CountryGridState`, which persists selection
//! and scroll position across frames.
//!
//! The scroll position is reported to the listing in scroll units: one
//! terminal row counts as [`ROW_UNITS`] units.

use ratatui::Frame;
use ratatui::layout::{Alignment, Position, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::api::CountryRecord;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::country_card::{CARD_HEIGHT, CountryCard};
use crate::tui::event::TuiEvent;

pub const CARD_MIN_WIDTH: u16 = 28;
pub const MAX_COLUMNS: usize = 4;
pub const ROW_UNITS: u32 = 16;
const LOAD_MORE_HEIGHT: u16 = 3;

/// High-level events emitted by the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridEvent {
    /// Open the details page for the card at this visible index.
    Open(usize),
    /// Down was pressed on the last row while more countries are available.
    LoadMore,
}

/// Selection and scroll state for the grid.
/// Must be persisted in the parent TuiState.
pub struct CountryGridState {
    pub scroll_state: ScrollViewState,
    /// Index into the visible window
    pub selected: usize,
    /// Columns used by the last render
    pub columns: usize,
    /// Last known viewport height (for scroll clamping between frames)
    pub viewport_height: u16,
    item_count: usize,
    has_more: bool,
    reported_units: u32,
}

impl Default for CountryGridState {
    fn default() -> Self {
        Self::new()
    }
}

impl CountryGridState {
    pub fn new() -> Self {
        Self {
            scroll_state: ScrollViewState::default(),
            selected: 0,
            columns: 1,
            viewport_height: 0,
            item_count: 0,
            has_more: false,
            reported_units: 0,
        }
    }

    /// Update the props event handling depends on, clamping the selection.
    pub fn sync(&mut self, item_count: usize, has_more: bool) {
        self.item_count = item_count;
        self.has_more = has_more;
        self.selected = self.selected.min(item_count.saturating_sub(1));
    }

    /// Back to the first card at the top of the grid.
    pub fn reset(&mut self) {
        self.selected = 0;
        self.scroll_state.scroll_to_top();
    }

    pub fn rows(&self) -> usize {
        self.item_count.div_ceil(self.columns.max(1))
    }

    pub fn content_height(&self) -> u16 {
        let cards = (self.rows() as u16).saturating_mul(CARD_HEIGHT);
        if self.has_more {
            cards.saturating_add(LOAD_MORE_HEIGHT)
        } else {
            cards
        }
    }

    /// Scroll offset in listing scroll units.
    pub fn scroll_units(&self) -> u32 {
        u32::from(self.scroll_state.offset().y) * ROW_UNITS
    }

    /// The scroll offset in units, if it moved since the last call.
    pub fn take_scroll_change(&mut self) -> Option<u32> {
        let units = self.scroll_units();
        if units == self.reported_units {
            return None;
        }
        self.reported_units = units;
        Some(units)
    }

    pub fn clamp_scroll(&mut self) {
        let max_y = self.content_height().saturating_sub(self.viewport_height);
        let current = self.scroll_state.offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position {
                x: current.x,
                y: max_y,
            });
        }
    }

    /// Scroll the viewport so the selected card's row is fully visible.
    pub fn scroll_to_selected(&mut self) {
        let row = (self.selected / self.columns.max(1)) as u16;
        let top = row.saturating_mul(CARD_HEIGHT);
        let bottom = top.saturating_add(CARD_HEIGHT);
        let offset_y = self.scroll_state.offset().y;

        if top < offset_y {
            self.scroll_state.set_offset(Position { x: 0, y: top });
        } else if bottom > offset_y.saturating_add(self.viewport_height) {
            let new_y = bottom.saturating_sub(self.viewport_height);
            self.scroll_state.set_offset(Position { x: 0, y: new_y });
        }
    }

    /// Move one row down. Returns `LoadMore` when already on the last row
    /// and the listing has more to show.
    pub fn move_down(&mut self) -> Option<GridEvent> {
        let columns = self.columns.max(1);
        if self.selected + columns < self.item_count {
            self.selected += columns;
        } else if self.has_more {
            return Some(GridEvent::LoadMore);
        } else if self.selected / columns + 1 < self.rows() {
            // Partial last row below: land on its last card
            self.selected = self.item_count - 1;
        }
        self.scroll_to_selected();
        None
    }
}

/// Chooses how many cards fit side by side.
pub fn columns_for_width(width: u16) -> usize {
    usize::from(width / CARD_MIN_WIDTH).clamp(1, MAX_COLUMNS)
}

/// Card grid component.
/// Created fresh each frame with references to state and data.
pub struct CountryGrid<'a> {
    pub state: &'a mut CountryGridState,
    /// The visible window of the filtered listing
    pub countries: &'a [&'a CountryRecord],
    /// Filtered countries not yet shown
    pub remaining: usize,
}

impl<'a> CountryGrid<'a> {
    pub fn new(
        state: &'a mut CountryGridState,
        countries: &'a [&'a CountryRecord],
        remaining: usize,
    ) -> Self {
        Self {
            state,
            countries,
            remaining,
        }
    }
}

impl Component for CountryGrid<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let content_width = area.width.saturating_sub(1); // -1 for scrollbar
        self.state.columns = columns_for_width(content_width);
        self.state.viewport_height = area.height;
        self.state.sync(self.countries.len(), self.remaining > 0);
        self.state.clamp_scroll();

        if self.countries.is_empty() {
            let empty = Paragraph::new("No countries match your search.")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center);
            frame.render_widget(empty, area);
            return;
        }

        let columns = self.state.columns;
        let card_width = content_width / columns as u16;
        let mut scroll_view = ScrollView::new(Size::new(content_width, self.state.content_height()))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Always)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        // Only rows intersecting the viewport are drawn
        let offset_y = self.state.scroll_state.offset().y;
        let first_row = usize::from(offset_y / CARD_HEIGHT);
        let last_row = usize::from(offset_y.saturating_add(area.height) / CARD_HEIGHT);

        for (i, country) in self
            .countries
            .iter()
            .enumerate()
            .skip(first_row * columns)
            .take((last_row + 1 - first_row) * columns)
        {
            let row = (i / columns) as u16;
            let col = (i % columns) as u16;
            let card_rect = Rect::new(
                col * card_width,
                row.saturating_mul(CARD_HEIGHT),
                card_width,
                CARD_HEIGHT,
            );
            let card = CountryCard::new(country, i == self.state.selected);
            scroll_view.render_widget(card, card_rect);
        }

        if self.remaining > 0 {
            let y = (self.state.rows() as u16).saturating_mul(CARD_HEIGHT);
            let button = Paragraph::new(format!(
                "Load More (Ctrl+L): {} more",
                self.remaining
            ))
            .alignment(Alignment::Center)
            .style(Style::default().add_modifier(Modifier::BOLD))
            .block(Block::bordered().border_type(BorderType::Rounded));
            scroll_view.render_widget(button, Rect::new(0, y, content_width, LOAD_MORE_HEIGHT));
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}

impl EventHandler for CountryGridState {
    type Event = GridEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::CursorUp => {
                if self.selected >= self.columns {
                    self.selected -= self.columns;
                }
                self.scroll_to_selected();
                None
            }
            TuiEvent::CursorDown => self.move_down(),
            TuiEvent::CursorLeft => {
                self.selected = self.selected.saturating_sub(1);
                self.scroll_to_selected();
                None
            }
            TuiEvent::CursorRight => {
                if self.selected + 1 < self.item_count {
                    self.selected += 1;
                }
                self.scroll_to_selected();
                None
            }
            TuiEvent::ScrollUp => {
                self.scroll_state.scroll_up();
                None
            }
            TuiEvent::ScrollDown => {
                self.scroll_state.scroll_down();
                self.clamp_scroll();
                None
            }
            TuiEvent::ScrollPageUp => {
                self.scroll_state.scroll_page_up();
                None
            }
            TuiEvent::ScrollPageDown => {
                self.scroll_state.scroll_page_down();
                self.clamp_scroll();
                None
            }
            TuiEvent::ScrollToTop => {
                self.reset();
                None
            }
            TuiEvent::Submit if self.item_count > 0 => Some(GridEvent::Open(self.selected)),
            _ => None,
        }
    }
}
