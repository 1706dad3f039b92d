//! # Region Picker Component
//!
//! Overlay listing the filterable regions plus "All regions". Opened with
//! Ctrl+F from the listing page.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `RegionPickerState` lives in `TuiState` while the overlay is open
//! - `RegionPicker` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Padding};

use crate::api::Region;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

const ALL_REGIONS: &str = "All regions";

/// Persistent state for the region picker overlay.
pub struct RegionPickerState {
    /// `None` clears the region filter.
    pub options: Vec<Option<Region>>,
    pub selected: usize,
    pub list_state: ListState,
}

impl RegionPickerState {
    /// Opens with the active filter preselected.
    pub fn new(current: Option<Region>) -> Self {
        let options: Vec<Option<Region>> = std::iter::once(None)
            .chain(Region::FILTERABLE.into_iter().map(Some))
            .collect();
        let selected = options.iter().position(|o| *o == current).unwrap_or(0);
        let mut list_state = ListState::default();
        list_state.select(Some(selected));
        Self {
            options,
            selected,
            list_state,
        }
    }

    fn select(&mut self, index: usize) {
        self.selected = index.min(self.options.len().saturating_sub(1));
        self.list_state.select(Some(self.selected));
    }
}

impl EventHandler for RegionPickerState {
    type Event = RegionPickerEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::Escape => Some(RegionPickerEvent::Dismiss),
            TuiEvent::CursorUp => {
                self.select(self.selected.saturating_sub(1));
                None
            }
            TuiEvent::CursorDown => {
                self.select(self.selected + 1);
                None
            }
            TuiEvent::Submit => self
                .options
                .get(self.selected)
                .map(|region| RegionPickerEvent::Select(*region)),
            _ => None,
        }
    }
}

/// Events emitted by the region picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionPickerEvent {
    Select(Option<Region>),
    Dismiss,
}

/// Transient render wrapper for the region picker overlay.
pub struct RegionPicker<'a> {
    state: &'a mut RegionPickerState,
    current: Option<Region>,
}

impl<'a> RegionPicker<'a> {
    pub fn new(state: &'a mut RegionPickerState, current: Option<Region>) -> Self {
        Self { state, current }
    }
}

impl Component for RegionPicker<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(40, 50, area);

        // Clear underlying content
        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Filter by Region ")
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(" Enter Select  Esc Back ").centered())
            .padding(Padding::horizontal(1));

        let items: Vec<ListItem> = self
            .state
            .options
            .iter()
            .enumerate()
            .map(|(i, option)| {
                let label = option.map_or(ALL_REGIONS, Region::as_str);
                let is_active = *option == self.current;
                let style = if i == self.state.selected {
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else if is_active {
                    Style::default().fg(Color::Cyan)
                } else {
                    Style::default().fg(Color::Gray)
                };
                let marker = if is_active { " *" } else { "" };
                ListItem::new(Line::from(vec![
                    Span::styled(label, style),
                    Span::styled(marker, style),
                ]))
            })
            .collect();

        let list = List::new(items).block(block);
        frame.render_stateful_widget(list, overlay, &mut self.state.list_state);
    }
}

/// Compute a centered rect using percentage of the outer rect.
fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}
