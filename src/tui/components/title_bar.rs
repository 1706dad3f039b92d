//! # TitleBar Component
//!
//! Top status bar: app heading, current route, status text, and the
//! scroll-to-top hint once the listing has been scrolled far enough.
//!
//! Purely presentational. All data arrives as props:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new(
//!     app.route.to_string(),
//!     app.status_message.clone(),
//!     app.listing.show_scroll_top(),
//! );
//! title_bar.render(frame, title_area);
//! ```
//!
//! The text degrades in priority order so the heading and route always fit:
//!
//! 1. `"Where in the world? | /countries | 24 of 250 | ↑ Top (Home)"`
//! 2. `"Where in the world? | /countries/France | Loading France..."`
//! 3. `"Where in the world? | /countries"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

pub const HEADING: &str = "Where in the world?";
const SCROLL_TOP_HINT: &str = "↑ Top (Home)";

pub struct TitleBar {
    /// Current route, e.g. `/countries/France`
    pub location: String,
    /// Transient status (counts, "Loading France...")
    pub status_message: String,
    /// Whether the scroll-to-top control is shown
    pub show_scroll_top: bool,
}

impl TitleBar {
    pub fn new(location: String, status_message: String, show_scroll_top: bool) -> Self {
        Self {
            location,
            status_message,
            show_scroll_top,
        }
    }

    fn segments(&self) -> Vec<String> {
        let mut segments = vec![self.location.clone()];
        if !self.status_message.is_empty() {
            segments.push(self.status_message.clone());
        }
        if self.show_scroll_top {
            segments.push(SCROLL_TOP_HINT.to_string());
        }
        segments
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![Span::styled(
            HEADING,
            Style::default().add_modifier(Modifier::BOLD),
        )];
        for segment in self.segments() {
            spans.push(Span::raw(" | "));
            spans.push(Span::raw(segment));
        }
        frame.render_widget(Line::from(spans), area);
    }
}
