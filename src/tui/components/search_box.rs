//! # SearchBox Component
//!
//! Single-line search input for the listing page. The buffer is internal
//! state; every edit is reported upward as `SearchEvent::Changed` so the
//! listing can refilter on each keystroke.
//!
//! Editing is append-only at the end of the buffer (type, Backspace,
//! Ctrl+U, paste). Left/Right belong to the card grid.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

const PLACEHOLDER: &str = "Search for a country...";

/// High-level events emitted by the SearchBox
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent {
    /// The buffer changed; carries the full new text.
    Changed(String),
}

#[derive(Debug, Default)]
pub struct SearchBox {
    pub buffer: String,
    /// Dimmed while an overlay has focus.
    pub dimmed: bool,
}

impl SearchBox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Trailing slice of the buffer that fits in `width` columns.
    fn visible_tail(&self, width: usize) -> &str {
        let mut start = 0;
        while self.buffer[start..].width() > width {
            match self.buffer[start..].chars().next() {
                Some(ch) => start += ch.len_utf8(),
                None => break,
            }
        }
        &self.buffer[start..]
    }
}

impl Component for SearchBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.dimmed {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::Green)
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(" Search ");
        let inner = block.inner(area);
        // Keep one column free for the cursor.
        let text_width = inner.width.saturating_sub(1) as usize;

        let paragraph = if self.buffer.is_empty() {
            Paragraph::new(PLACEHOLDER).style(Style::default().fg(Color::DarkGray))
        } else {
            Paragraph::new(self.visible_tail(text_width).to_string())
        };
        frame.render_widget(paragraph.block(block), area);

        if !self.dimmed && inner.width > 0 && inner.height > 0 {
            let typed = self.visible_tail(text_width).width() as u16;
            frame.set_cursor_position((inner.x + typed, inner.y));
        }
    }
}

impl EventHandler for SearchBox {
    type Event = SearchEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.push(*c);
            }
            TuiEvent::Paste(text) => {
                let line: String = text.chars().filter(|c| !c.is_control()).collect();
                if line.is_empty() {
                    return None;
                }
                self.buffer.push_str(&line);
            }
            TuiEvent::Backspace => {
                self.buffer.pop()?;
            }
            TuiEvent::ClearInput => {
                if self.buffer.is_empty() {
                    return None;
                }
                self.buffer.clear();
            }
            _ => return None,
        }
        Some(SearchEvent::Changed(self.buffer.clone()))
    }
}
