//! # DetailPage Component
//!
//! The `/countries/{name}` page: back control, country name, flag link,
//! two columns of facts, and the border countries as selectable chips.
//!
//! `DetailPageState` persists the chip selection; `DetailPage` is built each
//! frame around the core `DetailState`.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::api::BorderCountry;
use crate::core::detail::{DetailView, InfoRow, border_labels};
use crate::core::state::DetailState;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// High-level events emitted by the details page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailEvent {
    /// Open the details page of a neighbouring country.
    Open(String),
    Back,
}

#[derive(Debug, Default)]
pub struct DetailPageState {
    /// Index of the highlighted border chip
    pub selected: usize,
    /// Navigable name per border chip; `None` where the name could not be resolved
    targets: Vec<Option<String>>,
}

impl DetailPageState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Refresh chip targets from the loaded details.
    pub fn sync(&mut self, detail: &DetailState) {
        self.targets = match detail {
            DetailState::Loaded { borders, .. } => {
                borders.iter().map(|b| b.name.clone()).collect()
            }
            _ => Vec::new(),
        };
        self.selected = self.selected.min(self.targets.len().saturating_sub(1));
    }
}

impl EventHandler for DetailPageState {
    type Event = DetailEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::Escape | TuiEvent::Backspace => Some(DetailEvent::Back),
            TuiEvent::CursorLeft => {
                self.selected = self.selected.saturating_sub(1);
                None
            }
            TuiEvent::CursorRight => {
                if self.selected + 1 < self.targets.len() {
                    self.selected += 1;
                }
                None
            }
            TuiEvent::Submit => self
                .targets
                .get(self.selected)
                .cloned()
                .flatten()
                .map(DetailEvent::Open),
            _ => None,
        }
    }
}

pub struct DetailPage<'a> {
    pub state: &'a DetailPageState,
    pub detail: &'a DetailState,
    /// Route key, shown while loading or on failure
    pub name: &'a str,
    pub spinner_frame: usize,
}

impl<'a> DetailPage<'a> {
    pub fn new(
        state: &'a DetailPageState,
        detail: &'a DetailState,
        name: &'a str,
        spinner_frame: usize,
    ) -> Self {
        Self {
            state,
            detail,
            name,
            spinner_frame,
        }
    }

    fn render_loading(&self, frame: &mut Frame, area: Rect) {
        let spinner = SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()];
        let [_, middle, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .areas(area);
        let text = Paragraph::new(format!("{spinner} Loading {}...", self.name))
            .style(Style::default().fg(Color::Cyan))
            .alignment(Alignment::Center);
        frame.render_widget(text, middle);
    }

    fn render_error(&self, frame: &mut Frame, area: Rect, message: &str) {
        let error = Paragraph::new(vec![
            Line::from(message.to_string()),
            Line::from(""),
            Line::from(Span::styled(
                "Esc Back",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .block(Block::bordered().title("ERROR"))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
        frame.render_widget(error, area);
    }

    fn render_loaded(&self, frame: &mut Frame, area: Rect, view: &DetailView, borders: &[BorderCountry]) {
        use Constraint::{Length, Min};
        let rows = view.primary.len().max(view.secondary.len()) as u16;
        let [back_area, title_area, flag_area, info_area, borders_area] =
            Layout::vertical([Length(2), Length(2), Length(2), Length(rows + 1), Min(0)])
                .areas(area);

        frame.render_widget(
            Paragraph::new(Span::styled(
                "← Back (Esc)",
                Style::default().add_modifier(Modifier::REVERSED),
            )),
            back_area,
        );
        frame.render_widget(
            Paragraph::new(Span::styled(
                view.title.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            title_area,
        );
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::raw("Flag: "),
                Span::styled(view.flag_url.as_str(), Style::default().fg(Color::Blue)),
            ])),
            flag_area,
        );

        let [primary_area, secondary_area] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(info_area);
        frame.render_widget(Paragraph::new(info_lines(&view.primary)), primary_area);
        frame.render_widget(Paragraph::new(info_lines(&view.secondary)), secondary_area);

        let mut spans = vec![Span::styled(
            "Border Countries: ",
            Style::default().add_modifier(Modifier::BOLD),
        )];
        for (i, label) in border_labels(borders).into_iter().enumerate() {
            let resolved = borders.get(i).is_some_and(|b| b.name.is_some());
            let style = if resolved && i == self.state.selected {
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else if resolved {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            spans.push(Span::styled(format!("[{label}]"), style));
            spans.push(Span::raw(" "));
        }
        frame.render_widget(
            Paragraph::new(Line::from(spans)).wrap(Wrap { trim: true }),
            borders_area,
        );
    }
}

fn info_lines(rows: &[InfoRow]) -> Vec<Line<'_>> {
    rows.iter()
        .map(|row| {
            Line::from(vec![
                Span::styled(
                    format!("{}: ", row.label),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(row.value.as_str()),
            ])
        })
        .collect()
}

impl Component for DetailPage<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        match self.detail {
            DetailState::Idle => {}
            DetailState::Loading => self.render_loading(frame, area),
            DetailState::Failed(message) => self.render_error(frame, area, message),
            DetailState::Loaded { detail, borders } => {
                let view = DetailView::new(detail);
                self.render_loaded(frame, area, &view, borders);
            }
        }
    }
}
