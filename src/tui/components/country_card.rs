use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Widget};

use crate::api::CountryRecord;
use crate::core::detail::{capital_label, format_population};
use crate::tui::component::Component;

/// Rows taken by one card: two borders plus three info lines.
pub const CARD_HEIGHT: u16 = 5;

/// A single country in the listing grid: name as the title, then
/// population, region and capital.
///
/// Transient: built each frame by `CountryGrid` for the cards in view.
#[derive(Clone, Copy)]
pub struct CountryCard<'a> {
    pub country: &'a CountryRecord,
    pub is_selected: bool,
}

impl<'a> CountryCard<'a> {
    pub fn new(country: &'a CountryRecord, is_selected: bool) -> Self {
        Self {
            country,
            is_selected,
        }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let label = Style::default().add_modifier(Modifier::BOLD);
        vec![
            Line::from(vec![
                Span::styled("Population: ", label),
                Span::raw(format_population(self.country.population)),
            ]),
            Line::from(vec![
                Span::styled("Region: ", label),
                Span::raw(self.country.region.to_string()),
            ]),
            Line::from(vec![
                Span::styled("Capital: ", label),
                Span::raw(capital_label(self.country)),
            ]),
        ]
    }
}

impl Widget for CountryCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.is_selected {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::DIM)
        };

        let block = Block::bordered()
            .title(self.country.name.common.as_str())
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title_style(border_style)
            .padding(Padding::horizontal(1));

        let inner_area = block.inner(area);
        let lines = self.lines();
        block.render(area, buf);
        Paragraph::new(lines).render(inner_area, buf);
    }
}

impl Component for CountryCard<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(*self, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Region;
    use crate::test_support::country;

    fn render_card(record: &CountryRecord, width: u16) -> Vec<String> {
        let area = Rect::new(0, 0, width, CARD_HEIGHT);
        let mut buf = Buffer::empty(area);
        CountryCard::new(record, false).render(area, &mut buf);
        (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buf[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect()
    }

    #[test]
    fn test_card_shows_name_and_info_lines() {
        let record = country("Germany", Region::Europe, 83_240_525);
        let rows = render_card(&record, 36);

        assert!(rows[0].contains("Germany"));
        assert!(rows[1].contains("Population: 83,240,525"));
        assert!(rows[2].contains("Region: Europe"));
        assert!(rows[3].contains("Capital: Germany City"));
    }

    #[test]
    fn test_card_without_capital_shows_not_available() {
        let mut record = country("Antarctica", Region::Antarctic, 1000);
        record.capital.clear();
        let rows = render_card(&record, 36);
        assert!(rows[3].contains("Capital: N/A"));
    }
}
