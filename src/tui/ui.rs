use crate::core::route::Route;
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{CountryGrid, DetailPage, RegionPicker, TitleBar};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};

const LISTING_HELP: &str =
    " Type to search  ←↑↓→ Select  Enter Open  Ctrl+F Region  Ctrl+L More  Home Top  Esc Clear/Quit ";
const DETAIL_HELP: &str = " ←→ Border  Enter Open  Esc Back  Ctrl+C Quit ";

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};
    let full_area = frame.area();
    let [title_area, main_area, help_area] =
        Layout::vertical([Length(1), Min(0), Length(1)]).areas(full_area);

    let on_listing = app.route == Route::Countries;
    let status = if on_listing {
        listing_status(app)
    } else {
        app.status_message.clone()
    };
    TitleBar::new(
        app.route.to_string(),
        status,
        on_listing && app.listing.show_scroll_top(),
    )
    .render(frame, title_area);

    match &app.route {
        Route::Countries => draw_listing(frame, main_area, app, tui),
        Route::Country(name) => {
            DetailPage::new(&tui.detail_page, &app.detail, name, spinner_frame)
                .render(frame, main_area);
        }
    }

    let help = if on_listing { LISTING_HELP } else { DETAIL_HELP };
    frame.render_widget(
        Paragraph::new(help).style(Style::default().fg(Color::DarkGray)),
        help_area,
    );

    if let Some(picker) = tui.region_picker.as_mut() {
        RegionPicker::new(picker, app.listing.search().region).render(frame, full_area);
    }
}

fn listing_status(app: &App) -> String {
    format!(
        "{} of {} countries",
        app.listing.visible_len(),
        app.listing.filtered_len()
    )
}

fn draw_listing(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let [controls_area, grid_area] = Layout::vertical([Length(3), Min(0)]).areas(area);
    let [search_area, region_area] =
        Layout::horizontal([Min(20), Length(26)]).areas(controls_area);

    tui.search_box.render(frame, search_area);

    let region_label = app
        .listing
        .search()
        .region
        .map_or("Filter by Region", |region| region.as_str());
    frame.render_widget(
        Paragraph::new(format!("{region_label} ▾")).block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .title(" Ctrl+F "),
        ),
        region_area,
    );

    let visible = app.listing.visible();
    let remaining = app.listing.filtered_len() - visible.len();
    CountryGrid::new(&mut tui.grid, &visible, remaining).render(frame, grid_area);
}
