//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop redraws only when something changed:
//!
//! - **Loading** (details fetch in flight): draws every ~80ms for the spinner.
//! - **Idle**: sleeps up to 500ms, only redraws on events, background
//!   results, or terminal resize.
//!
//! ## Scroll Reporting
//!
//! The grid clamps its scroll offset while rendering, so the offset is read
//! back after each draw and forwarded to the listing as
//! `ListingEvent::Scrolled` whenever it moved.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::api::{CountryRecord, CountrySource};
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::detail::unresolved_borders;
use crate::core::listing::ListingEvent;
use crate::core::route::Route;
use crate::core::state::{App, DetailState};
use crate::tui::component::EventHandler;
use crate::tui::components::{
    CountryGridState, DetailEvent, DetailPageState, GridEvent, RegionPickerEvent,
    RegionPickerState, SearchBox, SearchEvent,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub search_box: SearchBox,
    pub grid: CountryGridState,
    pub detail_page: DetailPageState,
    /// Region picker overlay (None = hidden)
    pub region_picker: Option<RegionPickerState>,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            search_box: SearchBox::new(),
            grid: CountryGridState::new(),
            detail_page: DetailPageState::new(),
            region_picker: None,
        }
    }

    /// Refresh component props from the core state.
    pub fn sync(&mut self, app: &App) {
        self.search_box.dimmed = self.region_picker.is_some();
        if self.search_box.buffer != app.listing.search().input {
            self.search_box.buffer = app.listing.search().input.clone();
        }
        self.grid
            .sync(app.listing.visible_len(), app.listing.has_more());
        self.detail_page.sync(&app.detail);
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture, EnableBracketedPaste)?;
        info!("Terminal modes enabled (mouse, bracketed paste)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, DisableBracketedPaste);
    }
}

/// Runs the interactive browser over an already fetched dataset until quit.
pub fn run(
    source: Arc<dyn CountrySource>,
    dataset: Vec<CountryRecord>,
    config: ResolvedConfig,
) -> std::io::Result<()> {
    let mut app = App::new(source, Arc::new(dataset), &config);
    let mut tui = TuiState::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    if let Effect::FetchDetail(name) = apply(&mut app, &mut tui, Action::Navigate(config.route))
    {
        spawn_detail_fetch(app.source.clone(), name, tx.clone());
    }

    let mut terminal = ratatui::init();
    let result = TerminalModeGuard::new()
        .and_then(|_guard| event_loop(&mut terminal, &mut app, &mut tui, &tx, &rx));
    ratatui::restore();
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    app: &mut App,
    tui: &mut TuiState,
    tx: &mpsc::Sender<Action>,
    rx: &mpsc::Receiver<Action>,
) -> std::io::Result<()> {
    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        tui.sync(app);

        let animating = matches!(app.detail, DetailState::Loading);
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, app, tui, spinner_frame))?;
            needs_redraw = false;

            if app.route == Route::Countries
                && let Some(units) = tui.grid.take_scroll_change()
            {
                update(app, Action::Listing(ListingEvent::Scrolled(units)));
                needs_redraw = true;
            }
        }

        // Dynamic poll timeout: short when animating (~12fps), long when idle
        let timeout = if animating {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(event, TuiEvent::Resize) {
                continue;
            }
            tui.sync(app);
            match dispatch(app, tui, event) {
                Effect::Quit => {
                    should_quit = true;
                    break;
                }
                Effect::FetchDetail(name) => {
                    spawn_detail_fetch(app.source.clone(), name, tx.clone());
                }
                Effect::None => {}
            }
        }

        if should_quit {
            break;
        }

        // Handle background task actions (details responses)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received action");
            if let Effect::FetchDetail(name) = apply(app, tui, action) {
                spawn_detail_fetch(app.source.clone(), name, tx.clone());
            }
        }
    }

    Ok(())
}

/// Run an action through the reducer and bring presentation state along.
fn apply(app: &mut App, tui: &mut TuiState, action: Action) -> Effect {
    let resets_view = matches!(
        action,
        Action::Listing(ListingEvent::SearchChanged(_) | ListingEvent::RegionChanged(_))
            | Action::Navigate(_)
            | Action::GoBack
    );
    let effect = update(app, action);
    if resets_view {
        tui.grid.reset();
        tui.detail_page = DetailPageState::new();
    }
    tui.sync(app);
    effect
}

/// Route one terminal event to the overlay or the page that owns it.
fn dispatch(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> Effect {
    // ForceQuit (Ctrl+C) always quits regardless of page
    if matches!(event, TuiEvent::ForceQuit) {
        return update(app, Action::Quit);
    }

    // When the region picker is open, route all events to it
    if let Some(picker) = tui.region_picker.as_mut() {
        match picker.handle_event(&event) {
            Some(RegionPickerEvent::Select(region)) => {
                tui.region_picker = None;
                return apply(
                    app,
                    tui,
                    Action::Listing(ListingEvent::RegionChanged(region)),
                );
            }
            Some(RegionPickerEvent::Dismiss) => tui.region_picker = None,
            None => {}
        }
        return Effect::None;
    }

    match app.route {
        Route::Countries => dispatch_listing(app, tui, event),
        Route::Country(_) => dispatch_detail(app, tui, event),
    }
}

fn dispatch_listing(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> Effect {
    match event {
        // Esc peels back one filter at a time, then quits
        TuiEvent::Escape => {
            let has_text = !app.listing.search().input.is_empty();
            let has_region = app.listing.search().region.is_some();
            if has_text {
                apply(
                    app,
                    tui,
                    Action::Listing(ListingEvent::SearchChanged(String::new())),
                )
            } else if has_region {
                apply(app, tui, Action::Listing(ListingEvent::RegionChanged(None)))
            } else {
                update(app, Action::Quit)
            }
        }
        TuiEvent::OpenRegionPicker => {
            tui.region_picker = Some(RegionPickerState::new(app.listing.search().region));
            Effect::None
        }
        TuiEvent::LoadMore => apply(app, tui, Action::Listing(ListingEvent::LoadMore)),
        _ => {
            if let Some(SearchEvent::Changed(text)) = tui.search_box.handle_event(&event) {
                return apply(app, tui, Action::Listing(ListingEvent::SearchChanged(text)));
            }
            match tui.grid.handle_event(&event) {
                Some(GridEvent::LoadMore) => {
                    let effect = apply(app, tui, Action::Listing(ListingEvent::LoadMore));
                    tui.grid.move_down();
                    effect
                }
                Some(GridEvent::Open(index)) => {
                    let name = app
                        .listing
                        .visible()
                        .get(index)
                        .map(|country| country.name.common.clone());
                    match name {
                        Some(name) => apply(app, tui, Action::Navigate(Route::Country(name))),
                        None => Effect::None,
                    }
                }
                None => Effect::None,
            }
        }
    }
}

fn dispatch_detail(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> Effect {
    match tui.detail_page.handle_event(&event) {
        Some(DetailEvent::Back) => apply(app, tui, Action::GoBack),
        Some(DetailEvent::Open(name)) => apply(app, tui, Action::Navigate(Route::Country(name))),
        None => Effect::None,
    }
}

/// Fetch a country's details and resolve its border names off the UI thread.
/// A failed border lookup still delivers the details, with bare codes.
fn spawn_detail_fetch(source: Arc<dyn CountrySource>, name: String, tx: mpsc::Sender<Action>) {
    info!("Spawning details fetch for {} via {}", name, source.name());
    tokio::spawn(async move {
        let result = match source.fetch_detail(&name).await {
            Ok(detail) => {
                let borders = match source.resolve_borders(&detail.borders).await {
                    Ok(borders) => borders,
                    Err(e) => {
                        warn!("Border lookup for {} failed: {}", name, e);
                        unresolved_borders(&detail.borders)
                    }
                };
                Ok((detail, borders))
            }
            Err(e) => Err(e.to_string()),
        };
        if tx.send(Action::DetailLoaded { name: name.clone(), result }).is_err() {
            warn!("Failed to send details for {}: receiver dropped", name);
        }
    });
}
