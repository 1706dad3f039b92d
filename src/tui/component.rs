use ratatui::Frame;
use ratatui::layout::Rect;

/// A piece of the screen that draws itself.
///
/// Components receive data as props (struct fields), may borrow persistent
/// state (`&mut State` fields), and render to a `Frame` within a given `Rect`.
///
/// `render` takes `&mut self` so a component can update the state it
/// borrows while drawing (scroll clamping, cached column counts), the same
/// way ratatui's `StatefulWidget` does.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// Persistent component state that turns terminal events into its own
/// higher-level events.
pub trait EventHandler {
    /// The type of high-level event this component emits.
    type Event;

    /// Handle a low-level `TuiEvent` and optionally return a high-level event.
    fn handle_event(&mut self, event: &super::event::TuiEvent) -> Option<Self::Event>;
}
