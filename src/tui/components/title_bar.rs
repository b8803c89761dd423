//! # TitleBar Component
//!
//! Top status bar showing navigation state.
//!
//! ## Responsibilities
//!
//! - Display stack depth and orientation
//! - Display status messages (e.g., "Opened Sub Screen", "Busy, request ignored")
//! - Show a "busy" marker while a transition is in flight
//!
//! ## Conditional Formatting
//!
//! 1. **Busy**: `"navstack [depth 3, portrait] | Back | busy"`
//! 2. **Status message**: `"navstack [depth 3, portrait] | Back"`
//! 3. **Default**: `"navstack [depth 3, portrait]"`

use crate::core::device::Orientation;
use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;

/// Top status bar component. All fields are props.
pub struct TitleBar {
    pub depth: usize,
    pub orientation: Orientation,
    pub status_message: String,
    pub busy: bool,
}

impl TitleBar {
    pub fn new(depth: usize, orientation: Orientation, status_message: String, busy: bool) -> Self {
        Self {
            depth,
            orientation,
            status_message,
            busy,
        }
    }

    fn text(&self) -> String {
        let head = format!("navstack [depth {}, {}]", self.depth, self.orientation);
        match (self.status_message.is_empty(), self.busy) {
            (true, false) => head,
            (true, true) => format!("{head} | busy"),
            (false, false) => format!("{head} | {}", self.status_message),
            (false, true) => format!("{head} | {} | busy", self.status_message),
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Span::raw(self.text()), area);
    }
}
