//! # Built-in Screens
//!
//! The screens the demo ships with:
//!
//! - `"screen"`: a colored card showing a line of text. Arguments:
//!   `text` (default "Unnamed Screen") and `background_color`
//!   (default "white").
//! - `"main"`: presents itself without the enter animation and tracks the
//!   current orientation.

use log::debug;

use super::device::Orientation;
use super::factory::ScreenRegistry;
use super::screen::{Presentation, Screen, ScreenArgs, arg_str};
use super::surface::ViewId;

pub const CARD_SCREEN: &str = "screen";
pub const MAIN_SCREEN: &str = "main";

pub struct CardScreen {
    view: ViewId,
    text: String,
    background: String,
}

impl CardScreen {
    pub fn from_args(view: ViewId, args: &ScreenArgs) -> Self {
        Self {
            view,
            text: arg_str(args, "text", "Unnamed Screen").to_string(),
            background: arg_str(args, "background_color", "white").to_string(),
        }
    }
}

impl Screen for CardScreen {
    fn name(&self) -> &str {
        CARD_SCREEN
    }

    fn view(&self) -> ViewId {
        self.view
    }

    fn title(&self) -> String {
        self.text.clone()
    }

    fn background(&self) -> Option<&str> {
        Some(&self.background)
    }
}

pub struct MainScreen {
    view: ViewId,
    opened: bool,
    orientation: Option<Orientation>,
}

impl MainScreen {
    pub fn new(view: ViewId) -> Self {
        Self {
            view,
            opened: false,
            orientation: None,
        }
    }
}

impl Screen for MainScreen {
    fn name(&self) -> &str {
        MAIN_SCREEN
    }

    fn view(&self) -> ViewId {
        self.view
    }

    fn presentation(&self) -> Presentation {
        Presentation::SelfPresented
    }

    fn open(&mut self) {
        self.opened = true;
    }

    fn handle_orientation(&mut self, orientation: Orientation) {
        debug!("main screen: {}", orientation);
        self.orientation = Some(orientation);
    }

    fn title(&self) -> String {
        match (self.opened, self.orientation) {
            (false, _) => "Main".to_string(),
            (true, None) => "Main (open)".to_string(),
            (true, Some(orientation)) => format!("Main ({orientation})"),
        }
    }
}

/// Registry with every built-in screen.
pub fn default_registry() -> ScreenRegistry {
    let mut registry = ScreenRegistry::new();
    registry.register(CARD_SCREEN, |view, args| Ok(Box::new(CardScreen::from_args(view, args))));
    registry.register(MAIN_SCREEN, |view, _args| Ok(Box::new(MainScreen::new(view))));
    registry
}
