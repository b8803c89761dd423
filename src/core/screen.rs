//! # Screens
//!
//! A screen is one navigable unit of content. The navigator only needs its
//! view handle plus a few optional capabilities, all of which have default
//! implementations so a plain screen is just `view()` and `name()`.

use serde_json::{Map, Value};
use std::fmt;

use super::device::Orientation;
use super::surface::ViewId;

/// Arguments passed to a screen when it is created by name.
pub type ScreenArgs = Map<String, Value>;

/// How a screen wants to be shown when it becomes current.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Presentation {
    /// The navigator slides and fades the view in.
    #[default]
    Animated,
    /// The screen presents itself via `Screen::open`; no animation runs.
    SelfPresented,
}

pub trait Screen {
    /// Name the screen was registered under, for diagnostics.
    fn name(&self) -> &str;

    fn view(&self) -> ViewId;

    fn presentation(&self) -> Presentation {
        Presentation::Animated
    }

    /// Called instead of the enter animation when `presentation()` is
    /// `SelfPresented`.
    fn open(&mut self) {}

    /// Called once when the navigator releases the screen.
    fn close(&mut self) {}

    fn handle_orientation(&mut self, _orientation: Orientation) {}

    /// Text a host shows for this screen.
    fn title(&self) -> String {
        self.name().to_string()
    }

    /// Color name a host may paint the screen with.
    fn background(&self) -> Option<&str> {
        None
    }
}

impl fmt::Debug for dyn Screen + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Screen")
            .field("name", &self.name())
            .field("view", &self.view())
            .finish_non_exhaustive()
    }
}

/// What to push: a registered screen name or a ready-made instance.
pub enum ScreenTarget {
    Named(String),
    Instance(Box<dyn Screen>),
}

impl From<&str> for ScreenTarget {
    fn from(name: &str) -> Self {
        ScreenTarget::Named(name.to_string())
    }
}

impl From<String> for ScreenTarget {
    fn from(name: String) -> Self {
        ScreenTarget::Named(name)
    }
}

impl From<Box<dyn Screen>> for ScreenTarget {
    fn from(screen: Box<dyn Screen>) -> Self {
        ScreenTarget::Instance(screen)
    }
}

/// Reads a string argument, falling back to `default` when absent or not a string.
pub fn arg_str<'a>(args: &'a ScreenArgs, key: &str, default: &'a str) -> &'a str {
    args.get(key).and_then(Value::as_str).unwrap_or(default)
}
