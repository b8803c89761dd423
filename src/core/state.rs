//! # Application State
//!
//! Core state for the demo app. No terminal types live here; the surface is
//! a type parameter so tests can drive the same state with a recording
//! surface.
//!
//! ```text
//! App<S>
//! ├── context: AppContext                       // device + lifecycle
//! ├── navigator: Navigator<ScreenRegistry, S>   // the screen stack
//! ├── status_message: String                    // status bar text
//! ├── home_text: String                         // label of the home card
//! ├── palette: Vec<String>                      // colors new cards cycle through
//! └── opened: usize                             // cards opened so far
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use log::info;
use serde_json::Value;
use std::time::Duration;

use crate::core::config::ResolvedConfig;
use crate::core::context::AppContext;
use crate::core::factory::{ResolutionError, ScreenRegistry};
use crate::core::navigator::Navigator;
use crate::core::screen::ScreenArgs;
use crate::core::screens::{CARD_SCREEN, default_registry};
use crate::core::surface::Surface;

pub struct App<S: Surface> {
    pub context: AppContext,
    pub navigator: Navigator<ScreenRegistry, S>,
    pub status_message: String,
    pub home_text: String,
    pub palette: Vec<String>,
    pub opened: usize,
}

impl<S: Surface> App<S> {
    pub fn from_config(surface: S, config: &ResolvedConfig) -> Self {
        let navigator = Navigator::new(default_registry(), surface)
            .with_transition_duration(Duration::from_millis(config.transition_ms));
        Self {
            context: AppContext::from_config(config),
            navigator,
            status_message: String::from("Welcome to navstack!"),
            home_text: config.home_text.clone(),
            palette: config.palette.clone(),
            opened: 0,
        }
    }

    /// Push the home card. Called once at startup and after a reset.
    pub fn open_home(&mut self) -> Result<(), ResolutionError> {
        let args = card_args(&self.home_text, "white");
        self.navigator.push(CARD_SCREEN, &args)?;
        info!("Home screen opened");
        Ok(())
    }

    /// Arguments for the next sub screen, cycling through the palette.
    pub fn next_card_args(&self) -> ScreenArgs {
        let color = self
            .palette
            .get(self.opened % self.palette.len().max(1))
            .map(String::as_str)
            .unwrap_or("white");
        card_args("Sub Screen", color)
    }
}

pub fn card_args(text: &str, background_color: &str) -> ScreenArgs {
    let mut args = ScreenArgs::new();
    args.insert("text".to_string(), Value::from(text));
    args.insert("background_color".to_string(), Value::from(background_color));
    args
}
