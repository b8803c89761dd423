//! # Actions
//!
//! Everything that can happen in the app becomes an `Action`.
//! User presses Enter? That's `Action::OpenNext`.
//! An animation finished? That's `Action::TransitionsFinished`.
//!
//! `update()` applies an action to the app and returns an `Effect` telling
//! the host what to do next. Terminal I/O happens elsewhere.
//!
//! ```text
//! App + Action  →  update()  →  Effect
//! ```

use log::{debug, warn};

use crate::core::device::DeviceOrientation;
use crate::core::screen::ScreenArgs;
use crate::core::state::App;
use crate::core::surface::Surface;

#[derive(Debug, Clone)]
pub enum Action {
    /// Push a registered screen by name.
    Open { screen: String, args: ScreenArgs },
    /// Push the next sub screen card.
    OpenNext,
    Back,
    Home,
    /// Drop every screen and start again from home.
    Reset,
    /// Flip between portrait and landscape.
    Rotate,
    Orientation(DeviceOrientation),
    Network { online: bool },
    Pause,
    Resume,
    /// Let the navigator collect finished animations.
    TransitionsFinished,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

pub fn update<S: Surface>(app: &mut App<S>, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::Open { screen, args } => {
            open(app, &screen, &args);
        }
        Action::OpenNext => {
            let args = app.next_card_args();
            if open(app, crate::core::screens::CARD_SCREEN, &args) {
                app.opened += 1;
            }
        }
        Action::Back => {
            if app.navigator.is_busy() {
                app.status_message = String::from("Busy, request ignored");
            } else {
                app.navigator.pop(None);
                app.status_message = String::from("Back");
            }
        }
        Action::Home => {
            if app.navigator.is_busy() {
                app.status_message = String::from("Busy, request ignored");
            } else {
                app.navigator.close_to_home(None);
                app.status_message = String::from("Home");
            }
        }
        Action::Reset => {
            // Reopening home is a push, which a running transition would drop
            if app.navigator.is_busy() {
                app.status_message = String::from("Busy, request ignored");
                return Effect::None;
            }
            app.navigator.close_all();
            app.opened = 0;
            match app.open_home() {
                Ok(()) => app.status_message = String::from("Reset"),
                Err(e) => {
                    warn!("Failed to reopen home: {}", e);
                    app.status_message = format!("Reset failed: {e}");
                }
            }
        }
        Action::Rotate => {
            let next = app.context.orientation.toggled();
            rotate(app, DeviceOrientation::from(next));
        }
        Action::Orientation(reading) => rotate(app, reading),
        Action::Network { online } => {
            app.context.network_change(online);
            app.status_message = if online {
                String::from("Online")
            } else {
                String::from("Offline")
            };
        }
        Action::Pause => app.context.pause(),
        Action::Resume => app.context.resume(),
        Action::TransitionsFinished => {
            app.navigator.pump();
        }
        Action::Quit => {
            app.context.close();
            return Effect::Quit;
        }
    }
    Effect::None
}

/// Returns `true` if a screen was pushed.
fn open<S: Surface>(app: &mut App<S>, screen: &str, args: &ScreenArgs) -> bool {
    match app.navigator.push(screen, args) {
        Ok(Some(pushed)) => {
            app.status_message = format!("Opened {}", pushed.title());
            true
        }
        Ok(None) => {
            app.status_message = String::from("Busy, request ignored");
            false
        }
        Err(e) => {
            warn!("Failed to open screen: {}", e);
            app.status_message = e.to_string();
            false
        }
    }
}

fn rotate<S: Surface>(app: &mut App<S>, reading: DeviceOrientation) {
    if let Some(orientation) = app.context.orientation_change(reading) {
        app.navigator.broadcast_orientation(orientation);
        app.status_message = format!("Orientation: {orientation}");
    }
}
