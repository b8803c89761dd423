//! # TUI Adapter
//!
//! The ratatui-specific layer. Owns the terminal, draws the screen stack,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm. The
//! navigator only sees `TerminalSurface` through the `Surface` trait.
//!
//! ## Redraw Strategy
//!
//! - **Animating**: the surface has running transitions, so the loop ticks
//!   and draws every ~16ms.
//! - **Idle**: sleeps up to 500ms, only redraws on events or resize.
//!
//! Every iteration ticks the surface and feeds finished transitions back to
//! the navigator with `Action::TransitionsFinished`, so completions land
//! even when no key is pressed.

mod component;
mod components;
mod event;
pub mod surface;
mod ui;

use log::{info, warn};
use std::io::stdout;
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableFocusChange, EnableFocusChange};
use crossterm::execute;
use ratatui::layout::Rect;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::surface::TerminalSurface;

const FRAME_INTERVAL: Duration = Duration::from_millis(16);
const IDLE_INTERVAL: Duration = Duration::from_millis(500);

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableFocusChange, Hide)?;
        info!("Terminal modes enabled (focus change, hidden cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableFocusChange, Show);
    }
}

fn action_for(event: TuiEvent) -> Option<Action> {
    match event {
        TuiEvent::Quit => Some(Action::Quit),
        TuiEvent::Open => Some(Action::OpenNext),
        TuiEvent::Back => Some(Action::Back),
        TuiEvent::Home => Some(Action::Home),
        TuiEvent::Reset => Some(Action::Reset),
        TuiEvent::Rotate => Some(Action::Rotate),
        TuiEvent::FocusLost => Some(Action::Pause),
        TuiEvent::FocusGained => Some(Action::Resume),
        TuiEvent::Resize => None,
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut terminal = ratatui::init();
    let _terminal_mode_guard = match TerminalModeGuard::new() {
        Ok(guard) => Some(guard),
        Err(e) => {
            warn!("Failed to enable terminal modes: {}", e);
            None
        }
    };

    let stage = ui::stage_area(terminal.get_frame().area());
    let mut app = App::from_config(TerminalSurface::new(f32::from(stage.width)), &config);
    if let Err(e) = app.open_home() {
        warn!("Failed to open home screen: {}", e);
        app.status_message = e.to_string();
    }

    let mut needs_redraw = true;

    loop {
        app.navigator.surface_mut().tick(Instant::now());
        update(&mut app, Action::TransitionsFinished);

        let animating = app.navigator.surface().is_animating();
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app))?;
            needs_redraw = false;
        }

        let timeout = if animating { FRAME_INTERVAL } else { IDLE_INTERVAL };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if matches!(event, TuiEvent::Resize) {
                match terminal.size() {
                    Ok(size) => {
                        let stage = ui::stage_area(Rect::new(0, 0, size.width, size.height));
                        app.navigator.surface_mut().set_width(f32::from(stage.width));
                    }
                    Err(e) => warn!("Failed to read terminal size: {}", e),
                }
                continue;
            }
            let Some(action) = action_for(event) else {
                continue;
            };
            if update(&mut app, action) == Effect::Quit {
                should_quit = true;
                break;
            }
        }

        if should_quit {
            break;
        }
    }

    info!("Shutting down with {} screens open", app.navigator.depth());
    ratatui::restore();
    Ok(())
}
