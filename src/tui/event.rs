use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use log::warn;
use std::time::Duration;

/// TUI-specific input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    Quit,
    Open,
    Back,
    Home,
    Reset,
    Rotate,
    Resize,
    FocusLost,
    FocusGained,
}

/// Poll for an event with timeout (blocks up to `timeout`)
pub fn poll_event_timeout(timeout: Duration) -> Option<TuiEvent> {
    match event::poll(timeout) {
        Ok(true) => {}
        Ok(false) => return None,
        Err(e) => {
            warn!("Event poll failed: {}", e);
            return None;
        }
    }
    match event::read() {
        Ok(event) => translate(event),
        Err(e) => {
            warn!("Event read failed: {}", e);
            None
        }
    }
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(Duration::ZERO)
}

fn translate(event: Event) -> Option<TuiEvent> {
    match event {
        Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
            log::debug!("Key event: {:?} with modifiers {:?}", key_event.code, key_event.modifiers);
            match (key_event.modifiers, key_event.code) {
                (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::Quit),
                (_, KeyCode::Esc) | (_, KeyCode::Char('q')) => Some(TuiEvent::Quit),
                (_, KeyCode::Enter) | (_, KeyCode::Right) => Some(TuiEvent::Open),
                (_, KeyCode::Left) | (_, KeyCode::Backspace) => Some(TuiEvent::Back),
                (_, KeyCode::Char('h')) => Some(TuiEvent::Home),
                (_, KeyCode::Char('x')) => Some(TuiEvent::Reset),
                (_, KeyCode::Char('o')) => Some(TuiEvent::Rotate),
                _ => None,
            }
        }
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        Event::FocusLost => Some(TuiEvent::FocusLost),
        Event::FocusGained => Some(TuiEvent::FocusGained),
        _ => None,
    }
}
