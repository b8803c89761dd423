//! # TUI Components
//!
//! Stateless components. Each one receives everything it draws as props
//! (struct fields) and renders into the `Rect` it is given.
//!
//! - `TitleBar`: one-line status bar with stack depth, orientation and busy marker
//! - `ScreenCard`: one screen drawn at its current animation keyframe

pub mod screen_card;
pub mod title_bar;

pub use screen_card::ScreenCard;
pub use title_bar::TitleBar;
