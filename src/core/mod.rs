//! # Core Application Logic
//!
//! Screen navigation and app state. It knows nothing about any specific UI
//! technology: drawing happens behind the `Surface` trait.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Navigator (stack)    │
//!                    │  • App + AppContext     │
//!                    │  • Action / update()    │
//!                    │                         │
//!                    │  No terminal I/O.       │
//!                    └───────────┬─────────────┘
//!                                │ Surface / ScreenFactory
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │   Tests    │      │   Other    │
//!     │  Surface   │      │ Recording  │      │   hosts    │
//!     │ (ratatui)  │      │  Surface   │      │            │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`navigator`]: the screen stack and its transitions
//! - [`transition`]: animation descriptions handed to a surface
//! - [`surface`] / [`factory`] / [`screen`]: the navigator's collaborators
//! - [`state`]: the `App` struct, all demo state in one place
//! - [`action`]: the `Action` enum, everything that can happen in the app

pub mod action;
pub mod config;
pub mod context;
pub mod device;
pub mod factory;
pub mod lifecycle;
pub mod navigator;
pub mod screen;
pub mod screens;
pub mod state;
pub mod surface;
pub mod transition;

pub use factory::{ResolutionError, ScreenFactory, ScreenRegistry};
pub use navigator::{Navigator, OnComplete, Operation, completion_signal};
pub use screen::{Presentation, Screen, ScreenArgs, ScreenTarget};
pub use surface::{Surface, TransitionId, ViewId};
