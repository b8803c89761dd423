//! # Application Context
//!
//! Device state and lifecycle wiring, built once at startup and passed to
//! whatever needs it.
//!
//! ```text
//! AppContext
//! ├── orientation: Orientation      // portrait | landscape
//! ├── display: DisplayMetrics       // dimensions for that orientation
//! ├── online: bool                  // last reported network state
//! └── lifecycle: Lifecycle          // subscribers for app events
//! ```

use log::{debug, info};

use super::config::ResolvedConfig;
use super::device::{DeviceOrientation, DisplayMetrics, Orientation};
use super::lifecycle::{Lifecycle, LifecycleEvent};

pub struct AppContext {
    pub orientation: Orientation,
    pub display: DisplayMetrics,
    pub online: bool,
    pub lifecycle: Lifecycle,
}

impl AppContext {
    pub fn new(display: DisplayMetrics, orientation: Orientation) -> Self {
        Self {
            orientation,
            display,
            online: true,
            lifecycle: Lifecycle::new(),
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        let display = DisplayMetrics::new(
            config.platform,
            config.display_width,
            config.display_height,
            config.display_dpi,
            config.orientation,
        );
        Self::new(display, config.orientation)
    }

    /// Apply a raw sensor reading. Ignored readings return `None` and change
    /// nothing; otherwise dimensions are recomputed and subscribers hear
    /// `OrientationChanged`.
    pub fn orientation_change(&mut self, reading: DeviceOrientation) -> Option<Orientation> {
        let Some(orientation) = reading.resolve() else {
            debug!("Ignoring orientation reading {:?}", reading);
            return None;
        };
        self.orientation = orientation;
        self.display.reorient(orientation);
        info!(
            "Orientation now {} ({}x{})",
            orientation, self.display.width, self.display.height
        );
        self.lifecycle
            .emit(LifecycleEvent::OrientationChanged(orientation));
        Some(orientation)
    }

    pub fn network_change(&mut self, online: bool) {
        self.online = online;
        self.lifecycle.emit(LifecycleEvent::NetworkChanged { online });
    }

    pub fn pause(&mut self) {
        self.lifecycle.emit(LifecycleEvent::Pause);
    }

    pub fn resume(&mut self) {
        self.lifecycle.emit(LifecycleEvent::Resumed);
    }

    pub fn close(&mut self) {
        self.lifecycle.emit(LifecycleEvent::Close);
    }
}
