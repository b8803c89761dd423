//! # Device Metrics
//!
//! Orientation state and display dimensions.
//!
//! Sensors report more orientations than the app cares about: face-up,
//! face-down and unknown readings are ignored, everything else collapses to
//! portrait or landscape. Width and height always follow the orientation
//! (portrait: width is the short side).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Baseline density for density-independent units.
pub const BASELINE_DPI: f32 = 160.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

impl Orientation {
    pub fn toggled(self) -> Self {
        match self {
            Orientation::Portrait => Orientation::Landscape,
            Orientation::Landscape => Orientation::Portrait,
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Portrait => write!(f, "portrait"),
            Orientation::Landscape => write!(f, "landscape"),
        }
    }
}

/// Raw reading from an orientation sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceOrientation {
    Portrait,
    UpsideDown,
    LandscapeLeft,
    LandscapeRight,
    FaceUp,
    FaceDown,
    Unknown,
}

impl DeviceOrientation {
    /// The app-level orientation, or `None` for readings that are ignored.
    pub fn resolve(self) -> Option<Orientation> {
        match self {
            DeviceOrientation::Portrait | DeviceOrientation::UpsideDown => {
                Some(Orientation::Portrait)
            }
            DeviceOrientation::LandscapeLeft | DeviceOrientation::LandscapeRight => {
                Some(Orientation::Landscape)
            }
            DeviceOrientation::FaceUp | DeviceOrientation::FaceDown | DeviceOrientation::Unknown => {
                None
            }
        }
    }
}

impl From<Orientation> for DeviceOrientation {
    fn from(orientation: Orientation) -> Self {
        match orientation {
            Orientation::Portrait => DeviceOrientation::Portrait,
            Orientation::Landscape => DeviceOrientation::LandscapeLeft,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[default]
    Ios,
    Android,
}

/// Display dimensions as the app sees them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayMetrics {
    pub platform: Platform,
    /// Physical panel size in pixels, in whatever order the platform reports.
    pub platform_width: f32,
    pub platform_height: f32,
    pub dpi: f32,
    /// Width for the current orientation (density-independent on Android).
    pub width: f32,
    /// Height for the current orientation (density-independent on Android).
    pub height: f32,
}

impl DisplayMetrics {
    pub fn new(
        platform: Platform,
        platform_width: f32,
        platform_height: f32,
        dpi: f32,
        orientation: Orientation,
    ) -> Self {
        let mut metrics = Self {
            platform,
            platform_width,
            platform_height,
            dpi,
            width: 0.0,
            height: 0.0,
        };
        metrics.reorient(orientation);
        metrics
    }

    /// Recompute `width`/`height` for `orientation`.
    pub fn reorient(&mut self, orientation: Orientation) {
        let short = self.platform_width.min(self.platform_height);
        let long = self.platform_width.max(self.platform_height);
        let (width, height) = match orientation {
            Orientation::Portrait => (short, long),
            Orientation::Landscape => (long, short),
        };
        self.width = width;
        self.height = height;

        if self.platform == Platform::Android && self.dpi > 0.0 {
            let density = self.dpi / BASELINE_DPI;
            self.width /= density;
            self.height /= density;
        }
    }
}
