//! # Transitions
//!
//! Animation descriptions the navigator hands to a `Surface`.
//!
//! Every transition is a move between two `Keyframe`s over a fixed duration:
//!
//! | Transition  | From                          | To                             |
//! |-------------|-------------------------------|--------------------------------|
//! | enter(dir)  | opacity 0, offset ±width      | opacity 1, offset 0            |
//! | exit(dir)   | (wherever the view is)        | opacity 0, offset ±width       |
//! | disappear   | (wherever the view is)        | opacity 0, scale 0             |
//! | hold        | (wherever the view is)        | resting                        |
//!
//! `Left` always means negative offset, `Right` positive.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default transition length in milliseconds.
pub const DEFAULT_TRANSITION_MS: u64 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Offset of the surface edge on this side.
    pub fn edge_offset(self, width: f32) -> f32 {
        match self {
            Direction::Left => -width,
            Direction::Right => width,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionKind {
    Enter(Direction),
    Exit(Direction),
    Disappear,
    Hold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Curve {
    #[default]
    Linear,
    EaseIn,
}

impl Curve {
    /// Maps linear progress `t` in `[0, 1]` onto the curve.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Curve::Linear => t,
            Curve::EaseIn => t * t,
        }
    }
}

/// Visual state of a view at one point of an animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keyframe {
    pub opacity: f32,
    /// Horizontal offset from the resting position, in surface units.
    pub offset_x: f32,
    pub scale: f32,
}

impl Keyframe {
    /// Fully visible, in place, unscaled.
    pub const RESTING: Keyframe = Keyframe {
        opacity: 1.0,
        offset_x: 0.0,
        scale: 1.0,
    };

    pub fn lerp(&self, to: &Keyframe, t: f32) -> Keyframe {
        let mix = |a: f32, b: f32| a + (b - a) * t;
        Keyframe {
            opacity: mix(self.opacity, to.opacity),
            offset_x: mix(self.offset_x, to.offset_x),
            scale: mix(self.scale, to.scale),
        }
    }
}

impl Default for Keyframe {
    fn default() -> Self {
        Keyframe::RESTING
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnimationSpec {
    pub kind: TransitionKind,
    /// Applied to the view before the animation starts. `None` animates from
    /// wherever the view currently is.
    pub from: Option<Keyframe>,
    pub to: Keyframe,
    pub duration: Duration,
    pub curve: Curve,
}

impl AnimationSpec {
    /// Slide in from the `direction` edge while fading in.
    pub fn enter(direction: Direction, width: f32, duration: Duration) -> Self {
        Self {
            kind: TransitionKind::Enter(direction),
            from: Some(Keyframe {
                opacity: 0.0,
                offset_x: direction.edge_offset(width),
                scale: 1.0,
            }),
            to: Keyframe::RESTING,
            duration,
            curve: Curve::Linear,
        }
    }

    /// Slide out towards the `direction` edge while fading out.
    pub fn exit(direction: Direction, width: f32, duration: Duration) -> Self {
        Self {
            kind: TransitionKind::Exit(direction),
            from: None,
            to: Keyframe {
                opacity: 0.0,
                offset_x: direction.edge_offset(width),
                scale: 1.0,
            },
            duration,
            curve: Curve::Linear,
        }
    }

    /// Shrink to nothing in place while fading out.
    pub fn disappear(duration: Duration) -> Self {
        Self {
            kind: TransitionKind::Disappear,
            from: None,
            to: Keyframe {
                opacity: 0.0,
                offset_x: 0.0,
                scale: 0.0,
            },
            duration,
            curve: Curve::EaseIn,
        }
    }

    /// Keep the view at rest for `duration`.
    pub fn hold(duration: Duration) -> Self {
        Self {
            kind: TransitionKind::Hold,
            from: None,
            to: Keyframe::RESTING,
            duration,
            curve: Curve::Linear,
        }
    }
}
