//! # Surface
//!
//! The visual container screens are attached to. The navigator never draws
//! anything itself; it only tells a `Surface` what to attach, detach, and
//! animate, and later learns which animations finished.
//!
//! ```text
//! Navigator ──attach/detach/animate(ticket)──▶ Surface
//!     ▲                                          │
//!     └──────── complete(ticket) / pump() ◀──────┘
//! ```
//!
//! Completion is ticket-based: `animate` receives a `TransitionId` and the
//! host hands that id back once the animation is done, either directly via
//! `Navigator::complete` or by letting `Navigator::pump` drain
//! `poll_completed`.

use std::fmt;

use super::transition::AnimationSpec;

/// Identity of a screen's visual handle on a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ViewId(pub u64);

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "view#{}", self.0)
    }
}

/// Ticket for one running animation. Allocated by the navigator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TransitionId(pub u64);

impl fmt::Display for TransitionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "transition#{}", self.0)
    }
}

pub trait Surface {
    /// Content width, used to place views just past the left or right edge.
    fn width(&self) -> f32;

    /// Add a view. Attaching an already attached view keeps it attached.
    fn attach(&mut self, view: ViewId);

    /// Remove a view. Detaching a view that is not attached is a no-op.
    fn detach(&mut self, view: ViewId);

    /// Start an animation. The surface must eventually report `ticket` as
    /// completed, exactly once.
    fn animate(&mut self, view: ViewId, spec: AnimationSpec, ticket: TransitionId);

    /// Tickets whose animations finished since the last call.
    fn poll_completed(&mut self) -> Vec<TransitionId> {
        Vec::new()
    }
}
