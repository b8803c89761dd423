//! # Terminal Surface
//!
//! A `Surface` that keeps every attached view's current `Keyframe` and
//! advances animations against a clock the event loop moves forward with
//! `tick()`. Rendering reads `layers()`; it never touches the navigator.
//!
//! Views are drawn in attach order, so the most recently attached view is
//! on top. Attaching a view again moves it to the top.

use log::debug;
use std::collections::BTreeMap;
use std::time::Instant;

use crate::core::surface::{Surface, TransitionId, ViewId};
use crate::core::transition::{AnimationSpec, Keyframe};

#[derive(Debug, Clone, Copy)]
struct Layer {
    frame: Keyframe,
    z: u64,
}

#[derive(Debug)]
struct Running {
    ticket: TransitionId,
    view: ViewId,
    start: Keyframe,
    spec: AnimationSpec,
    started_at: Instant,
}

pub struct TerminalSurface {
    width: f32,
    layers: BTreeMap<ViewId, Layer>,
    running: Vec<Running>,
    finished: Vec<TransitionId>,
    clock: Instant,
    next_z: u64,
}

impl TerminalSurface {
    pub fn new(width: f32) -> Self {
        Self::starting_at(width, Instant::now())
    }

    pub fn starting_at(width: f32, clock: Instant) -> Self {
        Self {
            width,
            layers: BTreeMap::new(),
            running: Vec::new(),
            finished: Vec::new(),
            clock,
            next_z: 0,
        }
    }

    pub fn set_width(&mut self, width: f32) {
        self.width = width;
    }

    pub fn is_animating(&self) -> bool {
        !self.running.is_empty()
    }

    /// Attached views bottom to top, with their current keyframes.
    pub fn layers(&self) -> Vec<(ViewId, Keyframe)> {
        let mut layers: Vec<(ViewId, Layer)> = self.layers.iter().map(|(v, l)| (*v, *l)).collect();
        layers.sort_by_key(|(_, layer)| layer.z);
        layers.into_iter().map(|(view, layer)| (view, layer.frame)).collect()
    }

    /// Move the clock to `now` and advance every running animation.
    pub fn tick(&mut self, now: Instant) {
        if now > self.clock {
            self.clock = now;
        }

        let clock = self.clock;
        let mut still_running = Vec::with_capacity(self.running.len());
        for anim in self.running.drain(..) {
            let elapsed = clock.saturating_duration_since(anim.started_at);
            let progress = if anim.spec.duration.is_zero() {
                1.0
            } else {
                elapsed.as_secs_f32() / anim.spec.duration.as_secs_f32()
            };
            let frame = anim.start.lerp(&anim.spec.to, anim.spec.curve.apply(progress));

            // A detached view keeps animating off-screen until its ticket is reported
            if let Some(layer) = self.layers.get_mut(&anim.view) {
                layer.frame = frame;
            }

            if progress >= 1.0 {
                debug!("{} finished on {}", anim.ticket, anim.view);
                self.finished.push(anim.ticket);
            } else {
                still_running.push(anim);
            }
        }
        self.running = still_running;
    }
}

impl Surface for TerminalSurface {
    fn width(&self) -> f32 {
        self.width
    }

    fn attach(&mut self, view: ViewId) {
        self.next_z += 1;
        let z = self.next_z;
        self.layers
            .entry(view)
            .and_modify(|layer| layer.z = z)
            .or_insert(Layer {
                frame: Keyframe::RESTING,
                z,
            });
    }

    fn detach(&mut self, view: ViewId) {
        self.layers.remove(&view);
    }

    fn animate(&mut self, view: ViewId, spec: AnimationSpec, ticket: TransitionId) {
        let current = self
            .layers
            .get(&view)
            .map(|layer| layer.frame)
            .unwrap_or_default();
        let start = spec.from.unwrap_or(current);
        if let Some(layer) = self.layers.get_mut(&view) {
            layer.frame = start;
        }
        self.running.push(Running {
            ticket,
            view,
            start,
            spec,
            started_at: self.clock,
        });
    }

    fn poll_completed(&mut self) -> Vec<TransitionId> {
        std::mem::take(&mut self.finished)
    }
}
