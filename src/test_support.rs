//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::cell::{Cell, RefCell};
use std::collections::BTreeSet;
use std::rc::Rc;

use crate::core::device::Orientation;
use crate::core::factory::ScreenRegistry;
use crate::core::navigator::Navigator;
use crate::core::screen::{Presentation, Screen};
use crate::core::surface::{Surface, TransitionId, ViewId};
use crate::core::transition::AnimationSpec;

/// Counters a `TestScreen` updates, readable after the screen has been
/// moved onto the stack.
#[derive(Debug, Default)]
pub struct ScreenProbe {
    pub opened: Cell<usize>,
    pub closed: Cell<usize>,
    pub orientation: Cell<Option<Orientation>>,
}

pub struct TestScreen {
    name: String,
    view: ViewId,
    presentation: Presentation,
    pub probe: Rc<ScreenProbe>,
}

impl TestScreen {
    pub fn new(name: &str, view: ViewId) -> Self {
        Self {
            name: name.to_string(),
            view,
            presentation: Presentation::Animated,
            probe: Rc::new(ScreenProbe::default()),
        }
    }

    pub fn self_presented(mut self) -> Self {
        self.presentation = Presentation::SelfPresented;
        self
    }
}

impl Screen for TestScreen {
    fn name(&self) -> &str {
        &self.name
    }

    fn view(&self) -> ViewId {
        self.view
    }

    fn presentation(&self) -> Presentation {
        self.presentation
    }

    fn open(&mut self) {
        self.probe.opened.set(self.probe.opened.get() + 1);
    }

    fn close(&mut self) {
        self.probe.closed.set(self.probe.closed.get() + 1);
    }

    fn handle_orientation(&mut self, orientation: Orientation) {
        self.probe.orientation.set(Some(orientation));
    }
}

/// One call the navigator made on a `RecordingSurface`.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCall {
    Attach(ViewId),
    Detach(ViewId),
    Animate(ViewId, AnimationSpec, TransitionId),
}

/// A surface that records calls and completes animations only when told to.
pub struct RecordingSurface {
    pub width: f32,
    pub attached: BTreeSet<ViewId>,
    pub calls: Vec<SurfaceCall>,
    running: Vec<TransitionId>,
    finished: Vec<TransitionId>,
}

impl RecordingSurface {
    pub fn new(width: f32) -> Self {
        Self {
            width,
            attached: BTreeSet::new(),
            calls: Vec::new(),
            running: Vec::new(),
            finished: Vec::new(),
        }
    }

    /// Tickets started but not yet reported.
    pub fn running(&self) -> &[TransitionId] {
        &self.running
    }

    /// Queue one running animation as finished.
    pub fn finish(&mut self, ticket: TransitionId) {
        self.running.retain(|t| *t != ticket);
        self.finished.push(ticket);
    }

    /// Queue every running animation as finished.
    pub fn finish_all(&mut self) {
        self.finished.append(&mut self.running);
    }

    /// Animation specs started on `view`, in call order.
    pub fn animations_for(&self, view: ViewId) -> Vec<&AnimationSpec> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                SurfaceCall::Animate(v, spec, _) if *v == view => Some(spec),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn width(&self) -> f32 {
        self.width
    }

    fn attach(&mut self, view: ViewId) {
        self.attached.insert(view);
        self.calls.push(SurfaceCall::Attach(view));
    }

    fn detach(&mut self, view: ViewId) {
        self.attached.remove(&view);
        self.calls.push(SurfaceCall::Detach(view));
    }

    fn animate(&mut self, view: ViewId, spec: AnimationSpec, ticket: TransitionId) {
        self.running.push(ticket);
        self.calls.push(SurfaceCall::Animate(view, spec, ticket));
    }

    fn poll_completed(&mut self) -> Vec<TransitionId> {
        std::mem::take(&mut self.finished)
    }
}

pub type TestNavigator = Navigator<ScreenRegistry, RecordingSurface>;

/// Registry with animated `"screen"` and `"home"` plus a self-presenting `"overlay"`.
pub fn test_registry() -> ScreenRegistry {
    let mut registry = ScreenRegistry::new();
    registry.register("screen", |view, _args| Ok(Box::new(TestScreen::new("screen", view))));
    registry.register("home", |view, _args| Ok(Box::new(TestScreen::new("home", view))));
    registry.register("overlay", |view, _args| {
        Ok(Box::new(TestScreen::new("overlay", view).self_presented()))
    });
    registry
}

pub fn test_navigator() -> TestNavigator {
    Navigator::new(test_registry(), RecordingSurface::new(320.0))
}

/// Finish every running animation until the navigator is idle.
pub fn settle<F: crate::core::factory::ScreenFactory>(navigator: &mut Navigator<F, RecordingSurface>) {
    loop {
        navigator.surface_mut().finish_all();
        if navigator.pump() == 0 {
            break;
        }
    }
}

/// View ids of the stack, bottom to top.
pub fn stack_views(navigator: &TestNavigator) -> Vec<ViewId> {
    navigator.stack().iter().map(|s| s.view()).collect()
}

/// Shared record of callback invocations.
pub fn call_counter() -> (Rc<RefCell<usize>>, impl FnOnce() + 'static) {
    let counter = Rc::new(RefCell::new(0));
    let handle = counter.clone();
    (counter, move || *handle.borrow_mut() += 1)
}

/// Default config with the home label and duration pinned.
pub fn test_config() -> crate::core::config::ResolvedConfig {
    use crate::core::config::{NavstackConfig, resolve};
    resolve(&NavstackConfig::default(), Some("Home Screen"), Some(300))
}

/// Creates a test App on a recording surface.
pub fn test_app() -> crate::core::state::App<RecordingSurface> {
    crate::core::state::App::from_config(RecordingSurface::new(320.0), &test_config())
}

/// Finish every running animation of the app's navigator.
pub fn settle_app(app: &mut crate::core::state::App<RecordingSurface>) {
    settle(&mut app.navigator);
}
