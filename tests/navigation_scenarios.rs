use navstack::core::{
    Navigator, Presentation, ResolutionError, Screen, ScreenArgs, ScreenRegistry, Surface,
    TransitionId, ViewId, completion_signal,
};
use navstack::core::transition::AnimationSpec;
use serde_json::json;
use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

// ============================================================================
// Helper Types
// ============================================================================

/// Surface that finishes animations only when told to.
#[derive(Default)]
struct ManualSurface {
    attached: BTreeSet<ViewId>,
    running: Vec<TransitionId>,
    finished: Vec<TransitionId>,
}

impl ManualSurface {
    fn finish_all(&mut self) {
        self.finished.append(&mut self.running);
    }
}

impl Surface for ManualSurface {
    fn width(&self) -> f32 {
        100.0
    }

    fn attach(&mut self, view: ViewId) {
        self.attached.insert(view);
    }

    fn detach(&mut self, view: ViewId) {
        self.attached.remove(&view);
    }

    fn animate(&mut self, _view: ViewId, _spec: AnimationSpec, ticket: TransitionId) {
        self.running.push(ticket);
    }

    fn poll_completed(&mut self) -> Vec<TransitionId> {
        std::mem::take(&mut self.finished)
    }
}

type Journal = Rc<RefCell<Vec<String>>>;

struct LabelScreen {
    label: String,
    view: ViewId,
    presentation: Presentation,
    journal: Journal,
}

impl Screen for LabelScreen {
    fn name(&self) -> &str {
        &self.label
    }

    fn view(&self) -> ViewId {
        self.view
    }

    fn presentation(&self) -> Presentation {
        self.presentation
    }

    fn open(&mut self) {
        self.journal.borrow_mut().push(format!("open {}", self.label));
    }

    fn close(&mut self) {
        self.journal.borrow_mut().push(format!("close {}", self.label));
    }
}

type TestNavigator = Navigator<ScreenRegistry, ManualSurface>;

// ============================================================================
// Helper Functions
// ============================================================================

/// Navigator whose "home" and "screen" builders label screens by their
/// `text` argument, falling back to the screen name.
fn create_navigator(journal: &Journal) -> TestNavigator {
    let mut registry = ScreenRegistry::new();
    for name in ["home", "screen", "overlay"] {
        let journal = journal.clone();
        registry.register(name, move |view, args| {
            let label = args
                .get("text")
                .and_then(|v| v.as_str())
                .unwrap_or(name)
                .to_string();
            let presentation = if name == "overlay" {
                Presentation::SelfPresented
            } else {
                Presentation::Animated
            };
            Ok(Box::new(LabelScreen {
                label,
                view,
                presentation,
                journal: journal.clone(),
            }))
        });
    }
    Navigator::new(registry, ManualSurface::default())
}

fn args(value: serde_json::Value) -> ScreenArgs {
    value.as_object().cloned().unwrap_or_default()
}

/// Finish every running animation until nothing is pending.
fn settle(navigator: &mut TestNavigator) {
    while navigator.pending_transitions() > 0 {
        navigator.surface_mut().finish_all();
        navigator.pump();
    }
}

fn labels(navigator: &TestNavigator) -> Vec<String> {
    navigator.stack().iter().map(|s| s.name().to_string()).collect()
}

fn push_settled(navigator: &mut TestNavigator, name: &str, text: &str) {
    navigator
        .push(name, &args(json!({ "text": text })))
        .unwrap()
        .unwrap();
    settle(navigator);
}

// ============================================================================
// Stack Properties
// ============================================================================

#[test]
fn test_n_pushes_leave_n_screens() {
    let journal = Journal::default();
    let mut navigator = create_navigator(&journal);

    for n in 1..=6 {
        let text = format!("screen {n}");
        push_settled(&mut navigator, "screen", &text);
        assert_eq!(navigator.depth(), n);
        assert_eq!(navigator.current().unwrap().name(), text);
        assert!(!navigator.is_busy());
    }

    // Only the top screen stays attached once pushes settle
    let top = navigator.current().unwrap().view();
    assert_eq!(navigator.surface().attached, BTreeSet::from([top]));
}

#[test]
fn test_requests_while_busy_do_not_mutate_stack() {
    let journal = Journal::default();
    let mut navigator = create_navigator(&journal);
    push_settled(&mut navigator, "home", "home");

    navigator.push("screen", &args(json!({ "text": "A" }))).unwrap();
    assert!(navigator.is_busy());
    let before = labels(&navigator);

    assert!(navigator.push("screen", &args(json!({ "text": "B" }))).unwrap().is_none());
    navigator.pop(None);
    navigator.close_to_home(None);
    assert_eq!(labels(&navigator), before);

    settle(&mut navigator);
    assert!(!navigator.is_busy());
    assert_eq!(labels(&navigator), vec!["home", "A"]);
}

#[test]
fn test_push_then_pop_round_trip() {
    let journal = Journal::default();
    let mut navigator = create_navigator(&journal);
    push_settled(&mut navigator, "home", "home");
    push_settled(&mut navigator, "screen", "A");
    let before = labels(&navigator);

    push_settled(&mut navigator, "screen", "B");
    navigator.pop(None);
    assert!(navigator.is_busy());
    settle(&mut navigator);

    assert_eq!(labels(&navigator), before);
    assert!(!navigator.is_busy());
    let current = navigator.current().unwrap().view();
    assert!(navigator.surface().attached.contains(&current));
}

#[test]
fn test_close_to_home_twice_keeps_home() {
    let journal = Journal::default();
    let mut navigator = create_navigator(&journal);
    push_settled(&mut navigator, "home", "home");
    push_settled(&mut navigator, "screen", "A");
    push_settled(&mut navigator, "screen", "B");

    for _ in 0..2 {
        let fired = Rc::new(RefCell::new(0));
        let counter = fired.clone();
        navigator.close_to_home(Some(Box::new(move || *counter.borrow_mut() += 1)));
        assert!(navigator.is_busy());
        settle(&mut navigator);
        assert_eq!(*fired.borrow(), 1);
        assert_eq!(labels(&navigator), vec!["home"]);
        assert!(!navigator.is_busy());
    }
}

#[test]
fn test_close_all_from_any_state() {
    let journal = Journal::default();
    let mut navigator = create_navigator(&journal);

    navigator.close_all();
    assert_eq!(navigator.depth(), 0);
    assert!(navigator.current().is_none());

    push_settled(&mut navigator, "home", "home");
    push_settled(&mut navigator, "screen", "A");
    navigator.close_all();

    assert_eq!(navigator.depth(), 0);
    assert!(navigator.current().is_none());
    assert!(navigator.surface().attached.is_empty());
    let closes: Vec<String> = journal
        .borrow()
        .iter()
        .filter(|e| e.starts_with("close"))
        .cloned()
        .collect();
    assert_eq!(closes, vec!["close home", "close A"]);
}

#[test]
fn test_self_presented_screen_opens_without_animation() {
    let journal = Journal::default();
    let mut navigator = create_navigator(&journal);
    push_settled(&mut navigator, "home", "home");

    navigator.push("overlay", &ScreenArgs::new()).unwrap().unwrap();
    assert!(!navigator.is_busy());
    assert_eq!(journal.borrow().last().map(String::as_str), Some("open overlay"));

    settle(&mut navigator);
    assert_eq!(labels(&navigator), vec!["home", "overlay"]);
}

#[test]
fn test_unknown_screen_is_reported() {
    let journal = Journal::default();
    let mut navigator = create_navigator(&journal);

    let err = navigator.push("missing", &ScreenArgs::new()).unwrap_err();
    assert_eq!(err, ResolutionError::UnknownScreen("missing".to_string()));
    assert_eq!(navigator.depth(), 0);
    assert!(!navigator.is_busy());
}

// ============================================================================
// Full Scenario
// ============================================================================

#[test]
fn test_home_push_pop_close_scenario() {
    let journal = Journal::default();
    let mut navigator = create_navigator(&journal);

    push_settled(&mut navigator, "home", "home");
    assert_eq!(labels(&navigator), vec!["home"]);
    assert_eq!(navigator.current().unwrap().name(), "home");

    push_settled(&mut navigator, "screen", "A");
    assert_eq!(labels(&navigator), vec!["home", "A"]);

    navigator.pop(None);
    settle(&mut navigator);
    assert_eq!(labels(&navigator), vec!["home"]);
    assert_eq!(navigator.current().unwrap().name(), "home");

    navigator.push("screen", &ScreenArgs::new()).unwrap();
    settle(&mut navigator);
    navigator.push("screen", &ScreenArgs::new()).unwrap();
    settle(&mut navigator);
    assert_eq!(navigator.depth(), 3);

    navigator.close_to_home(None);
    settle(&mut navigator);
    assert_eq!(labels(&navigator), vec!["home"]);

    navigator.close_all();
    assert_eq!(navigator.depth(), 0);
}

// ============================================================================
// Completion Signals
// ============================================================================

#[tokio::test]
async fn test_pop_completion_resolves_receiver() {
    let journal = Journal::default();
    let mut navigator = create_navigator(&journal);
    push_settled(&mut navigator, "home", "home");
    push_settled(&mut navigator, "screen", "A");

    let (on_complete, mut done) = completion_signal();
    navigator.pop(Some(on_complete));
    assert!(done.try_recv().is_err());

    settle(&mut navigator);
    assert!(done.await.is_ok());
    assert_eq!(labels(&navigator), vec!["home"]);
}

#[tokio::test]
async fn test_empty_pop_resolves_immediately() {
    let journal = Journal::default();
    let mut navigator = create_navigator(&journal);

    let (on_complete, done) = completion_signal();
    navigator.pop(Some(on_complete));
    assert!(!navigator.is_busy());
    assert!(done.await.is_ok());
}
