//! # Navigator
//!
//! A stack of screens on one `Surface`, with animated transitions between
//! them and a busy gate that drops requests issued mid-transition.
//!
//! ```text
//! stack:  [ home | a | b ]      ← b is current
//!
//! push(c)        b exits left,  c enters right         → [home, a, b, c]
//! pop()          a enters left, b exits right          → [home, a]
//! close_to_home  home enters left, b disappears        → [home]
//! close_all      everything detached at once           → []
//! ```
//!
//! ## Completion
//!
//! Every animation gets a `TransitionId`. The surface reports finished
//! tickets and the host feeds them back through `complete` or `pump`. Each
//! ticket resolves once; its pending entry is removed the first time, so a
//! duplicate report is ignored.
//!
//! ## Busy gate
//!
//! `push`, `pop` and `close_to_home` are no-ops while another one is in
//! flight. The flag clears when the stack is consistent for the running
//! operation:
//!
//! - push: when the incoming screen finished entering (immediately for a
//!   self-presented screen). The outgoing screen's exit only detaches a view
//!   and is not waited on.
//! - pop / close_to_home: when the incoming side settled *and* the outgoing
//!   transition removed its screens from the stack.
//!
//! `close_all` ignores the gate entirely.

use log::{debug, info, warn};
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::oneshot;

use super::device::Orientation;
use super::factory::{ResolutionError, ScreenFactory};
use super::screen::{Presentation, Screen, ScreenArgs, ScreenTarget};
use super::surface::{Surface, TransitionId, ViewId};
use super::transition::{AnimationSpec, DEFAULT_TRANSITION_MS, Direction};

/// Single-shot callback run when an operation's stack change lands.
pub type OnComplete = Box<dyn FnOnce()>;

/// Completion callback paired with a receiver that resolves when it runs.
pub fn completion_signal() -> (OnComplete, oneshot::Receiver<()>) {
    let (tx, rx) = oneshot::channel();
    let callback: OnComplete = Box::new(move || {
        let _ = tx.send(());
    });
    (callback, rx)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Push,
    Pop,
    CloseToHome,
}

#[derive(Debug)]
struct InFlight {
    id: u64,
    operation: Operation,
    /// Transitions still to resolve before the busy flag clears.
    awaiting: usize,
}

/// What to do when a transition resolves.
enum Settle {
    /// The incoming screen finished entering.
    Entered,
    /// A screen slid out from under a push.
    Exited { view: ViewId, attached_at: u64 },
    /// The outgoing screen of a pop.
    Popped {
        view: ViewId,
        attached_at: u64,
        on_complete: Option<OnComplete>,
    },
    /// The top screen of a close_to_home; `released` are the stack entries
    /// above home.
    Collapsed {
        released: Vec<ViewId>,
        on_complete: Option<OnComplete>,
    },
    /// Degenerate close_to_home with home already current.
    Held { on_complete: Option<OnComplete> },
}

struct Pending {
    operation: u64,
    /// Whether the busy flag waits on this transition.
    gates_busy: bool,
    settle: Settle,
}

pub struct Navigator<F: ScreenFactory, S: Surface> {
    factory: F,
    surface: S,
    stack: Vec<Box<dyn Screen>>,
    in_flight: Option<InFlight>,
    pending: HashMap<TransitionId, Pending>,
    /// Attach sequence number per attached view, used to ignore exits that
    /// finish after their view was attached again.
    attachments: HashMap<ViewId, u64>,
    attach_seq: u64,
    next_ticket: u64,
    next_operation: u64,
    duration: Duration,
}

impl<F: ScreenFactory, S: Surface> Navigator<F, S> {
    pub fn new(factory: F, surface: S) -> Self {
        Self {
            factory,
            surface,
            stack: Vec::new(),
            in_flight: None,
            pending: HashMap::new(),
            attachments: HashMap::new(),
            attach_seq: 0,
            next_ticket: 1,
            next_operation: 1,
            duration: Duration::from_millis(DEFAULT_TRANSITION_MS),
        }
    }

    pub fn with_transition_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    // ------------------------------------------------------------------
    // Observable state
    // ------------------------------------------------------------------

    pub fn stack(&self) -> &[Box<dyn Screen>] {
        &self.stack
    }

    pub fn current(&self) -> Option<&dyn Screen> {
        self.stack.last().map(|s| s.as_ref())
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    /// The operation holding the busy flag, if any.
    pub fn operation_in_flight(&self) -> Option<Operation> {
        self.in_flight.as_ref().map(|f| f.operation)
    }

    /// Transitions started and not yet resolved.
    pub fn pending_transitions(&self) -> usize {
        self.pending.len()
    }

    pub fn transition_duration(&self) -> Duration {
        self.duration
    }

    pub fn factory(&self) -> &F {
        &self.factory
    }

    pub fn factory_mut(&mut self) -> &mut F {
        &mut self.factory
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    // ------------------------------------------------------------------
    // Operations
    // ------------------------------------------------------------------

    /// Push a screen on top of the stack and make it current.
    ///
    /// Returns `Ok(None)` without resolving anything when busy. A
    /// resolution error leaves the stack untouched, and so does a screen
    /// whose view is already on the stack (`ResolutionError::ViewInUse`).
    pub fn push(
        &mut self,
        target: impl Into<ScreenTarget>,
        args: &ScreenArgs,
    ) -> Result<Option<&dyn Screen>, ResolutionError> {
        if self.is_busy() {
            debug!("push ignored: navigator busy");
            return Ok(None);
        }

        let screen = match target.into() {
            ScreenTarget::Named(name) => self.factory.create(&name, args)?,
            ScreenTarget::Instance(screen) => screen,
        };

        let view = screen.view();
        if self.stack.iter().any(|s| s.view() == view) {
            warn!("Rejecting '{}': {} is already on the stack", screen.name(), view);
            return Err(ResolutionError::ViewInUse {
                screen: screen.name().to_string(),
                view,
            });
        }

        let op = self.begin(Operation::Push);

        if let Some(outgoing) = self.stack.last().map(|s| s.view()) {
            let attached_at = self.attachments.get(&outgoing).copied().unwrap_or_default();
            let spec = AnimationSpec::exit(Direction::Left, self.surface.width(), self.duration);
            self.start(outgoing, spec, op, false, Settle::Exited { view: outgoing, attached_at });
        }

        info!("Pushing '{}' ({}) at depth {}", screen.name(), view, self.stack.len());
        self.stack.push(screen);
        self.attach(view);
        self.present_incoming(self.stack.len() - 1, Direction::Right, op);

        self.release_if_settled(op);
        self.log_stack();
        Ok(self.current())
    }

    /// Remove the current screen, revealing the one below it.
    ///
    /// Popping the last screen leaves the stack empty. Busy holds until the
    /// outgoing screen is off the stack, even when the revealed screen is
    /// self-presented and has nothing to animate.
    pub fn pop(&mut self, on_complete: Option<OnComplete>) {
        if self.is_busy() {
            debug!("pop ignored: navigator busy");
            return;
        }
        let Some(outgoing) = self.stack.last().map(|s| s.view()) else {
            debug!("pop on empty stack");
            if let Some(callback) = on_complete {
                callback();
            }
            return;
        };

        let op = self.begin(Operation::Pop);
        info!("Popping {} at depth {}", outgoing, self.stack.len());

        if self.stack.len() >= 2 {
            let incoming = self.stack.len() - 2;
            let view = self.stack[incoming].view();
            self.attach(view);
            self.present_incoming(incoming, Direction::Left, op);
        }

        let attached_at = self.attachments.get(&outgoing).copied().unwrap_or_default();
        let spec = AnimationSpec::exit(Direction::Right, self.surface.width(), self.duration);
        self.start(
            outgoing,
            spec,
            op,
            true,
            Settle::Popped {
                view: outgoing,
                attached_at,
                on_complete,
            },
        );
    }

    /// Return to the first screen, releasing everything above it.
    ///
    /// As with `pop`, busy holds until the released screens are off the
    /// stack, whatever the home screen's presentation.
    pub fn close_to_home(&mut self, on_complete: Option<OnComplete>) {
        if self.is_busy() {
            debug!("close_to_home ignored: navigator busy");
            return;
        }
        let Some(home) = self.stack.first().map(|s| s.view()) else {
            debug!("close_to_home on empty stack");
            if let Some(callback) = on_complete {
                callback();
            }
            return;
        };

        let op = self.begin(Operation::CloseToHome);

        if self.stack.len() == 1 {
            debug!("close_to_home: home already current");
            let spec = AnimationSpec::hold(self.duration);
            self.start(home, spec, op, true, Settle::Held { on_complete });
            return;
        }

        info!("Closing to home from depth {}", self.stack.len());
        self.attach(home);
        self.present_incoming(0, Direction::Left, op);

        let released: Vec<ViewId> = self.stack[1..].iter().map(|s| s.view()).collect();
        let outgoing = self.stack[self.stack.len() - 1].view();
        let spec = AnimationSpec::disappear(self.duration);
        self.start(
            outgoing,
            spec,
            op,
            true,
            Settle::Collapsed {
                released,
                on_complete,
            },
        );
    }

    /// Detach and release every screen immediately. Ignores the busy flag.
    pub fn close_all(&mut self) {
        info!("Closing all {} screens", self.stack.len());
        for mut screen in self.stack.drain(..) {
            let view = screen.view();
            self.attachments.remove(&view);
            self.surface.detach(view);
            screen.close();
        }
        // Views still attached without a stack entry
        for (view, _) in self.attachments.drain() {
            self.surface.detach(view);
        }
        self.log_stack();
    }

    /// Forward an orientation change to every screen on the stack.
    pub fn broadcast_orientation(&mut self, orientation: Orientation) {
        for screen in self.stack.iter_mut() {
            screen.handle_orientation(orientation);
        }
    }

    // ------------------------------------------------------------------
    // Completion
    // ------------------------------------------------------------------

    /// Resolve one finished transition. Returns `false` for tickets that are
    /// unknown or already resolved.
    pub fn complete(&mut self, ticket: TransitionId) -> bool {
        let Some(pending) = self.pending.remove(&ticket) else {
            debug!("Ignoring completion for unknown {}", ticket);
            return false;
        };

        let callback = match pending.settle {
            Settle::Entered => None,
            Settle::Exited { view, attached_at } => {
                self.detach_if_unchanged(view, attached_at);
                None
            }
            Settle::Popped {
                view,
                attached_at,
                on_complete,
            } => {
                self.detach_if_unchanged(view, attached_at);
                self.release(&[view]);
                on_complete
            }
            Settle::Collapsed {
                released,
                on_complete,
            } => {
                for view in &released {
                    self.detach(*view);
                }
                self.release(&released);
                on_complete
            }
            Settle::Held { on_complete } => on_complete,
        };

        if pending.gates_busy {
            if let Some(in_flight) = self.in_flight.as_mut()
                && in_flight.id == pending.operation
            {
                in_flight.awaiting = in_flight.awaiting.saturating_sub(1);
            }
            self.release_if_settled(pending.operation);
        }

        if let Some(callback) = callback {
            callback();
        }
        true
    }

    /// Resolve everything the surface reports as finished. Returns how many
    /// tickets resolved.
    pub fn pump(&mut self) -> usize {
        let finished = self.surface.poll_completed();
        finished.into_iter().filter(|t| self.complete(*t)).count()
    }

    /// Log the stack depth and screen names.
    pub fn log_stack(&self) {
        let names: Vec<&str> = self.stack.iter().map(|s| s.name()).collect();
        debug!("Stack Length: {}", self.stack.len());
        debug!("Stack: {:?}", names);
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    fn begin(&mut self, operation: Operation) -> u64 {
        let id = self.next_operation;
        self.next_operation += 1;
        self.in_flight = Some(InFlight {
            id,
            operation,
            awaiting: 0,
        });
        id
    }

    fn release_if_settled(&mut self, op: u64) {
        if let Some(in_flight) = &self.in_flight
            && in_flight.id == op
            && in_flight.awaiting == 0
        {
            debug!("{:?} settled", in_flight.operation);
            self.in_flight = None;
        }
    }

    /// Open or animate in the screen at `index`, whose view is attached.
    fn present_incoming(&mut self, index: usize, from: Direction, op: u64) {
        let screen = &mut self.stack[index];
        let view = screen.view();
        match screen.presentation() {
            Presentation::SelfPresented => {
                debug!("'{}' presents itself", screen.name());
                screen.open();
            }
            Presentation::Animated => {
                let spec = AnimationSpec::enter(from, self.surface.width(), self.duration);
                self.start(view, spec, op, true, Settle::Entered);
            }
        }
    }

    fn start(&mut self, view: ViewId, spec: AnimationSpec, op: u64, gates_busy: bool, settle: Settle) {
        let ticket = TransitionId(self.next_ticket);
        self.next_ticket += 1;

        if gates_busy
            && let Some(in_flight) = self.in_flight.as_mut()
            && in_flight.id == op
        {
            in_flight.awaiting += 1;
        }
        debug!("Starting {:?} on {} as {}", spec.kind, view, ticket);
        self.pending.insert(
            ticket,
            Pending {
                operation: op,
                gates_busy,
                settle,
            },
        );
        self.surface.animate(view, spec, ticket);
    }

    fn attach(&mut self, view: ViewId) {
        self.attach_seq += 1;
        self.attachments.insert(view, self.attach_seq);
        self.surface.attach(view);
    }

    fn detach(&mut self, view: ViewId) {
        self.attachments.remove(&view);
        self.surface.detach(view);
    }

    fn detach_if_unchanged(&mut self, view: ViewId, attached_at: u64) {
        match self.attachments.get(&view).copied() {
            Some(seq) if seq == attached_at => self.detach(view),
            Some(_) => debug!("{} was attached again; keeping it", view),
            None => {}
        }
    }

    /// Remove the screens owning `views` from the stack and close them.
    fn release(&mut self, views: &[ViewId]) {
        let mut kept = Vec::with_capacity(self.stack.len());
        for mut screen in self.stack.drain(..) {
            if views.contains(&screen.view()) {
                screen.close();
            } else {
                kept.push(screen);
            }
        }
        if kept.is_empty() && !views.is_empty() {
            warn!("Stack is now empty");
        }
        self.stack = kept;
        self.log_stack();
    }
}
