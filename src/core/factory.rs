//! # Screen Factory
//!
//! Turns a screen name plus arguments into a live screen instance.
//!
//! `ScreenRegistry` is the stock factory: builders are registered by name
//! and every instance it creates gets a fresh `ViewId`.

use log::debug;
use std::collections::BTreeMap;
use std::fmt;

use super::screen::{Screen, ScreenArgs};
use super::surface::ViewId;

/// Errors raised while resolving a screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionError {
    /// No builder is registered under this name.
    UnknownScreen(String),
    /// The builder rejected the arguments it was given.
    InvalidArguments { screen: String, reason: String },
    /// The screen's view already belongs to a screen on the stack.
    ViewInUse { screen: String, view: ViewId },
}

impl fmt::Display for ResolutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolutionError::UnknownScreen(name) => write!(f, "unknown screen: {name}"),
            ResolutionError::InvalidArguments { screen, reason } => {
                write!(f, "invalid arguments for screen {screen}: {reason}")
            }
            ResolutionError::ViewInUse { screen, view } => {
                write!(f, "screen {screen} reuses {view}, already on the stack")
            }
        }
    }
}

impl std::error::Error for ResolutionError {}

pub trait ScreenFactory {
    fn create(&mut self, name: &str, args: &ScreenArgs) -> Result<Box<dyn Screen>, ResolutionError>;
}

type ScreenBuilder = Box<dyn Fn(ViewId, &ScreenArgs) -> Result<Box<dyn Screen>, ResolutionError>>;

pub struct ScreenRegistry {
    builders: BTreeMap<String, ScreenBuilder>,
    next_view: u64,
}

impl ScreenRegistry {
    pub fn new() -> Self {
        Self {
            builders: BTreeMap::new(),
            next_view: 1,
        }
    }

    /// Register `builder` under `name`, replacing any earlier registration.
    pub fn register<F>(&mut self, name: &str, builder: F)
    where
        F: Fn(ViewId, &ScreenArgs) -> Result<Box<dyn Screen>, ResolutionError> + 'static,
    {
        self.builders.insert(name.to_string(), Box::new(builder));
    }

    pub fn contains(&self, name: &str) -> bool {
        self.builders.contains_key(name)
    }

    pub fn names(&self) -> Vec<&str> {
        self.builders.keys().map(String::as_str).collect()
    }

    /// Hands out a view id that no screen created by this registry uses.
    pub fn allocate_view(&mut self) -> ViewId {
        let id = ViewId(self.next_view);
        self.next_view += 1;
        id
    }
}

impl Default for ScreenRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ScreenFactory for ScreenRegistry {
    fn create(&mut self, name: &str, args: &ScreenArgs) -> Result<Box<dyn Screen>, ResolutionError> {
        if !self.builders.contains_key(name) {
            return Err(ResolutionError::UnknownScreen(name.to_string()));
        }
        let view = self.allocate_view();
        let builder = &self.builders[name];
        let screen = builder(view, args)?;
        debug!("Created screen '{}' on {}", name, view);
        Ok(screen)
    }
}
