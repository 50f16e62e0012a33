//! Event → handler bindings

use eyre::Result;
use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;

use crate::host::{LifecycleEvent, RequestSnapshot};

/// A bound lifecycle handler
pub type Handler = Arc<dyn Fn(&RequestSnapshot) -> Result<()> + Send + Sync>;

/// Ordered map of lifecycle events to handlers
#[derive(Clone, Default)]
pub struct Bindings {
    handlers: IndexMap<LifecycleEvent, Handler>,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a closure to `event`, replacing any earlier binding
    pub fn on<F>(self, event: LifecycleEvent, f: F) -> Self
    where
        F: Fn(&RequestSnapshot) -> Result<()> + Send + Sync + 'static,
    {
        self.bind(event, Arc::new(f))
    }

    /// Bind an existing handler to `event`, replacing any earlier binding
    pub fn bind(mut self, event: LifecycleEvent, handler: Handler) -> Self {
        self.insert(event, handler);
        self
    }

    pub fn insert(&mut self, event: LifecycleEvent, handler: Handler) -> Option<Handler> {
        self.handlers.insert(event, handler)
    }

    pub fn get(&self, event: LifecycleEvent) -> Option<&Handler> {
        self.handlers.get(&event)
    }

    pub fn contains(&self, event: LifecycleEvent) -> bool {
        self.handlers.contains_key(&event)
    }

    pub fn events(&self) -> impl Iterator<Item = LifecycleEvent> + '_ {
        self.handlers.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Merge `overrides` on top of `self`
    ///
    /// An override replaces the binding for its event; every other binding
    /// is kept.
    pub fn merge(mut self, overrides: Bindings) -> Self {
        for (event, handler) in overrides.handlers {
            self.handlers.insert(event, handler);
        }
        self
    }
}

impl fmt::Debug for Bindings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.handlers.keys()).finish()
    }
}
