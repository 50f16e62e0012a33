//! The console logging plugin
//!
//! Out of the box the plugin logs resolved operations in green and request
//! errors in red. Callers can rebind any lifecycle event through
//! [`LogPlugin::with_handlers`]; their bindings take precedence per event.

use std::sync::Arc;

use eyre::Result;

pub mod bindings;

pub use bindings::{Bindings, Handler};

use crate::format::Log;
use crate::host::{LifecycleEvent, RequestListener, RequestSnapshot, ServerPlugin};
use crate::level::LogLevel;

/// Events bound when no override is given
pub const DEFAULT_BINDINGS: [(LifecycleEvent, LogLevel); 2] = [
    (LifecycleEvent::DidEncounterErrors, LogLevel::Error),
    (LifecycleEvent::DidResolveOperation, LogLevel::Success),
];

impl Log {
    /// Handler that prints at `level` with no message
    pub fn handler(&self, level: LogLevel) -> Handler {
        let log = *self;
        Arc::new(move |ctx: &RequestSnapshot| {
            log.print(level, ctx, None);
            Ok(())
        })
    }
}

type Customize = Arc<dyn Fn(&Log) -> Bindings + Send + Sync>;

/// Console logging plugin
pub struct LogPlugin {
    log: Log,
    defaults: Bindings,
    customize: Option<Customize>,
}

impl LogPlugin {
    /// Plugin with the default bindings only
    pub fn new() -> Self {
        let log = Log::new();
        Self {
            log,
            defaults: default_bindings(&log),
            customize: None,
        }
    }

    /// Plugin whose bindings are the defaults merged with `customize(log)`
    ///
    /// `customize` runs at the start of every request.
    pub fn with_handlers<F>(customize: F) -> Self
    where
        F: Fn(&Log) -> Bindings + Send + Sync + 'static,
    {
        Self {
            customize: Some(Arc::new(customize)),
            ..Self::new()
        }
    }

    /// Bindings for a new request
    pub fn bindings(&self) -> Bindings {
        match &self.customize {
            Some(customize) => self.defaults.clone().merge(customize(&self.log)),
            None => self.defaults.clone(),
        }
    }
}

impl Default for LogPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl ServerPlugin for LogPlugin {
    fn request_did_start(&self, _ctx: &RequestSnapshot) -> Box<dyn RequestListener> {
        let bindings = self.bindings();
        log::debug!("Request listener bound to {:?}", bindings);
        Box::new(RequestLogger { bindings })
    }
}

fn default_bindings(log: &Log) -> Bindings {
    DEFAULT_BINDINGS
        .iter()
        .fold(Bindings::new(), |bindings, (event, level)| bindings.bind(*event, log.handler(*level)))
}

/// Listener for a single request
pub struct RequestLogger {
    bindings: Bindings,
}

impl RequestListener for RequestLogger {
    fn handles(&self, event: LifecycleEvent) -> bool {
        self.bindings.contains(event)
    }

    fn handle(&self, event: LifecycleEvent, ctx: &RequestSnapshot) -> Result<()> {
        match self.bindings.get(event) {
            Some(handler) => handler(ctx),
            None => Ok(()),
        }
    }
}
