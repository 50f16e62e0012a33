//! Colorized console logging for GraphQL request lifecycle events.
//!
//! The plugin binds lifecycle events fired by a GraphQL server to level-bound
//! log handles. Each handle renders one colored line per call on stdout.
//!
//! ```no_run
//! use gqlog::host::{self, LifecycleEvent, RequestSnapshot, ServerPlugin};
//! use gqlog::plugin::{Bindings, LogPlugin};
//!
//! let plugin = LogPlugin::with_handlers(|log| {
//!     let log = *log;
//!     Bindings::new().on(LifecycleEvent::DidResolveOperation, move |ctx| {
//!         log.info(ctx, Some("resolved"));
//!         Ok(())
//!     })
//! });
//!
//! let ctx = RequestSnapshot::default();
//! let listener = plugin.request_did_start(&ctx);
//! host::dispatch(listener.as_ref(), LifecycleEvent::DidResolveOperation, &ctx)?;
//! # Ok::<(), eyre::Report>(())
//! ```

pub mod format;
pub mod host;
pub mod level;
pub mod plugin;

pub use format::Log;
pub use host::{LifecycleEvent, RequestListener, RequestSnapshot, ServerPlugin};
pub use level::LogLevel;
pub use plugin::{Bindings, Handler, LogPlugin};
