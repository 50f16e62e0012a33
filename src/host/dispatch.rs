//! Lifecycle event dispatching

use eyre::Result;

use super::{LifecycleEvent, RequestListener, RequestSnapshot, ServerPlugin};

/// Dispatch one event to a request listener
///
/// Listener errors are returned as-is.
pub fn dispatch(listener: &dyn RequestListener, event: LifecycleEvent, ctx: &RequestSnapshot) -> Result<()> {
    if !listener.handles(event) {
        log::trace!("No handler bound for {}", event);
        return Ok(());
    }

    log::debug!("Dispatching {} for operation {:?}", event, ctx.operation_name);
    listener.handle(event, ctx)
}

/// Drive one request through a plugin, firing `events` in order
///
/// Stops at the first handler error.
pub fn run_request(plugin: &dyn ServerPlugin, ctx: &RequestSnapshot, events: &[LifecycleEvent]) -> Result<()> {
    let listener = plugin.request_did_start(ctx);
    for event in events {
        dispatch(listener.as_ref(), *event, ctx)?;
    }
    Ok(())
}
