/*!
 * Process-Wide Registry
 * Shared instance and the boundary dispatch surface
 */

use super::table::SignalRegistry;
use crate::core::types::DelegateId;
use log::{info, warn};
use std::sync::OnceLock;

/// Global singleton for the process-wide registry
static REGISTRY: OnceLock<SignalRegistry> = OnceLock::new();

/// Get or initialize the process-wide registry instance
///
/// Construction on first use is race-free. The instance lives for the rest of
/// the process and is never torn down, only drained entry-by-entry via
/// unregistration. Explicitly constructed [`SignalRegistry`] values are the
/// primary API; this is the one shared instance the boundary functions below
/// operate on.
pub fn global() -> &'static SignalRegistry {
    REGISTRY.get_or_init(|| {
        info!("Process-wide signal registry initialized");
        SignalRegistry::new()
    })
}

/// Attach a delegate for an id on the process-wide registry
///
/// Replaces any prior delegate for the id. Typically called when the
/// host-side owner of the id is constructed or mounted.
pub fn register_delegate<F>(id: DelegateId, delegate: F)
where
    F: Fn(&str) + Send + Sync + 'static,
{
    global().register(id, delegate);
}

/// Detach the delegate for an id on the process-wide registry
///
/// A no-op if nothing is registered for the id. Typically called when the
/// host-side owner of the id is destroyed or unmounted.
pub fn unregister_delegate(id: DelegateId) {
    global().unregister(id);
}

/// Emit a named signal for an id on the process-wide registry
///
/// Invokes the registered delegate synchronously on the calling thread; a
/// silent no-op if nothing is listening. A failing delegate is contained
/// here - logged and counted, never propagated back across the boundary.
pub fn emit(id: DelegateId, signal: &str) {
    if let Err(e) = global().emit(id, signal) {
        warn!("Contained delegate failure during emit: {}", e);
    }
}
