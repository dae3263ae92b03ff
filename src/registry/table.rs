/*!
 * Signal Registry
 * Coarse-locked delegate table with register, unregister, and emit
 */

use super::guard::DelegateGuard;
use super::stats::AtomicRegistryStats;
use super::traits::{DelegateRegistry, RegistryInspect, SignalEmitter};
use super::types::{DelegateFn, EmitOutcome, RegistryError, RegistryResult, RegistryStats};
use crate::core::types::DelegateId;
use ahash::RandomState;
use log::{debug, warn};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

/// Thread-safe id -> delegate table
///
/// One mutex guards the whole table and every operation takes it for its full
/// duration, so the three operations are totally ordered with respect to each
/// other. `emit` clones the delegate handle inside the critical section and
/// invokes it after the lock is released: a delegate may re-enter the registry
/// (register another id, unregister itself) without deadlocking. The window
/// this opens is narrow but real - an unregister that completes on another
/// thread between lookup and invocation does not stop the in-flight delivery.
///
/// Cloning is cheap and shares the underlying table.
#[derive(Clone)]
pub struct SignalRegistry {
    delegates: Arc<Mutex<HashMap<DelegateId, DelegateFn, RandomState>>>,
    stats: Arc<AtomicRegistryStats>,
}

impl SignalRegistry {
    pub fn new() -> Self {
        Self {
            delegates: Arc::new(Mutex::new(HashMap::with_hasher(RandomState::new()))),
            stats: Arc::new(AtomicRegistryStats::new()),
        }
    }

    /// Register a delegate for an id, replacing any prior delegate
    ///
    /// Always succeeds; a replaced delegate is dropped.
    pub fn register<F>(&self, id: DelegateId, delegate: F)
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.register_delegate(id, Arc::new(delegate));
    }

    /// Register an already type-erased delegate for an id
    pub fn register_delegate(&self, id: DelegateId, delegate: DelegateFn) {
        // The temporary guard drops at the end of the statement, so the
        // replaced delegate (if any) is dropped after the lock is released.
        let replaced = self.delegates.lock().insert(id, delegate);

        if replaced.is_some() {
            self.stats.inc_replaced();
            debug!("Replaced delegate for id {}", id);
        } else {
            self.stats.inc_registered();
            self.stats.inc_delegates();
            debug!("Registered delegate for id {}", id);
        }
    }

    /// Register a delegate and tie it to a guard that unregisters on drop
    pub fn register_guard<F>(&self, id: DelegateId, delegate: F) -> DelegateGuard
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.register(id, delegate);
        DelegateGuard::new(self.clone(), id)
    }

    /// Remove the delegate for an id
    ///
    /// Unregistering an unknown or already-unregistered id is a defined,
    /// silent no-op. Returns whether an entry was removed.
    pub fn unregister(&self, id: DelegateId) -> bool {
        let removed = self.delegates.lock().remove(&id);

        if removed.is_some() {
            self.stats.inc_unregistered();
            self.stats.dec_delegates(1);
            debug!("Unregistered delegate for id {}", id);
            true
        } else {
            false
        }
    }

    /// Emit a named signal for an id
    ///
    /// If a delegate is registered for the id it is invoked exactly once,
    /// synchronously, on the calling thread. Emitting to an unlistened id is
    /// a silent no-op ([`EmitOutcome::NoDelegate`]). A panicking delegate is
    /// caught and surfaced as [`RegistryError::DelegateFailed`]; the table
    /// itself is unaffected and stays usable.
    pub fn emit(&self, id: DelegateId, signal: &str) -> RegistryResult<EmitOutcome> {
        self.stats.inc_emitted();

        let delegate = {
            let table = self.delegates.lock();
            match table.get(&id) {
                Some(delegate) => delegate.clone(),
                None => {
                    self.stats.inc_dropped();
                    debug!("No delegate for id {}, dropping signal '{}'", id, signal);
                    return Ok(EmitOutcome::NoDelegate);
                }
            }
        };

        // Lock is released here; the delegate may re-enter the registry.
        match panic::catch_unwind(AssertUnwindSafe(|| (*delegate)(signal))) {
            Ok(()) => {
                self.stats.inc_delivered();
                debug!("Delivered signal '{}' to delegate {}", signal, id);
                Ok(EmitOutcome::Delivered)
            }
            Err(payload) => {
                self.stats.inc_delegate_panics();
                let reason = panic_reason(payload.as_ref());
                warn!("Delegate {} panicked on signal '{}': {}", id, signal, reason);
                Err(RegistryError::DelegateFailed { id, reason })
            }
        }
    }

    /// Check whether a delegate is registered for an id
    pub fn is_registered(&self, id: DelegateId) -> bool {
        self.delegates.lock().contains_key(&id)
    }

    /// Get the number of registered delegates
    pub fn delegate_count(&self) -> usize {
        self.delegates.lock().len()
    }

    /// Drop all registrations
    pub fn clear(&self) {
        // Swap the table out under the lock; entries drop after it is released.
        let drained = std::mem::take(&mut *self.delegates.lock());

        if !drained.is_empty() {
            self.stats.dec_delegates(drained.len());
            debug!("Cleared {} delegates", drained.len());
        }
    }

    /// Get a snapshot of registry statistics
    pub fn stats(&self) -> RegistryStats {
        self.stats.snapshot()
    }
}

impl Default for SignalRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl DelegateRegistry for SignalRegistry {
    fn register_delegate(&self, id: DelegateId, delegate: DelegateFn) {
        SignalRegistry::register_delegate(self, id, delegate);
    }

    fn unregister_delegate(&self, id: DelegateId) -> bool {
        SignalRegistry::unregister(self, id)
    }

    fn is_registered(&self, id: DelegateId) -> bool {
        SignalRegistry::is_registered(self, id)
    }

    fn delegate_count(&self) -> usize {
        SignalRegistry::delegate_count(self)
    }
}

impl SignalEmitter for SignalRegistry {
    fn emit(&self, id: DelegateId, signal: &str) -> RegistryResult<EmitOutcome> {
        SignalRegistry::emit(self, id, signal)
    }
}

impl RegistryInspect for SignalRegistry {
    fn stats(&self) -> RegistryStats {
        SignalRegistry::stats(self)
    }
}

/// Extract a printable reason from a caught panic payload
fn panic_reason(payload: &(dyn std::any::Any + Send + 'static)) -> String {
    if let Some(s) = payload.downcast_ref::<&'static str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
