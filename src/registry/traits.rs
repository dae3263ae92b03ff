/*!
 * Registry Traits
 * Dispatch abstractions for the boundary seams
 */

use super::types::{DelegateFn, EmitOutcome, RegistryResult, RegistryStats};
use crate::core::types::DelegateId;

/// Delegate registration interface
pub trait DelegateRegistry: Send + Sync {
    /// Associate a delegate with an id, replacing any prior delegate
    fn register_delegate(&self, id: DelegateId, delegate: DelegateFn);

    /// Remove the association for an id; no-op if absent
    fn unregister_delegate(&self, id: DelegateId) -> bool;

    /// Check whether a delegate is registered for an id
    fn is_registered(&self, id: DelegateId) -> bool;

    /// Get the number of registered delegates
    fn delegate_count(&self) -> usize;
}

/// Signal emission interface
pub trait SignalEmitter: Send + Sync {
    /// Invoke the delegate registered for an id with a signal name
    fn emit(&self, id: DelegateId, signal: &str) -> RegistryResult<EmitOutcome>;
}

/// Registry introspection
pub trait RegistryInspect: Send + Sync {
    /// Get registry statistics
    fn stats(&self) -> RegistryStats;
}

/// Combined dispatch trait
pub trait SignalDispatch:
    DelegateRegistry + SignalEmitter + RegistryInspect + Clone + Send + Sync
{
}

/// Implement SignalDispatch for types that implement all required traits
impl<T> SignalDispatch for T where
    T: DelegateRegistry + SignalEmitter + RegistryInspect + Clone + Send + Sync
{
}
