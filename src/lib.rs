/*!
 * Signal Dispatch Library
 * Cross-boundary signal dispatch registry
 */

pub mod core;
pub mod registry;

// Re-exports
pub use crate::core::types::DelegateId;
pub use crate::registry::{
    emit, global, register_delegate, unregister_delegate, AtomicRegistryStats, DelegateFn,
    DelegateGuard, DelegateRegistry, EmitOutcome, RegistryError, RegistryInspect, RegistryResult,
    RegistryStats, SignalDispatch, SignalEmitter, SignalRegistry,
};
