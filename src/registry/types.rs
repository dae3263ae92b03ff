/*!
 * Registry Types
 * Delegate and result types for the dispatch registry
 */

use crate::core::types::DelegateId;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

/// Registry operation result
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Registry errors
///
/// The taxonomy is nearly empty: unknown ids and duplicate registrations are
/// silent by contract, so the only failure a caller can observe is a delegate
/// blowing up during emission.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegistryError {
    #[error("Delegate for id {id} failed: {reason}")]
    DelegateFailed { id: DelegateId, reason: String },
}

/// Type-erased delegate callable
///
/// Invoked with the signal name; produces no result. Ownership transfers to
/// the registry on register and the previous delegate is dropped on replace
/// or unregister. `Arc` rather than `Box` so emission can clone the handle
/// out of the critical section before invoking.
pub type DelegateFn = Arc<dyn Fn(&str) + Send + Sync>;

/// Outcome of an emit call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmitOutcome {
    /// A delegate was registered for the id and was invoked
    Delivered,
    /// No delegate was registered for the id; the signal was dropped
    NoDelegate,
}

/// Registry statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryStats {
    pub total_registered: u64,
    pub total_replaced: u64,
    pub total_unregistered: u64,
    pub total_emitted: u64,
    pub total_delivered: u64,
    pub total_dropped: u64,
    pub total_delegate_panics: u64,
    pub delegates_registered: usize,
}
