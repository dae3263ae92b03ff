/*!
 * Core Types
 * Common types used across the registry
 */

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque delegate identifier
///
/// A correlation key chosen by the registering side, typically the address or
/// handle of the owning host object. The registry neither generates nor
/// validates ids; uniqueness for the lifetime of a registration is the
/// caller's responsibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DelegateId(pub u64);

impl DelegateId {
    /// Raw numeric value of the handle
    #[inline]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl From<u64> for DelegateId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for DelegateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
