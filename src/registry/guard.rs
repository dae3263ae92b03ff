/*!
 * Delegate Guards
 *
 * RAII guards for delegate registrations with automatic unregister
 */

use super::table::SignalRegistry;
use crate::core::types::DelegateId;
use log::debug;

/// Delegate registration guard with automatic unregister
///
/// Ties a registration to a host-side object's lifetime: register on
/// construction or mount, unregister on drop. Dropping the guard removes
/// whatever delegate currently occupies the id, so if the id is re-registered
/// while a stale guard is still alive, the stale drop removes the newer
/// delegate too. Ids are the caller's own object handles and do not collide
/// between live objects in correct use; `detach` is the escape hatch when a
/// guard must not tear down the slot.
///
/// # Example
///
/// ```rust
/// use signal_dispatch::{DelegateId, SignalRegistry};
///
/// let registry = SignalRegistry::new();
/// {
///     let _guard = registry.register_guard(DelegateId(7), |name| {
///         println!("signal: {name}");
///     });
///     // Delegate receives signals while the guard is alive
/// }
/// // Automatically unregistered on drop
/// assert!(!registry.is_registered(DelegateId(7)));
/// ```
pub struct DelegateGuard {
    registry: SignalRegistry,
    id: DelegateId,
    active: bool,
}

impl DelegateGuard {
    pub(crate) fn new(registry: SignalRegistry, id: DelegateId) -> Self {
        Self {
            registry,
            id,
            active: true,
        }
    }

    /// Get the guarded id
    #[inline]
    pub fn id(&self) -> DelegateId {
        self.id
    }

    /// Whether the guard still owns its registration
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Unregister immediately instead of at drop
    pub fn release_early(mut self) {
        self.release();
    }

    /// Keep the registration alive past the guard's lifetime
    pub fn detach(mut self) {
        self.active = false;
    }

    fn release(&mut self) {
        if self.active {
            self.active = false;
            self.registry.unregister(self.id);
            debug!("Guard released delegate {}", self.id);
        }
    }
}

impl Drop for DelegateGuard {
    fn drop(&mut self) {
        self.release();
    }
}
