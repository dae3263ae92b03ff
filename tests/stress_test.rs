/*!
 * Registry Stress Tests
 * Concurrent register/unregister/emit interleavings over shared identifiers
 */

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use signal_dispatch::{DelegateId, SignalRegistry};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::thread;

// Test constants for stress testing
const THREADS: usize = 8;
const OPS_PER_THREAD: usize = 2_000;
const SHARED_ID_SPACE: u64 = 32;
const IDS_PER_THREAD: u64 = 16;

#[test]
fn test_concurrent_interleaved_operations_on_shared_ids() {
    let registry = SignalRegistry::new();
    let deliveries = Arc::new(AtomicU64::new(0));

    let mut handles = vec![];

    for worker in 0..THREADS {
        let registry = registry.clone();
        let deliveries = Arc::clone(&deliveries);

        handles.push(thread::spawn(move || {
            let mut rng = StdRng::seed_from_u64(worker as u64);

            for _ in 0..OPS_PER_THREAD {
                let id = DelegateId(rng.gen_range(0..SHARED_ID_SPACE));
                match rng.gen_range(0..4u8) {
                    0 => {
                        let counter = Arc::clone(&deliveries);
                        registry.register(id, move |_| {
                            counter.fetch_add(1, Ordering::Relaxed);
                        });
                    }
                    1 => {
                        registry.unregister(id);
                    }
                    2 => {
                        registry.emit(id, "stress").unwrap();
                    }
                    _ => {
                        registry.is_registered(id);
                    }
                }
            }
        }));
    }

    for handle in handles {
        handle.join().unwrap();
    }

    // The table never exceeds the id space and agrees with per-id lookups
    let count = registry.delegate_count();
    assert!(count <= SHARED_ID_SPACE as usize);
    let registered = (0..SHARED_ID_SPACE)
        .filter(|&raw| registry.is_registered(DelegateId(raw)))
        .count();
    assert_eq!(registered, count);

    // Every emit either delivered or dropped; no delegates panicked
    let stats = registry.stats();
    assert_eq!(stats.total_emitted, stats.total_delivered + stats.total_dropped);
    assert_eq!(stats.total_delegate_panics, 0);
    assert_eq!(stats.total_delivered, deliveries.load(Ordering::Relaxed));
    assert_eq!(stats.delegates_registered, count);
    assert_eq!(
        stats.total_registered,
        stats.total_unregistered + count as u64
    );
}

#[test]
fn test_final_state_matches_last_operation_per_id() {
    let registry = SignalRegistry::new();

    let mut handles = vec![];

    // Each worker owns a disjoint id range, so the last operation per id is
    // well defined even though the table itself is shared.
    for worker in 0..THREADS {
        let registry = registry.clone();

        handles.push(thread::spawn(move || {
            let mut rng = StdRng::seed_from_u64(0xC0FFEE + worker as u64);
            let base = worker as u64 * IDS_PER_THREAD;
            let mut expected_registered = vec![false; IDS_PER_THREAD as usize];

            for _ in 0..OPS_PER_THREAD {
                let slot = rng.gen_range(0..IDS_PER_THREAD);
                let id = DelegateId(base + slot);
                match rng.gen_range(0..3u8) {
                    0 => {
                        registry.register(id, |_| {});
                        expected_registered[slot as usize] = true;
                    }
                    1 => {
                        registry.unregister(id);
                        expected_registered[slot as usize] = false;
                    }
                    _ => {
                        registry.emit(id, "tick").unwrap();
                    }
                }
            }

            (base, expected_registered)
        }));
    }

    for handle in handles {
        let (base, expected_registered) = handle.join().unwrap();
        for (slot, expected) in expected_registered.into_iter().enumerate() {
            let id = DelegateId(base + slot as u64);
            assert_eq!(
                registry.is_registered(id),
                expected,
                "id {} does not match its last completed operation",
                id
            );
        }
    }
}

#[test]
fn test_concurrent_emitters_against_one_delegate() {
    let registry = SignalRegistry::new();
    let deliveries = Arc::new(AtomicU64::new(0));

    let counter = Arc::clone(&deliveries);
    registry.register(DelegateId(1), move |_| {
        counter.fetch_add(1, Ordering::Relaxed);
    });

    let mut handles = vec![];
    for _ in 0..THREADS {
        let registry = registry.clone();
        handles.push(thread::spawn(move || {
            for _ in 0..OPS_PER_THREAD {
                registry.emit(DelegateId(1), "tick").unwrap();
            }
        }));
    }

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(
        deliveries.load(Ordering::Relaxed),
        (THREADS * OPS_PER_THREAD) as u64
    );

    registry.unregister(DelegateId(1));
    registry.emit(DelegateId(1), "tick").unwrap();
    assert_eq!(
        deliveries.load(Ordering::Relaxed),
        (THREADS * OPS_PER_THREAD) as u64
    );
}
