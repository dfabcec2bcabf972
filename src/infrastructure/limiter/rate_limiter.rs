use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use dashmap::DashMap;
use parking_lot::Mutex;
use tokio::time::sleep;
use tracing::debug;

/// Outcome of a limiter check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allowed { remaining: u32 },
    Limited { retry_after: Duration },
}

#[derive(Debug)]
struct WindowSlot {
    window_start: Instant,
    count: u32,
    last_seen: Instant,
}

impl WindowSlot {
    fn new(now: Instant) -> Self {
        WindowSlot {
            window_start: now,
            count: 0,
            last_seen: now,
        }
    }
}

/// Fixed-window counter keyed by an arbitrary string. The contact flow
/// keys on the normalized sender email, so one chatty visitor cannot
/// flood the inbox while others stay unaffected.
#[derive(Clone)]
pub struct SubmissionLimiter {
    slots: Arc<DashMap<String, Arc<Mutex<WindowSlot>>>>,
    limit: u32,
    window: Duration,
}

impl SubmissionLimiter {
    pub fn new(limit: u32, window: Duration) -> Self {
        SubmissionLimiter {
            slots: Arc::new(DashMap::new()),
            limit,
            window,
        }
    }

    /// Counts one attempt against `key` and decides whether it may proceed.
    pub fn check(&self, key: &str) -> Decision {
        let slot = self.slot_for(key);
        let mut slot = slot.lock();
        let now = Instant::now();
        slot.last_seen = now;

        if now.duration_since(slot.window_start) >= self.window {
            slot.window_start = now;
            slot.count = 0;
        }

        if slot.count < self.limit {
            slot.count += 1;
            Decision::Allowed {
                remaining: self.limit - slot.count,
            }
        } else {
            Decision::Limited {
                retry_after: self.window - now.duration_since(slot.window_start),
            }
        }
    }

    fn slot_for(&self, key: &str) -> Arc<Mutex<WindowSlot>> {
        if let Some(existing) = self.slots.get(key) {
            existing.clone()
        } else {
            let fresh = Arc::new(Mutex::new(WindowSlot::new(Instant::now())));
            match self.slots.entry(key.to_string()) {
                dashmap::mapref::entry::Entry::Occupied(entry) => entry.get().clone(),
                dashmap::mapref::entry::Entry::Vacant(entry) => {
                    entry.insert(fresh.clone());
                    fresh
                }
            }
        }
    }

    /// Removes slots that have not been touched for `idle_ttl`.
    pub fn evict_idle(&self, idle_ttl: Duration) {
        let now = Instant::now();
        let stale: Vec<String> = self
            .slots
            .iter()
            .filter_map(|entry| {
                let slot = entry.value().lock();
                if now.duration_since(slot.last_seen) > idle_ttl {
                    Some(entry.key().clone())
                } else {
                    None
                }
            })
            .collect();

        if !stale.is_empty() {
            debug!("Evicting {} idle limiter slots", stale.len());
        }
        for key in stale {
            self.slots.remove(&key);
        }
    }

    /// Spawns the background sweep that keeps the slot map bounded.
    /// Call once at startup, from within a tokio runtime.
    pub fn spawn_idle_eviction(&self, idle_ttl: Duration) {
        let limiter = self.clone();
        tokio::spawn(async move {
            let interval = Duration::from_secs(30);
            loop {
                sleep(interval).await;
                limiter.evict_idle(idle_ttl);
            }
        });
    }
}
