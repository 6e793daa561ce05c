//! Observer registry and notification throttling.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock};
use std::time::{Duration, Instant};

use lexguard_core::config::DictionaryConfig;
use lexguard_core::{WordObserver, WordSnapshot};

/// Handle returned by `add_observer`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObserverId(u64);

/// When mutations are pushed to observers.
///
/// Bulk operations always notify. The policy only decides what happens
/// after single-item `add_word` / `remove_word` calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyPolicy {
    /// Notify after every mutating call.
    Immediate,
    /// Notify a single-item change only when `interval` has elapsed since the
    /// previous notification. A change inside the interval is kept pending
    /// and published by the next due notification, `flush_if_due` or `flush`.
    Throttled { interval: Duration },
}

impl NotifyPolicy {
    pub fn from_config(config: &DictionaryConfig) -> Self {
        if config.effective_notify_immediately() {
            Self::Immediate
        } else {
            Self::Throttled {
                interval: Duration::from_millis(config.effective_notify_interval_ms()),
            }
        }
    }
}

impl Default for NotifyPolicy {
    fn default() -> Self {
        Self::from_config(&DictionaryConfig::default())
    }
}

pub(crate) struct Observers {
    entries: RwLock<Vec<(ObserverId, Arc<dyn WordObserver>)>>,
    next_id: AtomicU64,
    policy: NotifyPolicy,
    last_notify: Mutex<Option<Instant>>,
    /// Set when a single-item change was not delivered yet.
    pending: AtomicBool,
    /// Held while a snapshot is taken and delivered, so observers see
    /// snapshots in the order they were taken.
    delivery: Mutex<()>,
}

impl Observers {
    pub(crate) fn new(policy: NotifyPolicy) -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
            next_id: AtomicU64::new(1),
            policy,
            last_notify: Mutex::new(None),
            pending: AtomicBool::new(false),
            delivery: Mutex::new(()),
        }
    }

    pub(crate) fn policy(&self) -> NotifyPolicy {
        self.policy
    }

    pub(crate) fn add(&self, observer: Arc<dyn WordObserver>) -> ObserverId {
        let id = ObserverId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id, observer));
        id
    }

    pub(crate) fn remove(&self, id: ObserverId) -> bool {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        let before = entries.len();
        entries.retain(|(existing, _)| *existing != id);
        entries.len() != before
    }

    pub(crate) fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Notify after a single-item mutation, subject to the policy.
    pub(crate) fn notify_single(&self, snapshot: impl FnOnce() -> WordSnapshot) {
        if self.throttled() {
            self.pending.store(true, Ordering::SeqCst);
            return;
        }
        self.notify(snapshot);
    }

    /// Deliver a pending single-item change once the throttle interval has
    /// passed. Returns whether a notification was sent.
    pub(crate) fn notify_if_due(&self, snapshot: impl FnOnce() -> WordSnapshot) -> bool {
        if !self.pending.load(Ordering::SeqCst) || self.throttled() {
            return false;
        }
        self.notify(snapshot);
        true
    }

    pub(crate) fn has_pending(&self) -> bool {
        self.pending.load(Ordering::SeqCst)
    }

    /// True while the previous notification is younger than the interval.
    fn throttled(&self) -> bool {
        match self.policy {
            NotifyPolicy::Immediate => false,
            NotifyPolicy::Throttled { interval } => self
                .last_notify
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .is_some_and(|at| at.elapsed() < interval),
        }
    }

    /// Deliver a fresh snapshot to every observer.
    ///
    /// The subscriber list is copied before delivery so observers may
    /// subscribe or unsubscribe from inside their callback. Observers must not
    /// mutate the store from the callback. A panicking observer is logged and
    /// skipped when panics unwind; under `panic = "abort"` (the workspace
    /// release profile) it aborts the process instead.
    pub(crate) fn notify(&self, snapshot: impl FnOnce() -> WordSnapshot) {
        let _delivery = self.delivery.lock().unwrap_or_else(PoisonError::into_inner);
        *self.last_notify.lock().unwrap_or_else(PoisonError::into_inner) = Some(Instant::now());
        self.pending.store(false, Ordering::SeqCst);

        let entries: Vec<(ObserverId, Arc<dyn WordObserver>)> = self
            .entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        if entries.is_empty() {
            return;
        }

        let words = snapshot();
        tracing::info!(
            observers = entries.len(),
            words = words.len(),
            "notifying word observers"
        );
        for (id, observer) in &entries {
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                observer.on_words_changed(&words);
            }));
            if result.is_err() {
                tracing::warn!(observer = id.0, "word observer panicked, continuing");
            }
        }
    }
}

impl std::fmt::Debug for Observers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observers")
            .field("count", &self.len())
            .field("policy", &self.policy)
            .finish()
    }
}
