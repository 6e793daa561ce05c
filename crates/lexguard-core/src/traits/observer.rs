//! Receives dictionary snapshots after store mutations.

use crate::types::WordSnapshot;

/// Subscriber to dictionary changes.
///
/// The store calls `on_words_changed` with a full copy of its contents,
/// never a view into a map that is still being mutated. Implementations
/// must be `Send + Sync` because notifications come from whichever thread
/// performed the mutation.
///
/// A panic inside the callback is caught and logged only when the build
/// unwinds. Release builds of this workspace use `panic = "abort"`, so there
/// a panicking observer ends the process.
pub trait WordObserver: Send + Sync {
    fn on_words_changed(&self, words: &WordSnapshot);
}

impl<F> WordObserver for F
where
    F: Fn(&WordSnapshot) + Send + Sync,
{
    fn on_words_changed(&self, words: &WordSnapshot) {
        self(words)
    }
}
