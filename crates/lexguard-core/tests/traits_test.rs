//! Tests for cancellation and observer traits.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use lexguard_core::traits::{Cancellable, CancellationToken, WordObserver};
use lexguard_core::{Category, WordSnapshot};

#[test]
fn cancellation_is_shared_between_clones() {
    let token = CancellationToken::new();
    let clone = token.clone();
    assert!(!clone.is_cancelled());
    token.cancel();
    assert!(clone.is_cancelled());
    assert!(CancellationToken::cancelled().is_cancelled());
}

#[test]
fn closures_are_observers() {
    let seen = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&seen);
    let observer: Arc<dyn WordObserver> = Arc::new(move |words: &WordSnapshot| {
        counter.fetch_add(words.len(), Ordering::SeqCst);
    });

    let mut words = WordSnapshot::new();
    words.insert("bad".to_string(), Category::VIOLENCE);
    words.insert("worse".to_string(), Category::NONE);
    observer.on_words_changed(&words);

    assert_eq!(seen.load(Ordering::SeqCst), 2);
}
