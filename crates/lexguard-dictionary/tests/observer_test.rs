use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use lexguard_core::{CancellationToken, Category, WordSnapshot};
use lexguard_dictionary::{DefaultWordLists, NotifyPolicy, WordStore};
use test_fixtures::{PanickingObserver, RecordingObserver};

const LONG: Duration = Duration::from_secs(3600);

#[test]
fn immediate_policy_notifies_every_mutation() {
    let store = WordStore::with_policy(NotifyPolicy::Immediate);
    let observer = RecordingObserver::new();
    store.add_observer(observer.clone());

    store.add_word("a", Category::NONE).unwrap();
    store.add_word("b", Category::VIOLENCE).unwrap();
    store.remove_word("a");
    assert_eq!(observer.count(), 3);

    let last = observer.last().unwrap();
    assert_eq!(last.len(), 1);
    assert_eq!(last.get("b"), Some(&Category::VIOLENCE));
}

#[test]
fn throttled_single_items_within_interval_are_coalesced() {
    let store = WordStore::with_policy(NotifyPolicy::Throttled { interval: LONG });
    let observer = RecordingObserver::new();
    store.add_observer(observer.clone());

    store.add_word("a", Category::NONE).unwrap();
    assert_eq!(observer.count(), 1, "first change is published");
    store.add_word("b", Category::NONE).unwrap();
    store.remove_word("a");
    assert_eq!(observer.count(), 1);
    assert!(store.has_pending());
    assert!(!store.flush_if_due(), "interval has not passed");

    store.flush();
    assert_eq!(observer.count(), 2);
    assert_eq!(observer.last().unwrap().len(), 1);
    assert!(!store.has_pending());
}

#[test]
fn throttled_bulk_operations_always_notify() {
    let store = WordStore::with_policy(NotifyPolicy::Throttled { interval: LONG });
    let observer = RecordingObserver::new();
    store.add_observer(observer.clone());

    store.add_words([("a", Category::NONE), ("b", Category::NONE)]).unwrap();
    store.remove_words(["a"]);
    store
        .load_source("c\nd", Category::SCAM, &CancellationToken::new())
        .unwrap();
    store.clear();
    assert_eq!(observer.count(), 4);
    assert!(observer.last().unwrap().is_empty());
}

#[test]
fn throttle_reopens_after_interval() {
    let store = WordStore::with_policy(NotifyPolicy::Throttled {
        interval: Duration::from_millis(20),
    });
    let observer = RecordingObserver::new();
    store.add_observer(observer.clone());

    store.add_word("a", Category::NONE).unwrap();
    std::thread::sleep(Duration::from_millis(40));
    store.add_word("b", Category::NONE).unwrap();
    assert_eq!(observer.count(), 2);
}

#[test]
fn suppressed_change_is_delivered_once_due() {
    let store = WordStore::with_policy(NotifyPolicy::Throttled {
        interval: Duration::from_millis(20),
    });
    let observer = RecordingObserver::new();
    store.add_observer(observer.clone());

    store.add_word("a", Category::NONE).unwrap();
    store.add_word("b", Category::NONE).unwrap();
    assert_eq!(observer.count(), 1);
    assert!(store.has_pending());

    std::thread::sleep(Duration::from_millis(40));
    assert!(store.flush_if_due());
    assert_eq!(observer.count(), 2);
    assert!(observer.last().unwrap().contains_key("b"));

    assert!(!store.flush_if_due(), "nothing left to deliver");
    assert_eq!(observer.count(), 2);
}

#[test]
fn bulk_notification_clears_pending_change() {
    let store = WordStore::with_policy(NotifyPolicy::Throttled { interval: LONG });
    let observer = RecordingObserver::new();
    store.add_observer(observer.clone());

    store.add_word("a", Category::NONE).unwrap();
    store.add_word("b", Category::NONE).unwrap();
    assert!(store.has_pending());
    store.add_words([("c", Category::NONE)]).unwrap();
    assert!(!store.has_pending());
    assert_eq!(observer.last().unwrap().len(), 3);
}

#[test]
fn cancelled_load_still_publishes_partial_progress() {
    let store = WordStore::with_policy(NotifyPolicy::Immediate);
    let observer = RecordingObserver::new();
    store.add_observer(observer.clone());

    let result = store.load_custom_words(
        &test_fixtures::generated_words(10),
        &CancellationToken::cancelled(),
    );
    assert!(result.is_err());
    assert_eq!(observer.count(), 1);
}

#[test]
fn panicking_observer_does_not_block_others() {
    let store = WordStore::with_policy(NotifyPolicy::Immediate);
    let before = RecordingObserver::new();
    let after = RecordingObserver::new();
    store.add_observer(before.clone());
    store.add_observer(Arc::new(PanickingObserver));
    store.add_observer(after.clone());

    store.add_word("x", Category::NONE).unwrap();
    assert_eq!(before.count(), 1);
    assert_eq!(after.count(), 1);
}

#[test]
fn removed_observer_stops_receiving() {
    let store = WordStore::with_policy(NotifyPolicy::Immediate);
    let observer = RecordingObserver::new();
    let id = store.add_observer(observer.clone());
    assert_eq!(store.observer_count(), 1);

    store.add_word("x", Category::NONE).unwrap();
    assert!(store.remove_observer(id));
    assert!(!store.remove_observer(id));
    store.add_word("y", Category::NONE).unwrap();
    assert_eq!(observer.count(), 1);
}

#[test]
fn closures_are_observers() {
    let store = WordStore::with_policy(NotifyPolicy::Immediate);
    let seen = Arc::new(AtomicUsize::new(0));
    let counter = seen.clone();
    store.add_observer(Arc::new(move |words: &WordSnapshot| {
        counter.store(words.len(), Ordering::SeqCst);
    }));
    store.add_words([("a", Category::NONE), ("b", Category::NONE)]).unwrap();
    assert_eq!(seen.load(Ordering::SeqCst), 2);
}

#[test]
fn default_bundle_loads_in_one_notification() {
    let store = WordStore::with_policy(NotifyPolicy::Immediate);
    let observer = RecordingObserver::new();
    store.add_observer(observer.clone());

    let bundle = DefaultWordLists::new()
        .with_list(Category::VIOLENCE, "bad\nkill")
        .with_general("bad\nheck");
    let applied = store
        .load_default_words(&bundle, &CancellationToken::new())
        .unwrap();
    assert_eq!(applied, 4);
    assert_eq!(observer.count(), 1);
    assert_eq!(store.category_of("bad"), Some(Category::VIOLENCE));
    assert_eq!(store.category_of("heck"), Some(Category::NONE));
}

#[test]
fn default_policy_is_throttled_100ms() {
    assert_eq!(
        NotifyPolicy::default(),
        NotifyPolicy::Throttled {
            interval: Duration::from_millis(100)
        }
    );
    assert_eq!(WordStore::new().policy(), NotifyPolicy::default());
}
