//! Readers racing dictionary writers and option swaps.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use lexguard_core::config::{DictionaryConfig, NormalizeConfig};
use lexguard_core::{Category, LexguardConfig};
use lexguard_engine::Lexguard;
use rayon::prelude::*;
use test_fixtures::words;

fn immediate_engine() -> Lexguard {
    let config = LexguardConfig {
        dictionary: DictionaryConfig {
            notify_immediately: Some(true),
            ..Default::default()
        },
        ..Default::default()
    };
    Lexguard::builder()
        .config(config)
        .custom_words(words(&[("bad", Category::VIOLENCE)]))
        .build()
        .unwrap()
}

#[test]
fn readers_always_see_a_complete_automaton() {
    let guard = Arc::new(immediate_engine());
    let done = Arc::new(AtomicBool::new(false));

    std::thread::scope(|scope| {
        let writer = {
            let guard = guard.clone();
            let done = done.clone();
            scope.spawn(move || {
                for i in 0..200 {
                    guard.add_word(&format!("extra{i}"), Category::SCAM).unwrap();
                    if i % 50 == 0 {
                        guard.remove_words((0..i).map(|j| format!("extra{j}")));
                    }
                }
                done.store(true, Ordering::SeqCst);
            })
        };

        while !done.load(Ordering::SeqCst) {
            (0..64).into_par_iter().for_each(|_| {
                let hit = guard.match_first("so bad today").expect("stable word visible");
                assert_eq!((hit.start, hit.end), (3, 6));
                assert_eq!(guard.replace("so bad today", '*'), "so *** today");
            });
        }
        writer.join().unwrap();
    });

    assert!(guard.detect("extra199"));
}

#[test]
fn concurrent_writers_end_consistent() {
    let guard = immediate_engine();
    (0..500).into_par_iter().for_each(|i| {
        guard.add_word(&format!("w{i:03}"), Category::NONE).unwrap();
    });

    assert_eq!(guard.word_count(), 501);
    assert_eq!(guard.detector().len(), 501);
    assert!((0..500).all(|i| guard.detect(&format!("w{i:03}"))));
}

#[test]
fn option_swaps_race_with_queries() {
    let mut guard = immediate_engine();
    let detector = guard.detector().clone();

    std::thread::scope(|scope| {
        let reader = scope.spawn(|| {
            for _ in 0..500 {
                // Lowercase text matches under every option set used below.
                assert!(detector.detect("bad"));
            }
        });
        for i in 0..50 {
            guard.set_options(NormalizeConfig {
                skip_whitespace: Some(i % 2 == 0),
                ..Default::default()
            });
        }
        reader.join().unwrap();
    });
}
