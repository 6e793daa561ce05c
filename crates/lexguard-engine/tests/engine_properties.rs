use lexguard_core::{Category, SensitiveWord, WordSnapshot};
use lexguard_engine::Lexguard;
use proptest::prelude::*;

fn category() -> impl Strategy<Value = Category> {
    prop_oneof![
        Just(Category::NONE),
        Just(Category::VIOLENCE),
        Just(Category::SCAM),
        Just(Category::DRUGS | Category::PROFANITY),
    ]
}

fn dictionary() -> impl Strategy<Value = WordSnapshot> {
    prop::collection::hash_map("[abc]{1,3}", category(), 1..6)
}

fn engine(words: WordSnapshot) -> Lexguard {
    Lexguard::builder().custom_words(words).build().unwrap()
}

proptest! {
    #[test]
    fn inserted_word_is_found_verbatim(
        word in "[a-z]{2,6}",
        prefix in "[0-9 ]{0,5}",
        suffix in "[0-9 ]{0,5}"
    ) {
        let guard = engine([(word.clone(), Category::SCAM)].into_iter().collect());
        let text = format!("{prefix}{word}{suffix}");
        prop_assert!(guard.detect(&text));
        let hit = guard.match_first(&text).unwrap();
        prop_assert_eq!(&hit.word, &word);
        prop_assert_eq!(hit.start, prefix.chars().count());
    }

    #[test]
    fn case_variants_keep_their_own_category(
        words in prop::collection::hash_map("[aAbB]{1,3}", category(), 1..8)
    ) {
        let guard = engine(words.clone());
        for (word, cat) in &words {
            let len = word.chars().count();
            let whole = |hits: Vec<SensitiveWord>| {
                hits.into_iter().find(|h| (h.start, h.end) == (0, len))
            };

            let hit = whole(guard.match_all(word));
            prop_assert_eq!(hit.map(|h| (h.word, h.category)), Some((word.clone(), *cat)));
            let hit = whole(guard.match_all_in(word, &[*cat]));
            prop_assert_eq!(hit.map(|h| (h.word, h.category)), Some((word.clone(), *cat)));
        }
    }

    #[test]
    fn match_all_is_sorted_by_start(words in dictionary(), text in "[abcd ]{0,30}") {
        let hits = engine(words).match_all(&text);
        for pair in hits.windows(2) {
            prop_assert!(pair[0].start <= pair[1].start);
        }
    }

    #[test]
    fn filtered_matches_are_the_overlapping_subset(
        words in dictionary(),
        text in "[abcd]{0,30}",
        query in category()
    ) {
        let guard = engine(words);
        let all = guard.match_all(&text);
        let filtered = guard.match_all_in(&text, &[query]);
        let expected: Vec<_> = all
            .iter()
            .filter(|hit| {
                if hit.category.is_none() {
                    query.is_none()
                } else {
                    hit.category.intersects(query)
                }
            })
            .cloned()
            .collect();
        prop_assert_eq!(filtered, expected);
    }

    #[test]
    fn masking_preserves_length_without_overlaps(
        words in dictionary(),
        text in "[abcd ]{0,30}"
    ) {
        let guard = engine(words);
        let hits = guard.match_all(&text);
        let masked = guard.replace(&text, '*');
        if hits.windows(2).all(|p| !p[0].overlaps(&p[1])) {
            prop_assert_eq!(masked.chars().count(), text.chars().count());
            prop_assert_eq!(
                masked.chars().filter(|c| *c == '*').count(),
                hits.iter().map(|h| h.len()).sum::<usize>()
            );
        }
    }

    #[test]
    fn masking_removes_every_hit(words in dictionary(), text in "[abcd ]{0,30}") {
        let guard = engine(words);
        let masked = guard.replace(&text, '*');
        prop_assert!(!guard.detect(&masked));
    }

    #[test]
    fn text_without_hits_is_unchanged(words in dictionary(), text in "[xyz ]{0,30}") {
        let guard = engine(words);
        prop_assert_eq!(guard.replace(&text, '*'), text);
    }
}
