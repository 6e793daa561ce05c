use lexguard_automaton::{AhoCorasick, Matcher, Pattern, Trie};
use lexguard_core::{Category, SensitiveWord};

fn trie(words: &[&str]) -> Trie {
    Trie::from_patterns(words.iter().map(|w| Pattern::new(*w, Category::NONE)).collect())
}

fn spans(hits: &[SensitiveWord]) -> Vec<(&str, usize, usize)> {
    hits.iter()
        .map(|h| (h.word.as_str(), h.start, h.end))
        .collect()
}

#[test]
fn reports_shortest_word_per_start() {
    let t = trie(&["ab", "abc", "bc"]);
    assert_eq!(spans(&t.match_all("abc")), vec![("ab", 0, 2), ("bc", 1, 3)]);
}

#[test]
fn match_first_is_earliest_start() {
    let t = trie(&["abcd", "bc"]);
    let hit = t.match_first("abcd").unwrap();
    assert_eq!((hit.word.as_str(), hit.start, hit.end), ("abcd", 0, 4));

    // The automaton reports the earliest end instead.
    let ac = AhoCorasick::from_patterns(vec![
        Pattern::new("abcd", Category::NONE),
        Pattern::new("bc", Category::NONE),
    ]);
    assert_eq!(ac.match_first("abcd").unwrap().word, "bc");
}

#[test]
fn cjk_text() {
    let t = Trie::from_patterns(vec![
        Pattern::new("敏感", Category::PORNOGRAPHY),
        Pattern::new("词", Category::POLITICAL),
    ]);
    assert_eq!(
        spans(&t.match_all("这是一段包含敏感词的文本")),
        vec![("敏感", 6, 8), ("词", 8, 9)]
    );
}

#[test]
fn empty_inputs() {
    let t = trie(&["", "x"]);
    assert_eq!(t.len(), 1);
    assert!(t.match_all("").is_empty());
    assert!(Trie::new().match_first("x").is_none());
    assert!(!t.detect("yyy"));
}

#[test]
fn shared_key_yields_one_hit_per_word() {
    let t = Trie::from_patterns(vec![
        Pattern::with_key("bad", "bad", Category::NONE),
        Pattern::with_key("bad", "Bad", Category::VIOLENCE),
    ]);
    let hits = t.match_all("so bad");
    assert_eq!(spans(&hits), vec![("Bad", 3, 6), ("bad", 3, 6)]);
    assert_eq!(hits[0].category, Category::VIOLENCE);
    assert_eq!(hits[1].category, Category::NONE);
}
