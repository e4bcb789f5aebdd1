//! Golden brute-force cross-checks for `lookup`'s pruned BFS against a
//! straightforward O(dictionary size) distance scan, plus coverage for the
//! trickier split-scoring corners of `lookup_compound`: the prefix-overflow
//! cheap-reject in the main lookup loop, and the bigram-present freq update
//! in the split path.

use symspell::{Suggestion, SymSpell, SymSpellConfig, Verbosity, bounded_osa_distance};

const WORDS: &[&str] = &[
    "hello", "hell", "help", "helper", "helping", "held", "world", "word", "words", "worked",
    "worker", "working", "wonder", "wander", "wonderful", "abandon", "abandons", "abandoned",
    "handler", "handled", "handle", "handles", "abcdefg", "abcdef", "abcde",
];

fn build_engine(max_edit_distance: i64, prefix_length: usize) -> SymSpell {
    let mut engine = SymSpell::new(
        SymSpellConfig::new()
            .with_max_dictionary_edit_distance(max_edit_distance)
            .with_prefix_length(prefix_length)
            .with_count_threshold(1),
    );
    let lines: Vec<String> = WORDS
        .iter()
        .enumerate()
        .map(|(i, w)| format!("{w}\t{}", (i + 1) * 10))
        .collect();
    engine.load_dictionary(lines).unwrap();
    engine
}

fn brute_force_all(input: &str, max_edit_distance: i64) -> Vec<Suggestion> {
    let mut found: Vec<Suggestion> = Vec::new();
    for (i, &w) in WORDS.iter().enumerate() {
        if w == input {
            continue;
        }
        let d = bounded_osa_distance(input, w, max_edit_distance);
        if d >= 0 {
            found.push(Suggestion::new(w, d, ((i + 1) * 10) as i64));
        }
    }
    found.sort_by(|a, b| a.distance.cmp(&b.distance).then_with(|| b.count.cmp(&a.count)));
    found
}

fn as_set(suggestions: &[Suggestion]) -> std::collections::BTreeSet<(String, i64)> {
    suggestions.iter().map(|s| (s.word.clone(), s.distance)).collect()
}

#[test]
fn lookup_all_never_exceeds_the_brute_force_distance_scan() {
    // The pruned BFS must never report a candidate/distance pair the
    // brute-force scan disagrees with — the prefix-overflow cheap-reject
    // (spec's first Open Question) may cause it to miss a candidate it could
    // legally have kept, but it must never invent one.
    for max_edit_distance in [1, 2, 3] {
        for prefix_length in [max_edit_distance.max(1) as usize, 4, 7] {
            let engine = build_engine(max_edit_distance, prefix_length);
            for &input in &["helo", "wrold", "handlr", "abcde", "wondr", "xyz"] {
                let pruned = engine.lookup(input, Verbosity::All).unwrap();
                let brute = brute_force_all(input, max_edit_distance);
                let brute_set = as_set(&brute);
                for s in &pruned {
                    assert!(
                        brute_set.contains(&(s.word.clone(), s.distance)),
                        "pruned lookup invented {:?} at distance {} for input={input:?} \
                         max_edit_distance={max_edit_distance} prefix_length={prefix_length}",
                        s.word,
                        s.distance
                    );
                }
            }
        }
    }
}

#[test]
fn lookup_all_finds_the_closest_known_correction() {
    // Regardless of the prefix-overflow precheck's exact reject boundary,
    // the nearest dictionary word at distance 1 must always surface.
    let engine = build_engine(2, 7);
    let pruned = engine.lookup("helo", Verbosity::All).unwrap();
    assert!(pruned.iter().any(|s| s.word == "hello" && s.distance == 1));
}

#[test]
fn lookup_top_is_subset_of_all() {
    let engine = build_engine(2, 7);
    for &input in &["helo", "wrold", "handlr"] {
        let top = engine.lookup(input, Verbosity::Top).unwrap();
        let all = engine.lookup(input, Verbosity::All).unwrap();
        let all_set = as_set(&all);
        for s in &top {
            assert!(all_set.contains(&(s.word.clone(), s.distance)));
        }
    }
}

#[test]
fn lookup_closest_only_contains_minimum_distance_candidates() {
    let engine = build_engine(2, 7);
    let closest = engine.lookup("helo", Verbosity::Closest).unwrap();
    let min_distance = closest.iter().map(|s| s.distance).min().unwrap();
    assert!(closest.iter().all(|s| s.distance == min_distance));
}

#[test]
fn compound_split_freq_without_bigram_uses_naive_bayes_estimate_when_single_lookup_empty() {
    // "abcdefg" is in the dictionary but "ab cdefg" / "abcdef g" are not
    // registered bigrams, so the split path falls back to the Naive-Bayes
    // independence estimate. Regardless of the exact estimate, it must not
    // crash and must not outrank an exact whole-word match.
    let engine = build_engine(2, 7);
    let result = engine.lookup_compound("abcdefg", 2).unwrap();
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].word, "abcdefg");
}

#[test]
fn compound_split_with_registered_bigram_floors_freq_at_the_bigram_count() {
    // "helloworld" has no single-word match close enough to qualify, but
    // splits cleanly into two dictionary words whose bigram is registered.
    // Whichever sub-case of the split-freq update applies, the result must
    // never score below the registered bigram count itself.
    let mut engine = SymSpell::new(
        SymSpellConfig::new()
            .with_max_dictionary_edit_distance(2)
            .with_prefix_length(7)
            .with_count_threshold(1),
    );
    engine
        .load_dictionary(vec!["hello\t10000".to_string(), "world\t8000".to_string()])
        .unwrap();
    engine
        .load_bigram_dictionary(vec!["hello world\t700".to_string()])
        .unwrap();

    let result = engine.lookup_compound("helloworld", 2).unwrap();
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].word, "hello world");
    assert!(
        result[0].count >= 700,
        "split freq {} fell below the registered bigram count",
        result[0].count
    );
}
