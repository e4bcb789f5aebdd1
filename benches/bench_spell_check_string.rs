use std::fs;

use criterion::{Criterion, criterion_group, criterion_main};
use symspell::{SymSpell, SymSpellConfig, Verbosity};

fn build_engine() -> SymSpell {
    let dict_file = "words_100k.txt".to_string();
    let max_edit_distance = 2;

    let dict_lines: Vec<String> = fs::read_to_string(&dict_file)
        .expect("Unable to read dictionary file")
        .lines()
        .map(str::to_string)
        .collect();

    let mut engine = SymSpell::new(
        SymSpellConfig::new()
            .with_max_dictionary_edit_distance(max_edit_distance)
            .with_prefix_length(7)
            .with_count_threshold(1),
    );
    engine.load_dictionary(dict_lines).expect("failed to load dictionary");
    engine
}

fn bench_spell_check_string(c: &mut Criterion) {
    let text_content = "This is a short sntence with some misspelled wrds. It is used for testing the spell checker functionality.".to_string();

    let engine = build_engine();

    let words: Vec<String> = text_content
        .split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|w| !w.is_empty())
        .map(|w| w.to_lowercase())
        .collect();

    c.bench_function("spell_check_words", |b| {
        b.iter(|| {
            let _ = engine.correct_many(&words, Verbosity::Top);
        })
    });
}

fn bench_lookup_compound(c: &mut Criterion) {
    let text_content = "This is a short sntence with some misspelled wrds.".to_string();
    let engine = build_engine();

    c.bench_function("lookup_compound", |b| {
        b.iter(|| {
            let _ = engine.lookup_compound(&text_content, 2);
        })
    });
}

criterion_group!(benches, bench_spell_check_string, bench_lookup_compound);
criterion_main!(benches);
