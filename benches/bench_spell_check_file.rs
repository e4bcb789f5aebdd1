use std::fs;
use std::time::Instant;

use symspell::{SymSpell, SymSpellConfig, Verbosity};

fn main() {
    let dict_file = "words_100k.txt".to_string();
    let text_file = "benches/test_text.txt".to_string();
    let max_edit_distance = 3;

    let text_content = fs::read_to_string(&text_file).expect(
        "Unable to read text file, please ensure you have a file named test_text.txt in the current directory with any text contents.",
    );
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

    let words: Vec<String> = text_content
        .split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|w| !w.is_empty())
        .map(|w| w.to_lowercase())
        .collect();

    let start_time = Instant::now();

    let _ = engine.correct_many(&words, Verbosity::Top);

    let elapsed_time = start_time.elapsed();
    println!("Elapsed time for spell checking: {elapsed_time:?}");
    println!("Words corrected per second: {}", words.len() as f64 / elapsed_time.as_secs_f64());
}
