use std::{
    env,
    io::{self, BufRead, Write},
    path::Path,
};

use symspell::{SymSpell, SymSpellConfig, Verbosity};

const MAX_EDIT_DISTANCE: i64 = 2;

fn main() -> io::Result<()> {
    tracing_subscriber::fmt::init();

    let dict_path = env::args().nth(1).unwrap_or_else(|| "words_100k.txt".into());
    let bigram_path = env::args().nth(2);

    if !Path::new(&dict_path).exists() {
        eprintln!("Dictionary file not found: {dict_path}");
        std::process::exit(1);
    }

    let mut engine = SymSpell::new(
        SymSpellConfig::new()
            .with_max_dictionary_edit_distance(MAX_EDIT_DISTANCE)
            .with_prefix_length(7)
            .with_count_threshold(1),
    );
    let lines = read_lines(&dict_path)?;
    let loaded = engine
        .load_dictionary(lines)
        .unwrap_or_else(|e| panic!("failed to load {dict_path}: {e}"));
    println!("loaded {loaded} words from {dict_path}");

    if let Some(bigram_path) = bigram_path.filter(|p| Path::new(p).exists()) {
        let lines = read_lines(&bigram_path)?;
        let loaded = engine
            .load_bigram_dictionary(lines)
            .unwrap_or_else(|e| panic!("failed to load {bigram_path}: {e}"));
        println!("loaded {loaded} bigrams from {bigram_path}");
    }

    println!("SymSpell REPL - dictionary: {dict_path}");
    println!(":word        -> single-word suggestions");
    println!(":c some text -> compound/phrase correction");
    println!(":q           -> quit");

    let mut input = String::new();
    loop {
        print!("> ");
        io::stdout().flush()?;
        input.clear();
        if io::stdin().read_line(&mut input)? == 0 {
            break; // EOF
        }
        let trimmed = input.trim();
        if trimmed == ":q" {
            break;
        }
        if trimmed.is_empty() {
            continue;
        }

        if let Some(phrase) = trimmed.strip_prefix(":c ") {
            match engine.lookup_compound(phrase, MAX_EDIT_DISTANCE) {
                Ok(suggestions) => {
                    for s in suggestions {
                        println!("  {phrase}  ->  {} (distance {}, count {})", s.word, s.distance, s.count);
                    }
                }
                Err(e) => eprintln!("  error: {e}"),
            }
            continue;
        }

        for token in trimmed.split_whitespace() {
            let word = token.trim_matches(|c: char| !c.is_alphanumeric()).to_lowercase();
            if word.is_empty() {
                continue;
            }
            match engine.lookup(&word, Verbosity::Top) {
                Ok(suggestions) if !suggestions.is_empty() => {
                    let rendered: Vec<String> = suggestions.iter().map(|s| s.word.clone()).collect();
                    println!("  {word}  ->  {}", rendered.join(", "));
                }
                Ok(_) => {}
                Err(e) => eprintln!("  error: {e}"),
            }
        }
    }
    Ok(())
}

fn read_lines(path: &str) -> io::Result<Vec<String>> {
    let file = std::fs::File::open(path)?;
    io::BufReader::new(file).lines().collect()
}
