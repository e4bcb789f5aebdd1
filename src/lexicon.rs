use std::collections::HashMap;
use std::sync::Arc;

// words interned as Arc<str> so DeleteIndex buckets can share the allocation
#[derive(Debug, Default)]
pub struct Lexicon {
    pub words: HashMap<Arc<str>, i64>,
    pub below_threshold: HashMap<Arc<str>, i64>,
    pub bigrams: HashMap<String, i64>,
    pub bigram_count_min: i64,
}

impl Lexicon {
    pub fn new() -> Self {
        Self {
            words: HashMap::new(),
            below_threshold: HashMap::new(),
            bigrams: HashMap::new(),
            bigram_count_min: i64::MAX,
        }
    }

    pub fn count(&self, word: &str) -> Option<i64> {
        self.words.get(word).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

pub fn saturating_add(a: i64, b: i64) -> i64 {
    a.saturating_add(b)
}

pub fn parse_lexicon_line(line: &str) -> Result<(&str, i64), String> {
    let Some((key, count_str)) = line.split_once('\t') else {
        return Err("missing tab delimiter between key and count".to_string());
    };
    let count = count_str
        .trim()
        .parse::<i64>()
        .map_err(|e| format!("count {count_str:?} is not a signed 64-bit integer: {e}"))?;
    Ok((key, count))
}
