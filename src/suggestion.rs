use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub word: String,
    pub distance: i64,
    pub count: i64,
}

impl Suggestion {
    pub fn new(word: impl Into<String>, distance: i64, count: i64) -> Self {
        Self {
            word: word.into(),
            distance,
            count,
        }
    }
}

// distance asc, then count desc
pub fn sort_suggestions(suggestions: &mut [Suggestion]) {
    suggestions.sort_by(|a, b| a.distance.cmp(&b.distance).then_with(|| b.count.cmp(&a.count)));
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verbosity {
    Top,
    Closest,
    All,
}
