// corpus-size normalizer used by lookup_compound; must stay this exact value
// for compatibility with published SymSpell lexicons
pub const CORPUS_SIZE: i64 = 1_024_908_267_229;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymSpellConfig {
    pub max_dictionary_edit_distance: i64,
    pub prefix_length: usize,
    pub count_threshold: i64,
}

impl Default for SymSpellConfig {
    fn default() -> Self {
        Self {
            max_dictionary_edit_distance: 2,
            prefix_length: 7,
            count_threshold: 1,
        }
    }
}

impl SymSpellConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_dictionary_edit_distance(mut self, value: i64) -> Self {
        self.max_dictionary_edit_distance = value;
        self
    }

    pub fn with_prefix_length(mut self, value: usize) -> Self {
        self.prefix_length = value;
        self
    }

    pub fn with_count_threshold(mut self, value: i64) -> Self {
        self.count_threshold = value;
        self
    }
}
