use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher as _};

pub trait StringHasher: Send + Sync {
    fn hash(&self, s: &str) -> u64;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultStringHasher;

impl StringHasher for DefaultStringHasher {
    fn hash(&self, s: &str) -> u64 {
        let mut hasher = DefaultHasher::new();
        s.hash(&mut hasher);
        hasher.finish()
    }
}
