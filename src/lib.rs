//! SymSpell-based spelling correction and compound (phrase) correction.
//!
//! The engine precomputes a delete-variant index from a frequency lexicon
//! (`SymSpell::load_dictionary`) and, optionally, a bigram lexicon
//! (`SymSpell::load_bigram_dictionary`). Once built it serves two read-only
//! operations:
//!
//! - [`SymSpell::lookup`] — single-word correction, ranked by edit distance
//!   then frequency, under one of three [`Verbosity`] policies.
//! - [`SymSpell::lookup_compound`] — phrase-level correction that also
//!   repairs missing or spurious spaces.

pub mod config;
pub mod delete_index;
pub mod edit_distance;
pub mod engine;
pub mod error;
pub mod hasher;
pub mod lexicon;
pub mod suggestion;

pub use config::{CORPUS_SIZE, SymSpellConfig};
pub use edit_distance::{EditDistance, OsaDistance, bounded_osa_distance};
pub use engine::SymSpell;
pub use error::{Result, SymSpellError};
pub use hasher::{DefaultStringHasher, StringHasher};
pub use suggestion::{Suggestion, Verbosity};
