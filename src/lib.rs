//! Structural parsing and transformation of Lean 4 source text.
//!
//! Declaration blocks (`theorem`, `lemma`, `have` sub-goals, bullet
//! steps) are located by indentation and bracket balance rather than a
//! grammar, then split into statement and proof and classified. On top of
//! the parser sit two transformations:
//! - composing a main theorem with supporting lemmas into one
//!   self-contained file with deduplicated headers;
//! - stubbing selected sub-goal proofs with `sorry`, widest spans first.
//!
//! Parsing is best effort: any text is accepted and segmented into flat
//! block records keyed by starting line. Nothing is type-checked or
//! elaborated here; that is the proof checker's job.

mod compose;
mod error;
mod parse;
mod rewrite;
mod stub;
mod track;

pub use compose::{statement_with_lemmas, Composition};
pub use error::{Error, Result};
pub use parse::{
    extract_name, split_statement_proof, theorem_name, theorem_names, Block, BlockInfo,
    BlockQuery, HeaderSet, LeanDocument, ProofStyle, DECLARATION_KEYS, DOT_KEYS,
    HEADER_PREFIXES,
};
pub use rewrite::{add_newlines_before_keys, remove_imports};
pub use stub::{proof_with_sorries, StubOptions, SUBGOAL_KEYS};
pub use track::{
    diff_statement_maps, normalize_statement, statement_map, ChangeKind, StatementChange,
    StatementMap,
};
