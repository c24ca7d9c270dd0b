//! Block records and classification.

use serde::{Deserialize, Serialize};

use super::{
    name::extract_name, normalize::indent_of, split::split_statement_proof, DOT_KEYS,
};

/// How a block's proof is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProofStyle {
    /// Proof starts with the token `by`.
    Tactic,
    /// Non-empty proof term.
    Term,
    /// Bullet-marker sub-proof.
    DotBlock,
    /// No proof could be derived.
    Unknown,
}

/// Facts derived from one block's text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockInfo {
    /// Declared name; `None` when no name could be derived.
    pub name: Option<String>,
    /// Text before the top-level `:=` (empty when no split was found).
    pub statement: String,
    /// Text after the top-level `:=` (empty when no split was found).
    pub proof: String,
    /// Whether `sorry` appears as a token anywhere in the block.
    pub has_sorry: bool,
    pub proof_style: ProofStyle,
    /// Indentation of the proof body, `indent + 2` when not inferable.
    pub inner_indent: usize,
}

/// One declaration block: a contiguous span of normalized lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// Leading token of the first line (`theorem`, `have`, `.`, …).
    pub key: String,
    /// Index of the first line in the normalized line sequence.
    pub start: usize,
    /// Index of the last line (inclusive).
    pub end: usize,
    /// Indentation of the first line.
    pub indent: usize,
    pub lines: Vec<String>,
    pub info: BlockInfo,
}

impl Block {
    /// Block content as one string.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

impl BlockInfo {
    pub(crate) fn derive(key: &str, lines: &[String]) -> Self {
        let raw = lines.join("\n");

        let (name, statement, proof) = if DOT_KEYS.contains(&key) {
            let mut after_marker = raw.trim_start().chars();
            after_marker.next();
            let proof = after_marker.as_str().trim_start().to_string();
            (Some(".".to_string()), ".".to_string(), proof)
        } else {
            let name = extract_name(&lines[0], key);
            let (statement, proof) = split_statement_proof(&raw).unwrap_or_default();
            (name, statement, proof)
        };

        let has_sorry = raw.split_whitespace().any(|token| token == "sorry");

        let proof_style = if DOT_KEYS.contains(&key) {
            ProofStyle::DotBlock
        } else if proof.split_whitespace().next() == Some("by") {
            ProofStyle::Tactic
        } else if proof.is_empty() {
            ProofStyle::Unknown
        } else {
            ProofStyle::Term
        };

        let inner_indent =
            infer_inner_indent(&proof).unwrap_or_else(|| indent_of(&lines[0]) + 2);

        Self {
            name,
            statement,
            proof,
            has_sorry,
            proof_style,
            inner_indent,
        }
    }
}

/// Indentation of the proof body: drop the proof's first line and any
/// blank lines after it, then measure what remains.
fn infer_inner_indent(proof: &str) -> Option<usize> {
    let (_, rest) = proof.split_once('\n')?;
    let body = rest.lines().find(|line| !line.trim().is_empty())?;
    let width = body.len() - body.trim_start().len();
    (width > 0).then_some(width)
}
