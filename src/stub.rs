//! Sub-goal stubbing: replace selected sub-goal proofs with `sorry`.

use std::cmp::Reverse;

use crate::parse::{Block, BlockQuery, LeanDocument, ProofStyle};

/// Default sub-goal keys.
pub const SUBGOAL_KEYS: &[&str] = &["have", "replace"];

/// Selection criteria for [`proof_with_sorries`].
#[derive(Debug, Clone)]
pub struct StubOptions {
    /// Accepted sub-goal keys.
    pub keys: Vec<String>,
    /// Cap on how many sub-goals to stub.
    pub max_stubs: usize,
    pub min_proof_lines: usize,
    pub max_proof_lines: usize,
}

impl Default for StubOptions {
    fn default() -> Self {
        Self {
            keys: SUBGOAL_KEYS.iter().map(ToString::to_string).collect(),
            max_stubs: usize::MAX,
            min_proof_lines: 0,
            max_proof_lines: usize::MAX,
        }
    }
}

/// Replace the proofs of selected sub-goal blocks with a placeholder:
/// `by sorry` for tactic proofs, bare `sorry` otherwise.
///
/// Sub-goals are selected widest line-span first (ties keep source order)
/// up to `max_stubs`, biasing stubbing toward the most substantial
/// obligations. Replacements are computed against immutable block
/// snapshots and applied in start-index order over the normalized lines,
/// so identical block texts cannot interfere. Sub-goals whose proof is
/// empty are left untouched. The output parses to the same block count as
/// the input; only proof bodies shrink.
pub fn proof_with_sorries(code: &str, options: &StubOptions) -> String {
    let doc = LeanDocument::new(code);
    let query = BlockQuery {
        keys: options.keys.clone(),
        allow_overlap: false,
        min_proof_lines: options.min_proof_lines,
        max_proof_lines: options.max_proof_lines,
    };

    let mut selected = doc.blocks(&query);
    selected.retain(|block| !block.info.proof.is_empty());
    selected.sort_by_key(|block| Reverse(block.end - block.start));
    selected.truncate(options.max_stubs);
    selected.sort_by_key(|block| block.start);

    tracing::debug!("stubbing {} sub-goal proofs", selected.len());

    let lines = doc.lines();
    let mut out: Vec<String> = Vec::with_capacity(lines.len());
    let mut next = 0;
    for block in &selected {
        out.extend(lines[next..block.start].iter().cloned());
        out.push(stubbed_text(block));
        next = block.end + 1;
    }
    out.extend(lines[next..].iter().cloned());
    out.join("\n")
}

/// Block text with the first occurrence of its proof replaced.
fn stubbed_text(block: &Block) -> String {
    let stub = if block.info.proof_style == ProofStyle::Tactic {
        "by sorry"
    } else {
        "sorry"
    };
    block.text().replacen(block.info.proof.as_str(), stub, 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::BlockQuery;

    const PROOF: &str = concat!(
        "theorem main : P := by\n",
        "  have h1 : Q := by\n",
        "    apply foo\n",
        "    exact bar\n",
        "  have h2 : R := by\n",
        "    exact baz\n",
        "  exact (combine h1 h2)\n",
    );

    #[test]
    fn test_stub_all_subgoals() {
        let stubbed = proof_with_sorries(PROOF, &StubOptions::default());

        assert!(
            stubbed.contains("have h1 : Q := by sorry"),
            "tactic proof should become `by sorry`, got:\n{stubbed}"
        );
        assert!(
            stubbed.contains("have h2 : R := by sorry"),
            "second sub-goal should be stubbed too, got:\n{stubbed}"
        );
        assert!(
            !stubbed.contains("apply foo"),
            "stubbed proof body should be gone"
        );
        assert!(
            stubbed.contains("exact (combine h1 h2)"),
            "outer proof text should be untouched"
        );
    }

    #[test]
    fn test_widest_span_is_stubbed_first() {
        let options = StubOptions {
            max_stubs: 1,
            ..StubOptions::default()
        };
        let stubbed = proof_with_sorries(PROOF, &options);

        assert!(
            stubbed.contains("have h1 : Q := by sorry"),
            "h1 spans more lines and should win the cap, got:\n{stubbed}"
        );
        assert!(
            stubbed.contains("have h2 : R := by\n    exact baz"),
            "h2 should be left alone under the cap, got:\n{stubbed}"
        );
    }

    #[test]
    fn test_term_proof_gets_bare_sorry() {
        let code = "theorem t : P := by\n  have h : Q := foo.bar\n  exact h\n";
        let stubbed = proof_with_sorries(code, &StubOptions::default());

        assert!(
            stubbed.contains("have h : Q := sorry"),
            "term proof should become bare sorry, got:\n{stubbed}"
        );
    }

    #[test]
    fn test_block_count_is_invariant() {
        let before = LeanDocument::new(PROOF)
            .blocks(&BlockQuery::for_keys(SUBGOAL_KEYS).without_overlap())
            .len();

        let stubbed = proof_with_sorries(PROOF, &StubOptions::default());
        let after = LeanDocument::new(&stubbed)
            .blocks(&BlockQuery::for_keys(SUBGOAL_KEYS).without_overlap())
            .len();

        assert_eq!(before, after, "stubbing must not delete or merge blocks");
    }

    #[test]
    fn test_proof_line_filter_limits_selection() {
        let options = StubOptions {
            min_proof_lines: 3,
            ..StubOptions::default()
        };
        let stubbed = proof_with_sorries(PROOF, &options);

        assert!(
            stubbed.contains("have h1 : Q := by sorry"),
            "three-line proof passes the filter, got:\n{stubbed}"
        );
        assert!(
            stubbed.contains("have h2 : R := by\n    exact baz"),
            "two-line proof should be filtered out, got:\n{stubbed}"
        );
    }

    #[test]
    fn test_no_subgoals_returns_normalized_input() {
        let code = "theorem t : True := by\n  trivial\n";
        let stubbed = proof_with_sorries(code, &StubOptions::default());

        assert_eq!(stubbed, "theorem t : True := by\n  trivial");
    }
}
