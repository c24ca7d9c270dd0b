//! Block scanning: single-block delimitation and whole-file extraction.

use super::{
    block::{Block, BlockInfo},
    normalize::indent_of,
    split::strip_brackets,
    LeanDocument, DOT_KEYS,
};

/// Selection criteria for [`LeanDocument::blocks`].
#[derive(Debug, Clone)]
pub struct BlockQuery {
    /// Accepted leading tokens.
    pub keys: Vec<String>,
    /// When false, scanning resumes after each kept block's end line, so
    /// no two returned blocks share a line index.
    pub allow_overlap: bool,
    /// Keep only blocks whose proof has at least this many lines.
    pub min_proof_lines: usize,
    /// Keep only blocks whose proof has at most this many lines.
    pub max_proof_lines: usize,
}

impl Default for BlockQuery {
    fn default() -> Self {
        Self {
            keys: vec!["theorem".to_string()],
            allow_overlap: true,
            min_proof_lines: 0,
            max_proof_lines: usize::MAX,
        }
    }
}

impl BlockQuery {
    /// Query for the given leading keys with the default filters.
    pub fn for_keys(keys: &[&str]) -> Self {
        Self {
            keys: keys.iter().map(ToString::to_string).collect(),
            ..Self::default()
        }
    }

    /// Disallow overlapping blocks.
    pub fn without_overlap(mut self) -> Self {
        self.allow_overlap = false;
        self
    }

    /// Bound the proof line count.
    pub fn proof_lines(mut self, min: usize, max: usize) -> Self {
        self.min_proof_lines = min;
        self.max_proof_lines = max;
        self
    }
}

impl LeanDocument {
    /// The block starting at line `start`, when that line's first token is
    /// one of `keys`.
    ///
    /// A strictly-more-indented line extends the block. A same-indentation
    /// line terminates it, unless the accumulated text with bracketed
    /// groups stripped still lacks a `:=`; then it is treated as the
    /// continuation of a multi-line signature. Bullet-marker blocks always
    /// terminate at same indentation; less-indented lines always
    /// terminate. The continuation rule can swallow a following sibling
    /// declaration that itself contains no `:=` before the next
    /// same-indentation line; known precision/recall tradeoff.
    pub fn block_at(&self, start: usize, keys: &[&str]) -> Option<Block> {
        let start_line = self.lines().get(start)?;
        let key = start_line.split_whitespace().next()?;
        if !keys.contains(&key) {
            return None;
        }

        let indent = indent_of(start_line);
        let mut block_lines = vec![start_line.clone()];
        let mut i = start + 1;
        while i < self.lines().len() {
            let line = &self.lines()[i];
            let line_indent = indent_of(line);
            if line_indent > indent {
                block_lines.push(line.clone());
            } else if line.trim().is_empty() {
                // blank lines are already dropped during normalization;
                // transparent here for robustness
            } else if line_indent == indent {
                if DOT_KEYS.contains(&key) {
                    break;
                }
                if strip_brackets(&block_lines.join("\n")).contains(":=") {
                    break;
                }
                // multi-line signature written without indentation
                block_lines.push(line.clone());
            } else {
                break;
            }
            i += 1;
        }

        let info = BlockInfo::derive(key, &block_lines);
        Some(Block {
            key: key.to_string(),
            start,
            end: i - 1,
            indent,
            lines: block_lines,
            info,
        })
    }

    /// All blocks matching `query`, ordered by starting line index.
    pub fn blocks(&self, query: &BlockQuery) -> Vec<Block> {
        let keys: Vec<&str> = query.keys.iter().map(String::as_str).collect();
        let mut blocks = Vec::new();
        let mut i = 0;
        while i < self.lines().len() {
            if let Some(block) = self.block_at(i, &keys) {
                let proof_lines = block.info.proof.lines().count();
                if (query.min_proof_lines..=query.max_proof_lines).contains(&proof_lines) {
                    if !query.allow_overlap {
                        i = block.end;
                    }
                    blocks.push(block);
                }
            }
            i += 1;
        }
        tracing::debug!("extracted {} blocks for keys {:?}", blocks.len(), query.keys);
        blocks
    }

    /// Normalized lines lying outside every non-overlapping block for
    /// `keys`, minus lines whose stripped form starts with one of
    /// `except_prefixes`, joined and trimmed.
    pub fn other_code(&self, keys: &[&str], except_prefixes: &[&str]) -> String {
        let query = BlockQuery::for_keys(keys).without_overlap();
        let blocks = self.blocks(&query);

        let mut in_block = vec![false; self.lines().len()];
        for block in &blocks {
            for slot in &mut in_block[block.start..=block.end] {
                *slot = true;
            }
        }

        let kept: Vec<&str> = self
            .lines()
            .iter()
            .enumerate()
            .filter(|(i, line)| {
                !in_block[*i]
                    && !except_prefixes
                        .iter()
                        .any(|prefix| line.trim().starts_with(prefix))
            })
            .map(|(_, line)| line.as_str())
            .collect();
        kept.join("\n").trim().to_string()
    }
}
