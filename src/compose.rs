//! Reassembly of a main theorem and supporting lemmas into one
//! self-contained source file.

use std::collections::BTreeSet;

use crate::parse::{BlockQuery, LeanDocument, DECLARATION_KEYS, HEADER_PREFIXES};

/// Result of [`statement_with_lemmas`]: the reassembled file plus each
/// lemma block after its `theorem` to `lemma` rewrite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Composition {
    pub code: String,
    pub lemma_codes: Vec<String>,
}

/// Merge one main snippet (expected to contain exactly one declaration)
/// with lemma snippets into a single source file.
///
/// Headers from all snippets are unioned and rendered sorted; `open`
/// namespaces collapse onto a single line. Non-declaration top-level code
/// is deduplicated as a set. Each lemma's first `theorem ` token becomes
/// `lemma `, everything else verbatim. Emission order is fixed (imports,
/// `set_option` lines, the `open` line, other code, lemma blocks in input
/// order, then main declaration blocks), so output is byte-identical for
/// identical input sets.
pub fn statement_with_lemmas(main: &str, lemmas: &[String]) -> Composition {
    let mut imports = BTreeSet::new();
    let mut opens = BTreeSet::new();
    let mut set_options = BTreeSet::new();
    let mut others = BTreeSet::new();
    let mut lemma_codes = Vec::new();
    let mut main_codes = Vec::new();

    let query = BlockQuery::for_keys(DECLARATION_KEYS).without_overlap();

    let doc = LeanDocument::new(main);
    let headers = doc.headers();
    imports.extend(headers.imports);
    opens.extend(headers.opens);
    set_options.extend(headers.set_options);
    let other = doc.other_code(DECLARATION_KEYS, HEADER_PREFIXES);
    if !other.is_empty() {
        others.insert(other);
    }
    for block in doc.blocks(&query) {
        main_codes.push(block.text());
    }

    for lemma in lemmas {
        let doc = LeanDocument::new(lemma);
        let headers = doc.headers();
        imports.extend(headers.imports);
        opens.extend(headers.opens);
        set_options.extend(headers.set_options);
        let other = doc.other_code(DECLARATION_KEYS, HEADER_PREFIXES);
        if !other.is_empty() {
            others.insert(other);
        }
        for block in doc.blocks(&query) {
            lemma_codes.push(block.text().replacen("theorem ", "lemma ", 1));
        }
    }

    tracing::debug!(
        "composing {} main blocks with {} lemma blocks",
        main_codes.len(),
        lemma_codes.len()
    );

    let mut code = String::new();
    for import in &imports {
        code.push_str("import ");
        code.push_str(import);
        code.push('\n');
    }
    code.push('\n');

    if !set_options.is_empty() {
        for option in &set_options {
            code.push_str(option.trim());
            code.push('\n');
        }
        code.push('\n');
    }

    if !opens.is_empty() {
        code.push_str("open");
        for namespace in &opens {
            code.push(' ');
            code.push_str(namespace);
        }
        code.push('\n');
    }

    if !others.is_empty() {
        code.push('\n');
        for other in &others {
            code.push_str(other);
            code.push_str("\n\n");
        }
    }

    code.push('\n');
    for lemma in &lemma_codes {
        code.push_str(lemma);
        code.push_str("\n\n");
    }
    code.push('\n');

    for main_code in &main_codes {
        code.push_str(main_code);
        code.push_str("\n\n");
    }

    Composition { code, lemma_codes }
}
