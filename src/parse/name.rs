//! Declaration-name extraction.

use crate::error::{Error, Result};

use super::{scan::BlockQuery, LeanDocument, DECLARATION_KEYS};

/// Extract the declared name following `key` from a declaration header.
///
/// ```text
/// "theorem v1 : xxx"         ->  Some("v1")
/// "theorem : xxx"            ->  Some("this")
/// "theorem := xxx"           ->  Some("this")
/// "theorem t1 (x : T) : ..." ->  Some("t1")
/// "theorem (x : T) : ..."    ->  Some("this")
/// ```
///
/// Returns `None` when `code` does not start with `key` followed by a
/// space, or when no name token can be read off the header.
pub fn extract_name(code: &str, key: &str) -> Option<String> {
    let code = code.trim();
    let rest = code.strip_prefix(key)?.strip_prefix(' ')?.trim();

    // anonymous declaration: body starts right after the key
    if rest.starts_with([':', '(']) {
        return Some("this".to_string());
    }

    let name: String = rest
        .chars()
        .take_while(|c| !matches!(c, ' ' | ':' | '{' | '[' | '('))
        .collect();
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}

/// Name of the `theorem`/`lemma` declaration heading `code`.
///
/// Asking for the theorem name of text that is not a theorem or lemma
/// declaration is a contract violation and fails hard; a declaration
/// whose name cannot be derived yields `Ok(None)`.
pub fn theorem_name(code: &str) -> Result<Option<String>> {
    if code.starts_with("theorem") {
        Ok(extract_name(code, "theorem"))
    } else if code.starts_with("lemma") {
        Ok(extract_name(code, "lemma"))
    } else {
        Err(Error::NotADeclaration(code.to_string()))
    }
}

/// Names of all `theorem`/`lemma` declarations in `code`, in source
/// order. Declarations without a derivable name are skipped.
pub fn theorem_names(code: &str) -> Vec<String> {
    let doc = LeanDocument::new(code);
    doc.blocks(&BlockQuery::for_keys(DECLARATION_KEYS))
        .into_iter()
        .filter_map(|block| block.info.name)
        .collect()
}
