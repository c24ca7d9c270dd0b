//! Header extraction: `import`, `open`, `set_option` lines.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Header declarations collected from a file.
///
/// Sets are used for membership and rendered sorted; the original lines
/// are kept per category for exact reproduction. Each `import`/`open`/
/// `set_option` must sit entirely on one line; multi-line forms are not
/// recognized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderSet {
    /// Import targets (tokens after `import`).
    pub imports: BTreeSet<String>,
    /// Opened namespaces, with the visibility modifier `scoped` excluded.
    pub opens: BTreeSet<String>,
    /// Full `set_option` lines.
    pub set_options: BTreeSet<String>,
    pub import_lines: Vec<String>,
    pub open_lines: Vec<String>,
    pub set_option_lines: Vec<String>,
}

impl HeaderSet {
    pub(crate) fn from_lines(lines: &[String]) -> Self {
        let mut headers = Self::default();
        for line in lines {
            let mut tokens = line.split_whitespace();
            match tokens.next() {
                Some("import") => {
                    headers.imports.extend(tokens.map(String::from));
                    headers.import_lines.push(line.clone());
                }
                Some("open") => {
                    headers.opens.extend(tokens.map(String::from));
                    headers.open_lines.push(line.clone());
                }
                Some("set_option") => {
                    headers.set_options.insert(line.clone());
                    headers.set_option_lines.push(line.clone());
                }
                _ => {}
            }
        }
        // `scoped` is a visibility modifier, not a namespace
        headers.opens.remove("scoped");
        headers
    }
}
