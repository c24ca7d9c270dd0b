//! Line normalization: comment stripping, `:=` spacing, bullet rewriting.

/// Number of leading space characters.
pub(crate) fn indent_of(line: &str) -> usize {
    line.len() - line.trim_start_matches(' ').len()
}

/// Remove every block comment delimited by `/- … -/` or `/- … --/`.
///
/// Non-greedy: each `/-` is closed by the earliest following terminator,
/// with `--/` preferred when both match at the same index. An unterminated
/// `/-` is left in place.
fn strip_block_comments(code: &str) -> String {
    let mut out = String::with_capacity(code.len());
    let mut rest = code;
    while let Some(open) = rest.find("/-") {
        match find_comment_close(&rest[open + 2..]) {
            Some((at, len)) => {
                out.push_str(&rest[..open]);
                rest = &rest[open + 2 + at + len..];
            }
            None => break,
        }
    }
    out.push_str(rest);
    out
}

/// Earliest `--/` or `-/` in `s`, as `(byte offset, terminator length)`.
fn find_comment_close(s: &str) -> Option<(usize, usize)> {
    let bytes = s.as_bytes();
    let mut i = 0;
    while i + 1 < bytes.len() {
        if bytes[i] == b'-' && bytes[i + 1] == b'-' && bytes.get(i + 2) == Some(&b'/') {
            return Some((i, 3));
        }
        if bytes[i] == b'-' && bytes[i + 1] == b'/' {
            return Some((i, 2));
        }
        i += 1;
    }
    None
}

/// Pad `:=` with single spaces, collapsing an accidental doubled space on
/// either side and suppressing a trailing space at end of line.
fn pad_assign(code: &str) -> String {
    let padded = code.replace(":=", " := ");
    let padded = padded.replace("  :=", " :=");
    let padded = padded.replace(":=  ", ":= ");
    padded.replace(":= \n", ":=\n")
}

/// Normalize raw source into cleaned lines: block and line comments
/// removed, blank lines dropped, `:=` spacing fixed, and each bullet
/// marker (`. ` / `· `) rewritten onto its own line with its payload
/// re-indented two columns deeper.
pub(crate) fn normalize_lines(code: &str) -> Vec<String> {
    let formatted = pad_assign(&strip_block_comments(code));
    let mut lines = Vec::new();
    for raw in formatted.lines() {
        let stripped = raw.split_once("--").map_or(raw, |(head, _)| head).trim_end();
        if stripped.trim().is_empty() {
            continue;
        }
        let content = stripped.trim_start();
        let indent = stripped.len() - content.len();
        let bullet_rest = content
            .strip_prefix(". ")
            .or_else(|| content.strip_prefix("· "));
        if let Some(rest) = bullet_rest {
            lines.push(format!("{}.", " ".repeat(indent)));
            if !rest.trim().is_empty() {
                lines.push(format!("{}{rest}", " ".repeat(indent + 2)));
            }
        } else {
            lines.push(stripped.to_string());
        }
    }
    lines
}
