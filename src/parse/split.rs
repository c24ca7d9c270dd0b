//! Statement/proof splitting at the top-level `:=`.

/// Split a declaration's text at the first `:=` outside all bracket
/// nesting, returning `(statement, proof)` with both ends trimmed.
///
/// Three independent depth counters (round, square, curly) track nesting;
/// the split point is the first `:=` with all three at exactly zero. When
/// no such occurrence exists the text is split at the first literal `:=`
/// anywhere, trading precision for availability. Text without any `:=`
/// yields `None`.
pub fn split_statement_proof(code: &str) -> Option<(String, String)> {
    if !code.contains(":=") {
        return None;
    }

    let bytes = code.as_bytes();
    let mut paren: i32 = 0;
    let mut square: i32 = 0;
    let mut curly: i32 = 0;

    for i in 0..bytes.len() {
        match bytes[i] {
            b'(' => paren += 1,
            b')' => paren -= 1,
            b'[' => square += 1,
            b']' => square -= 1,
            b'{' => curly += 1,
            b'}' => curly -= 1,
            b':' if bytes.get(i + 1) == Some(&b'=')
                && paren == 0
                && square == 0
                && curly == 0 =>
            {
                return Some((
                    code[..i].trim().to_string(),
                    code[i + 2..].trim().to_string(),
                ));
            }
            _ => {}
        }
    }

    let (statement, proof) = code.split_once(":=")?;
    Some((statement.trim().to_string(), proof.trim().to_string()))
}

/// Remove bracketed groups (`(…)`, `{…}`, `[…]`) in a single left-to-right
/// pass. A group is removed only when it contains no bracket of its own
/// type; other types may appear inside. Used to decide whether a block's
/// accumulated text still lacks a top-level `:=`.
pub(crate) fn strip_brackets(code: &str) -> String {
    let bytes = code.as_bytes();
    let mut out = String::with_capacity(code.len());
    let mut copied = 0;
    let mut i = 0;
    while i < bytes.len() {
        let close = match bytes[i] {
            b'(' => b')',
            b'{' => b'}',
            b'[' => b']',
            _ => {
                i += 1;
                continue;
            }
        };
        let open = bytes[i];
        let mut j = i + 1;
        let mut end = None;
        while j < bytes.len() {
            if bytes[j] == close {
                end = Some(j);
                break;
            }
            if bytes[j] == open {
                break;
            }
            j += 1;
        }
        if let Some(end) = end {
            out.push_str(&code[copied..i]);
            copied = end + 1;
            i = end + 1;
        } else {
            i += 1;
        }
    }
    out.push_str(&code[copied..]);
    out
}
