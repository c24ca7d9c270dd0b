//! Whole-file rewriting helpers.

/// Insert a blank line before every line starting with one of `keys`.
pub fn add_newlines_before_keys(code: &str, keys: &[&str]) -> String {
    let mut out = Vec::new();
    for line in code.lines() {
        if keys.iter().any(|key| line.starts_with(key)) {
            out.push("");
        }
        out.push(line);
    }
    out.join("\n")
}

/// Drop `import` lines whose first target token starts with one of
/// `prefixes`. An `import` line without a target is kept as-is.
pub fn remove_imports(code: &str, prefixes: &[&str]) -> String {
    let mut out = Vec::new();
    for line in code.lines() {
        if !line.starts_with("import") {
            out.push(line);
            continue;
        }
        match line.split_whitespace().nth(1) {
            Some(target) if prefixes.iter().any(|prefix| target.starts_with(prefix)) => {}
            _ => out.push(line),
        }
    }
    out.join("\n")
}
