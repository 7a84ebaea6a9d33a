//! Hygiene: source-level budgets for the session crate.
//!
//! Scans `src/` (excluding `*_test.rs`) for patterns that crash the process or
//! silently drop errors. Budgets only go down.

use std::fs;
use std::path::Path;

/// `(pattern, budget)` pairs checked against production sources.
const BUDGETS: &[(&str, usize)] = &[
    (".unwrap()", 0),
    (".expect(", 0),
    ("panic!(", 0),
    ("unreachable!(", 0),
    ("todo!(", 0),
    ("unimplemented!(", 0),
    ("let _ =", 0),
    (".ok()", 0),
    ("#[allow(dead_code)]", 0),
];

fn source_files(dir: &Path, out: &mut Vec<(String, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            source_files(&path, out);
            continue;
        }
        let name = path.to_string_lossy().to_string();
        if !name.ends_with(".rs") || name.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push((name, content));
        }
    }
}

#[test]
fn pattern_budgets() {
    let mut files = Vec::new();
    source_files(Path::new("src"), &mut files);
    assert!(!files.is_empty(), "no sources found under src/");

    let mut failures = Vec::new();
    for (pattern, budget) in BUDGETS {
        let hits: Vec<(&str, usize)> = files
            .iter()
            .map(|(path, content)| (path.as_str(), content.lines().filter(|line| line.contains(pattern)).count()))
            .filter(|(_, count)| *count > 0)
            .collect();
        let count: usize = hits.iter().map(|(_, c)| c).sum();
        if count > *budget {
            let listing: Vec<String> = hits.iter().map(|(path, c)| format!("  {path}: {c}")).collect();
            failures.push(format!("{pattern} budget exceeded: found {count}, max {budget}\n{}", listing.join("\n")));
        }
    }
    assert!(failures.is_empty(), "{}", failures.join("\n"));
}
