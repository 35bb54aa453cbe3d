//! Hygiene — enforces coding standards at test time
//!
//! These tests scan the library source tree for antipatterns. Every budget is
//! zero: fix the offending line rather than raising the number.

use std::fs;
use std::path::Path;

struct SourceFile {
    path: String,
    content: String,
}

struct Budget {
    pattern: &'static str,
    max: usize,
}

// Panics and stubs: handlers must run to completion.
const PANICS: &[Budget] = &[
    Budget { pattern: ".unwrap()", max: 0 },
    Budget { pattern: ".expect(", max: 0 },
    Budget { pattern: "panic!(", max: 0 },
    Budget { pattern: "unreachable!(", max: 0 },
    Budget { pattern: "todo!(", max: 0 },
    Budget { pattern: "unimplemented!(", max: 0 },
];

// Silent loss: errors are propagated or logged, never dropped.
const SILENT_LOSS: &[Budget] = &[
    Budget { pattern: "let _ =", max: 0 },
    Budget { pattern: ".ok()", max: 0 },
    Budget { pattern: "#[allow(dead_code)]", max: 0 },
];

// Output goes through `tracing`.
const RAW_OUTPUT: &[Budget] = &[
    Budget { pattern: "println!(", max: 0 },
    Budget { pattern: "eprintln!(", max: 0 },
    Budget { pattern: "dbg!(", max: 0 },
];

/// Collect production `.rs` files from `src/`, excluding `_test.rs` files.
fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
            continue;
        }
        let path_str = path.to_string_lossy().to_string();
        if !path_str.ends_with(".rs") || path_str.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path: path_str, content });
        }
    }
}

fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .map(|file| (file.path.clone(), file.content.lines().filter(|l| l.contains(pattern)).count()))
        .filter(|(_, count)| *count > 0)
        .collect()
}

/// Check every budget and report all overruns at once.
fn check(budgets: &[Budget]) {
    let files = source_files();
    assert!(!files.is_empty(), "no sources found; run from the package root");

    let overruns: Vec<String> = budgets
        .iter()
        .filter_map(|budget| {
            let found = hits(&files, budget.pattern);
            let count: usize = found.iter().map(|(_, c)| c).sum();
            (count > budget.max).then(|| {
                let detail: Vec<String> = found.iter().map(|(p, c)| format!("    {p}: {c}")).collect();
                format!("  `{}` found {count}, max {}\n{}", budget.pattern, budget.max, detail.join("\n"))
            })
        })
        .collect();

    assert!(overruns.is_empty(), "hygiene budget exceeded:\n{}", overruns.join("\n"));
}

#[test]
fn panic_budget() {
    check(PANICS);
}

#[test]
fn silent_loss_budget() {
    check(SILENT_LOSS);
}

#[test]
fn raw_output_budget() {
    check(RAW_OUTPUT);
}

#[test]
fn environment_is_read_only_by_config() {
    let offenders: Vec<String> = hits(&source_files(), "std::env::var")
        .into_iter()
        .map(|(path, _)| path)
        .filter(|path| !path.ends_with("config.rs"))
        .collect();
    assert!(offenders.is_empty(), "environment read outside config.rs: {offenders:?}");
}

#[test]
fn browser_bindings_are_feature_gated() {
    for file in source_files() {
        let lines: Vec<&str> = file.content.lines().collect();
        for (i, line) in lines.iter().enumerate() {
            let is_import = line.trim_start().starts_with("use wasm_bindgen") || line.trim_start().starts_with("use web_sys");
            if !is_import {
                continue;
            }
            let gated = i > 0 && lines[i - 1].contains("#[cfg(feature = \"web\")]");
            assert!(gated, "{}:{}: browser import without #[cfg(feature = \"web\")]", file.path, i + 1);
        }
    }
}
