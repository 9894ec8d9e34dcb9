//! Integration tests: full fetch runs against a local HTTP server.
//!
//! Covers the contract of one pass: every entry attempted once, failures
//! contained to their entry, empty bodies rejected, destinations only ever
//! absent/unchanged/complete, and the exit status derived from the counts.

mod common;

use common::static_server::{self, Response};
use std::collections::HashMap;
use tempfile::tempdir;
use vlf_core::config::VlfConfig;
use vlf_core::manifest::{Entry, Manifest};
use vlf_core::runner::{self, EntryOutcome};

fn entry(dest: &str, url: String) -> Entry {
    Entry {
        dest: dest.to_string(),
        url,
        sha256: None,
    }
}

fn manifest(entries: Vec<Entry>) -> Manifest {
    Manifest::from_entries(entries).expect("test manifest must validate")
}

#[test]
fn all_entries_fetched_and_written() {
    let mut routes = HashMap::new();
    routes.insert("/a.js".to_string(), Response::ok(&b"0123456789"[..]));
    routes.insert("/b.css".to_string(), Response::ok(&b"body { color: red }"[..]));
    let base = static_server::start(routes);

    let root = tempdir().unwrap();
    let m = manifest(vec![
        entry("a.js", format!("{base}/a.js")),
        entry("sub/b.css", format!("{base}/b.css")),
    ]);

    let report = runner::run(&m, root.path(), &VlfConfig::default(), false);

    assert_eq!(report.attempted(), 2);
    assert_eq!(report.succeeded(), 2);
    assert_eq!(report.failed(), 0);
    assert_eq!(report.exit_code(), 0);
    assert_eq!(std::fs::read(root.path().join("a.js")).unwrap(), b"0123456789");
    assert_eq!(
        std::fs::read(root.path().join("sub/b.css")).unwrap(),
        b"body { color: red }"
    );
}

#[test]
fn failed_entry_does_not_stop_the_run() {
    let mut routes = HashMap::new();
    routes.insert("/a.js".to_string(), Response::ok(&b"0123456789"[..]));
    routes.insert("/c.js".to_string(), Response::ok(&b"later entry"[..]));
    let base = static_server::start(routes);

    let root = tempdir().unwrap();
    let m = manifest(vec![
        entry("a.js", format!("{base}/a.js")),
        entry("sub/b.css", static_server::refused_url("/b.css")),
        entry("c.js", format!("{base}/c.js")),
    ]);

    let report = runner::run(&m, root.path(), &VlfConfig::default(), false);

    assert_eq!(report.attempted(), 3, "every entry must be attempted");
    assert_eq!(report.failed(), 1);
    assert_eq!(report.exit_code(), 1);
    assert!(matches!(
        report.entries[1].outcome,
        EntryOutcome::Failed { .. }
    ));
    assert_eq!(std::fs::read(root.path().join("a.js")).unwrap(), b"0123456789");
    assert!(!root.path().join("sub/b.css").exists());
    assert_eq!(std::fs::read(root.path().join("c.js")).unwrap(), b"later entry");
}

#[test]
fn http_error_is_a_per_entry_failure() {
    let mut routes = HashMap::new();
    routes.insert("/gone.js".to_string(), Response::status(404));
    let base = static_server::start(routes);

    let root = tempdir().unwrap();
    let m = manifest(vec![entry("gone.js", format!("{base}/gone.js"))]);

    let report = runner::run(&m, root.path(), &VlfConfig::default(), false);

    assert_eq!(report.failed(), 1);
    match &report.entries[0].outcome {
        EntryOutcome::Failed { reason } => assert!(reason.contains("HTTP 404"), "got {reason:?}"),
        other => panic!("expected failure, got {other:?}"),
    }
    assert!(!root.path().join("gone.js").exists());
}

#[test]
fn empty_body_reported_as_empty_file() {
    let mut routes = HashMap::new();
    routes.insert("/hollow.js".to_string(), Response::ok(Vec::new()));
    let base = static_server::start(routes);

    let root = tempdir().unwrap();
    let m = manifest(vec![entry("hollow.js", format!("{base}/hollow.js"))]);

    let report = runner::run(&m, root.path(), &VlfConfig::default(), false);

    assert_eq!(report.failed(), 1);
    match &report.entries[0].outcome {
        EntryOutcome::Failed { reason } => assert_eq!(reason, "empty file"),
        other => panic!("expected failure, got {other:?}"),
    }
    assert!(!root.path().join("hollow.js").exists());
    assert!(!root.path().join("hollow.js.part").exists());
}

#[test]
fn rerun_overwrites_without_error() {
    let mut routes = HashMap::new();
    routes.insert("/a.js".to_string(), Response::ok(&b"same body"[..]));
    let base = static_server::start(routes);

    let root = tempdir().unwrap();
    let m = manifest(vec![entry("a.js", format!("{base}/a.js"))]);
    let cfg = VlfConfig::default();

    let first = runner::run(&m, root.path(), &cfg, false);
    let second = runner::run(&m, root.path(), &cfg, false);

    assert_eq!(first.exit_code(), 0);
    assert_eq!(second.exit_code(), 0);
    assert_eq!(std::fs::read(root.path().join("a.js")).unwrap(), b"same body");
}

#[test]
fn failed_entry_leaves_previous_file_unchanged() {
    let mut routes = HashMap::new();
    routes.insert("/a.js".to_string(), Response::status(500));
    let base = static_server::start(routes);

    let root = tempdir().unwrap();
    std::fs::write(root.path().join("a.js"), b"from an earlier run").unwrap();
    let m = manifest(vec![entry("a.js", format!("{base}/a.js"))]);

    let report = runner::run(&m, root.path(), &VlfConfig::default(), false);

    assert_eq!(report.failed(), 1);
    assert_eq!(
        std::fs::read(root.path().join("a.js")).unwrap(),
        b"from an earlier run"
    );
}

#[test]
fn nested_directories_created_as_needed() {
    let mut routes = HashMap::new();
    routes.insert("/f.woff2".to_string(), Response::ok(&b"font bytes"[..]));
    let base = static_server::start(routes);

    let root = tempdir().unwrap();
    let m = manifest(vec![entry(
        "primeicons/fonts/primeicons.woff2",
        format!("{base}/f.woff2"),
    )]);

    let report = runner::run(&m, root.path(), &VlfConfig::default(), false);

    assert_eq!(report.exit_code(), 0);
    assert_eq!(
        std::fs::read(root.path().join("primeicons/fonts/primeicons.woff2")).unwrap(),
        b"font bytes"
    );
}

#[test]
fn verify_rejects_digest_mismatch() {
    let mut routes = HashMap::new();
    routes.insert("/a.js".to_string(), Response::ok(&b"actual body"[..]));
    let base = static_server::start(routes);

    let root = tempdir().unwrap();
    let mut tampered = entry("a.js", format!("{base}/a.js"));
    // Digest of some other content.
    tampered.sha256 =
        Some("5891b5b522d5df086d0ff0b110fbd9d21bb4fc7163af34d08286a2e846f6be03".to_string());
    let m = manifest(vec![tampered.clone()]);

    let report = runner::run(&m, root.path(), &VlfConfig::default(), true);
    assert_eq!(report.failed(), 1);
    match &report.entries[0].outcome {
        EntryOutcome::Failed { reason } => {
            assert!(reason.contains("checksum mismatch"), "got {reason:?}")
        }
        other => panic!("expected failure, got {other:?}"),
    }
    assert!(!root.path().join("a.js").exists());

    // Without --verify the same entry is accepted.
    let report = runner::run(&m, root.path(), &VlfConfig::default(), false);
    assert_eq!(report.exit_code(), 0);
    assert_eq!(std::fs::read(root.path().join("a.js")).unwrap(), b"actual body");
}
