// ABOUTME: Integration tests for the read -> rewrite -> write pipeline.
// ABOUTME: Uses temp directories to check output files, overwrite behavior, and error phases.

use std::fs;
use std::io;

use pretty_assertions::assert_eq;
use relpath::{run, Options, QuoteMode};
use tempfile::TempDir;

#[test]
fn writes_rewritten_output() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("index.html"),
        r#"<img src="/images/logo.png"><a href='/about'>About</a>"#,
    )
    .unwrap();

    let summary = run(&Options::in_dir(dir.path())).unwrap();

    assert_eq!(summary.rewritten, 2);
    assert_eq!(summary.output, dir.path().join("output.html"));
    assert_eq!(
        fs::read_to_string(dir.path().join("output.html")).unwrap(),
        r#"<img src="./images/logo.png"><a href='./about'>About</a>"#
    );
    // input left alone
    assert_eq!(
        fs::read_to_string(dir.path().join("index.html")).unwrap(),
        r#"<img src="/images/logo.png"><a href='/about'>About</a>"#
    );
}

#[test]
fn overwrites_existing_output() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("index.html"), "<p>short</p>").unwrap();
    fs::write(
        dir.path().join("output.html"),
        "a much longer stale output that must be fully replaced",
    )
    .unwrap();

    let summary = run(&Options::in_dir(dir.path())).unwrap();

    assert_eq!(summary.rewritten, 0);
    assert_eq!(
        fs::read_to_string(dir.path().join("output.html")).unwrap(),
        "<p>short</p>"
    );
}

#[test]
fn missing_input_is_read_error_and_writes_nothing() {
    let dir = TempDir::new().unwrap();

    let err = run(&Options::in_dir(dir.path())).unwrap_err();

    assert!(err.is_read());
    assert_eq!(err.kind(), io::ErrorKind::NotFound);
    assert_eq!(err.path(), dir.path().join("index.html"));
    assert!(!dir.path().join("output.html").exists());
}

#[test]
fn invalid_utf8_is_read_error() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("index.html"), [0x3c, 0xff, 0xfe, 0x3e]).unwrap();

    let err = run(&Options::in_dir(dir.path())).unwrap_err();

    assert!(err.is_read());
    assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    assert!(!dir.path().join("output.html").exists());
}

#[test]
fn unwritable_output_is_write_error() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("index.html"), r#"<img src="/a.png">"#).unwrap();
    let blocked = dir.path().join("blocked");
    fs::create_dir(&blocked).unwrap();

    let opts = Options::builder()
        .dir(dir.path())
        .output(&blocked)
        .build();
    let err = run(&opts).unwrap_err();

    assert!(err.is_write());
    assert_eq!(err.phase(), "writing");
    assert_eq!(err.path(), blocked.as_path());
    assert_eq!(err.exit_code(), 3);
}

#[test]
fn loose_mode_is_applied() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("index.html"), r#"<img src="/a.png'>"#).unwrap();

    let strict = Options::in_dir(dir.path());
    run(&strict).unwrap();
    assert_eq!(
        fs::read_to_string(&strict.output).unwrap(),
        r#"<img src="/a.png'>"#
    );

    let loose = Options::builder()
        .dir(dir.path())
        .quote_mode(QuoteMode::Loose)
        .build();
    let summary = run(&loose).unwrap();
    assert_eq!(summary.rewritten, 1);
    assert_eq!(
        fs::read_to_string(&loose.output).unwrap(),
        r#"<img src="./a.png'>"#
    );
}
