//! Binary-level tests using assert_cmd
//!
//! These only exercise paths that never reach Pandoc, so they run
//! anywhere.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_missing_input_is_usage_error() {
    let mut cmd = Command::cargo_bin("mwbook").unwrap();
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_invalid_doc_type_is_usage_error() {
    let mut cmd = Command::cargo_bin("mwbook").unwrap();
    cmd.args(["guide.mediawiki", "--type", "pamphlet"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--type"));
}

#[test]
fn test_help_lists_canonical_flags() {
    let mut cmd = Command::cargo_bin("mwbook").unwrap();
    let assert = cmd.arg("--help").assert().success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();

    for flag in ["--to", "--fromformat", "--type", "--lang", "--debug", "--veryverbose", "--no-open"] {
        assert!(output.contains(flag), "help should mention {}", flag);
    }
}

#[test]
fn test_missing_input_file_fails_nonzero() {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = Command::cargo_bin("mwbook").unwrap();
    cmd.current_dir(dir.path())
        .args(["does-not-exist.mediawiki", "--no-open"])
        .assert()
        .failure();
}

/// Stub converter that emulates the normalize pass (any invocation
/// carrying `--from=` writes its `-o` target and succeeds) and fails
/// the render pass.
#[cfg(unix)]
const FAILING_RENDER_STUB: &str = r#"#!/bin/sh
norm=0
out=""
prev=""
for a in "$@"; do
  [ "$prev" = "-o" ] && out="$a"
  case "$a" in --from=*) norm=1 ;; esac
  prev="$a"
done
if [ "$norm" -eq 1 ]; then
  printf '# stub intermediate\n' > "$out"
  exit 0
fi
exit 1
"#;

#[cfg(unix)]
#[test]
fn test_render_failure_keeps_workspace_and_exits_nonzero() {
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::path::Path;

    let build = tempfile::tempdir().unwrap();
    fs::write(build.path().join("guide.mediawiki"), "== Hello ==\n").unwrap();

    let stubs = tempfile::tempdir().unwrap();
    let stub = stubs.path().join("pandoc");
    fs::write(&stub, FAILING_RENDER_STUB).unwrap();
    fs::set_permissions(&stub, fs::Permissions::from_mode(0o755)).unwrap();

    let mut cmd = Command::cargo_bin("mwbook").unwrap();
    let assert = cmd
        .current_dir(build.path())
        .env("PATH", stubs.path())
        .args(["guide.mediawiki", "--no-open"])
        .assert()
        .failure();

    // The retained workspace path is reported and still on disk, with
    // the intermediate document available for inspection.
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let line = stdout
        .lines()
        .find(|l| l.contains("temp files at"))
        .expect("failure output should report the retained workspace");
    let kept = line.rsplit("temp files at ").next().unwrap().trim();

    let kept = Path::new(kept);
    assert!(kept.is_dir(), "workspace must survive a render failure");
    assert!(
        kept.join("guide.md").is_file(),
        "intermediate document must be left for inspection"
    );
    fs::remove_dir_all(kept).unwrap();
}
