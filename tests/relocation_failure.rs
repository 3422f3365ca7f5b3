//! A primitive failure mid-batch aborts immediately: earlier files stay
//! relocated, later files are untouched, and the exit code says which pass
//! failed.

use std::collections::HashSet;
use std::fs;
use tempfile::tempdir;

#[test]
fn occupied_target_aborts_with_the_relocation_code() {
    let input = tempdir().unwrap();
    let output = tempdir().unwrap();

    for i in 0..10 {
        fs::write(input.path().join(format!("clip{i}.bin")), format!("c{i}")).unwrap();
    }
    // Ten files -> width 2 -> targets 01.bin .. 10.bin. Squat on the third.
    fs::write(output.path().join("03.bin"), b"planted").unwrap();

    let assert = assert_cmd::Command::cargo_bin("shuffle_rename")
        .unwrap()
        .arg("--in")
        .arg(input.path())
        .arg("--out")
        .arg(output.path())
        .assert()
        .code(5);

    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).into_owned();
    assert!(stderr.contains("03.bin"), "failing pair must be reported: {stderr}");
    assert!(stderr.contains("first-phase"), "pass must be reported: {stderr}");

    // Files 1 and 2 were relocated before the failure; nothing after it was.
    let out_names: HashSet<String> = fs::read_dir(output.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    let expected: HashSet<String> = ["01.bin", "02.bin", "03.bin"]
        .into_iter()
        .map(String::from)
        .collect();
    assert_eq!(out_names, expected);
    assert_eq!(fs::read(output.path().join("03.bin")).unwrap(), b"planted");

    // Copy mode: every source is still present.
    for i in 0..10 {
        assert!(input.path().join(format!("clip{i}.bin")).is_file());
    }
}
