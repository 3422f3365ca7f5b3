//! Extension filtering: only matching files enter the batch; everything else
//! is left exactly where it was.

use std::collections::HashSet;
use std::fs;
use tempfile::tempdir;

#[test]
fn only_the_filtered_extension_is_renamed() {
    let input = tempdir().unwrap();
    let output = tempdir().unwrap();

    for i in 0..5 {
        fs::write(input.path().join(format!("track{i}.mp3")), format!("m{i}")).unwrap();
    }
    for i in 0..3 {
        fs::write(input.path().join(format!("notes{i}.txt")), format!("t{i}")).unwrap();
    }

    assert_cmd::Command::cargo_bin("shuffle_rename")
        .unwrap()
        .arg("--in")
        .arg(input.path())
        .arg("--out")
        .arg(output.path())
        .args(["--ext", ".mp3"])
        .assert()
        .success();

    let out_names: HashSet<String> = fs::read_dir(output.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    let expected: HashSet<String> = (1..=5).map(|n| format!("{n}.mp3")).collect();
    assert_eq!(out_names, expected, "exactly the five mp3 files, renumbered");

    // The .txt files never moved.
    for i in 0..3 {
        assert!(input.path().join(format!("notes{i}.txt")).is_file());
    }
}

#[test]
fn filter_in_move_mode_leaves_other_files_untouched() {
    let td = tempdir().unwrap();
    for i in 0..4 {
        fs::write(td.path().join(format!("s{i}.mp3")), b"x").unwrap();
    }
    fs::write(td.path().join("cover.jpg"), b"img").unwrap();

    assert_cmd::Command::cargo_bin("shuffle_rename")
        .unwrap()
        .arg("--in")
        .arg(td.path())
        .args(["--mv", "--ext", ".mp3"])
        .assert()
        .success();

    let names: HashSet<String> = fs::read_dir(td.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    let mut expected: HashSet<String> = (1..=4).map(|n| format!("{n}.mp3")).collect();
    expected.insert("cover.jpg".to_string());
    assert_eq!(names, expected);
}
