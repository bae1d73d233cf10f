use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn wortform() -> Command {
    Command::cargo_bin("wortform").unwrap()
}

#[test]
fn tokenize_file_to_stdout() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("zug.txt");
    fs::write(&input, "Der Zug fährt\nam 3. Mai ab.").unwrap();

    wortform()
        .args(["tokenize", "--utf8", "--stdout"])
        .arg(&input)
        .assert()
        .success()
        .stdout("der zug fährt am 3. mai ab\n");

    wortform()
        .args(["tokenize", "--utf8", "--stdout", "-x"])
        .arg(&input)
        .assert()
        .success()
        .stdout("der zug fährt am dritten mai ab\n");
}

#[test]
fn legacy_encoding_is_the_default() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("latin1.txt");
    fs::write(&input, [0x47, 0x72, 0xFC, 0xDF, 0x65]).unwrap();

    wortform().args(["tokenize", "--stdout"]).arg(&input).assert().success().stdout("grüße\n");
}

#[test]
fn stdin_is_read_for_dash() {
    wortform()
        .args(["tokenize", "-x", "--stdout", "-"])
        .write_stdin("Um 14:30 Uhr kostet es 5%.")
        .assert()
        .success()
        .stdout(predicate::str::contains("vierzehn uhr dreißig"))
        .stdout(predicate::str::contains("prozent"));
}

#[test]
fn tokenize_file_writes_token_file() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("text.txt");
    fs::write(&input, "Hallo Welt!").unwrap();
    let out = dir.path().join("out");

    wortform()
        .args(["tokenize", "--utf8", "-o"])
        .arg(&out)
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("successful!"))
        .stdout(predicate::str::contains("tokens0.txt"));

    assert_eq!(fs::read_to_string(out.join("tokens0.txt")).unwrap(), "hallo welt");
}

#[test]
fn directory_output_goes_to_named_subdirectory() {
    let input = TempDir::new().unwrap();
    fs::write(input.path().join("a.txt"), "Eins").unwrap();
    fs::write(input.path().join("b.txt"), "Zwei").unwrap();
    let out = TempDir::new().unwrap();
    let target = input.path().file_name().unwrap();

    wortform().args(["tokenize", "-q", "-o"]).arg(out.path()).arg(input.path()).assert().success().stdout("");

    let written = out.path().join(target);
    assert_eq!(fs::read_to_string(written.join("tokens0.txt")).unwrap(), "eins");
    assert_eq!(fs::read_to_string(written.join("tokens1.txt")).unwrap(), "zwei");
}

#[test]
fn config_file_enables_extended_mode() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("wortform.toml");
    fs::write(&config, "extended = true\nencoding = \"utf-8\"\n").unwrap();

    wortform()
        .args(["tokenize", "--stdout", "-c"])
        .arg(&config)
        .arg("-")
        .write_stdin("21 Äpfel")
        .assert()
        .success()
        .stdout("einundzwanzig äpfel\n");
}

#[test]
fn unknown_address_fails() {
    wortform()
        .args(["tokenize", "/no/such/place"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot use"));
}

#[test]
fn connect_unites_directory() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.txt"), "Erster.").unwrap();
    fs::write(dir.path().join("b.txt"), "Zweiter.").unwrap();

    wortform()
        .args(["connect", "--dir"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Connected 2 file(s)"));

    let united = fs::read_to_string(dir.path().join("unitedFiles_0000.txt")).unwrap();
    assert_eq!(united, "Erster. Zweiter.");
}
