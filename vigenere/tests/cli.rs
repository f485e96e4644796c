use assert_cmd::Command;
use predicates::prelude::*;

fn vigenere() -> Command {
    Command::cargo_bin("vigenere").unwrap()
}

#[test]
fn test_encrypt_preserves_case_and_punctuation() {
    vigenere()
        .args(["--mode", "encrypt", "--key", "KEY"])
        .write_stdin("Hello, World!")
        .assert()
        .success()
        .stdout("Rijvs, Uyvjn!");
}

#[test]
fn test_decrypt_with_alternative_key() {
    // CAG under the Z convention is the same key as DBH
    vigenere()
        .args(["--mode", "decrypt", "--key", "CAG", "--alternative"])
        .write_stdin("WILTVPFLIUPD")
        .assert()
        .success()
        .stdout("THEQUICKBROW");
}

#[test]
fn test_round_trip_through_files() {
    let dir = tempfile::tempdir().unwrap();
    let plain = dir.path().join("plain.txt");
    let cipher = dir.path().join("cipher.txt");
    let back = dir.path().join("back.txt");
    std::fs::write(&plain, "Attack at dawn.\n").unwrap();

    vigenere()
        .args(["--mode", "encrypt", "--key", "LEMON"])
        .arg("--file")
        .arg(&plain)
        .arg("--output")
        .arg(&cipher)
        .assert()
        .success();
    assert_eq!(std::fs::read_to_string(&cipher).unwrap(), "Lxfopv ef rnhr.\n");

    vigenere()
        .args(["--mode", "decrypt", "--key", "LEMON"])
        .arg("--file")
        .arg(&cipher)
        .arg("--output")
        .arg(&back)
        .assert()
        .success();
    assert_eq!(std::fs::read_to_string(&back).unwrap(), "Attack at dawn.\n");
}

#[test]
fn test_random_key_is_reported() {
    vigenere()
        .args(["--mode", "encrypt", "--random-key", "6"])
        .write_stdin("SOMETEXT")
        .assert()
        .success()
        .stderr(predicate::str::is_match("Generated key: [A-Z]{6}").unwrap());
}

#[test]
fn test_random_key_cannot_decrypt() {
    vigenere()
        .args(["--mode", "decrypt", "--random-key", "4"])
        .write_stdin("SOMETEXT")
        .assert()
        .failure()
        .stderr(predicate::str::contains("only be used to encrypt"));
}

#[test]
fn test_invalid_key_character() {
    vigenere()
        .args(["--mode", "encrypt", "--key", "K3Y"])
        .write_stdin("HELLO")
        .assert()
        .failure()
        .stderr(predicate::str::contains("outside the A-Z alphabet"));
}
