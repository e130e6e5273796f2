use assert_cmd::Command;
use predicates::str::contains;
use std::path::Path;

fn cmd(storage: &Path) -> Command {
    let mut cmd = Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap();
    cmd.env("CONTACTS_STORAGE_PATH", storage).arg("--no-delay");
    cmd
}

fn create_contact(storage: &Path) -> String {
    let output = cmd(storage).arg("new").assert().success().get_output().stdout.clone();
    let stdout = String::from_utf8_lossy(&output);

    stdout
        .lines()
        .find_map(|line| line.strip_prefix("Created contact "))
        .expect("new should print the created id")
        .to_string()
}

#[test]
fn edit_then_search() {
    let dir = tempfile::tempdir().unwrap();
    let storage = dir.path().join("contacts.json");

    let id = create_contact(&storage);

    // Fill in the empty shell
    cmd(&storage)
        .args([
            "edit",
            &id,
            "--first",
            "Ada",
            "--last",
            "Lovelace",
            "--twitter",
            "@ada",
        ])
        .assert()
        .success()
        .stdout(contains("Contact updated successfully"));

    // Show reflects the edit
    cmd(&storage)
        .args(["show", &id])
        .assert()
        .success()
        .stdout(contains("Ada Lovelace"))
        .stdout(contains("@ada"));

    // Search by a portion of the name (should find the contact)
    cmd(&storage)
        .args(["list", "love"])
        .assert()
        .success()
        .stdout(contains("Ada Lovelace"));
}

#[test]
fn editing_a_missing_contact_fails() {
    let dir = tempfile::tempdir().unwrap();
    let storage = dir.path().join("contacts.json");

    cmd(&storage)
        .args(["edit", "zzzzzzz", "--first", "Nobody"])
        .assert()
        .failure()
        .stderr(contains("Contact Not found"));
}

#[test]
fn favorite_toggle() {
    let dir = tempfile::tempdir().unwrap();
    let storage = dir.path().join("contacts.json");

    let id = create_contact(&storage);

    cmd(&storage)
        .args(["favorite", &id])
        .assert()
        .success()
        .stdout(contains("Contact marked as favorite"));

    cmd(&storage)
        .args(["show", &id])
        .assert()
        .success()
        .stdout(contains("Favorite:"));

    cmd(&storage)
        .args(["favorite", &id, "--off"])
        .assert()
        .success()
        .stdout(contains("Contact unmarked as favorite"));
}
