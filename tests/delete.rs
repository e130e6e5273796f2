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
fn deleting_contacts() {
    let dir = tempfile::tempdir().unwrap();
    let storage = dir.path().join("contacts.json");

    // Attempt to delete non existing contact
    cmd(&storage)
        .args(["delete", "zzzzzzz"])
        .assert()
        .success()
        .stderr(contains("Contact Not found"));

    let id = create_contact(&storage);

    cmd(&storage)
        .args(["delete", &id])
        .assert()
        .success()
        .stdout(contains("Contact deleted successfully"));

    // Verify that deleted contact no longer exist
    cmd(&storage)
        .args(["show", &id])
        .assert()
        .success()
        .stderr(contains("Contact Not found"));

    cmd(&storage)
        .args(["delete", &id])
        .assert()
        .success()
        .stderr(contains("Contact Not found"));

    cmd(&storage)
        .arg("list")
        .assert()
        .success()
        .stdout(contains("No contacts yet"));
}
