//! Integration tests for `register`, `login`, `reset` and `room-edit`.

mod common;

use common::TestEnv;
use predicates::prelude::*;

fn request_code(env: &TestEnv, email: &str) -> String {
    let output = env
        .command()
        .args(["reset", "request", "--email", email])
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "reset request failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).unwrap().trim().to_string()
}

#[test]
fn test_register_and_login() {
    let env = TestEnv::new();

    env.command()
        .args(["register", "--username", "alice", "--email", "a@x.com"])
        .args(["--full-name", "Alice Liddell", "--password", "wonderland"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Registered alice <a@x.com>"));

    env.command()
        .args(["login", "--username", "alice", "--password", "wonderland"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome, Alice Liddell"))
        .stdout(predicate::str::contains("(admin)").not());
}

#[test]
fn test_duplicate_registration() {
    let env = TestEnv::new();
    env.register("alice", "a@x.com");

    env.command()
        .args(["register", "--username", "alice", "--email", "other@x.com"])
        .args(["--full-name", "A", "--password", "pw"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Username already exists: alice"));

    env.command()
        .args(["register", "--username", "alice2", "--email", "a@x.com"])
        .args(["--full-name", "A", "--password", "pw"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Email already exists: a@x.com"));
}

#[test]
fn test_register_rejects_bad_email() {
    let env = TestEnv::new();

    env.command()
        .args(["register", "--username", "bob", "--email", "bob-at-x"])
        .args(["--full-name", "Bob", "--password", "pw"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("email"));
}

#[test]
fn test_login_failure() {
    let env = TestEnv::new();
    env.register("alice", "a@x.com");

    env.command()
        .args(["login", "--username", "alice", "--password", "nope"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid username or password"));
}

#[test]
fn test_seeded_admin_login_json() {
    let env = TestEnv::new();

    let output = env
        .command()
        .args(["login", "--username", "admin", "--password", "12345678", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["username"], "admin");
    assert_eq!(json["email"], "admin@utopia.com");
    assert_eq!(json["is_admin"], true);
    assert!(json.get("password_hash").is_none());
}

#[test]
fn test_password_reset_round_trip() {
    let env = TestEnv::new();
    env.register("alice", "a@x.com");

    let code = request_code(&env, "a@x.com");
    assert_eq!(code.len(), 6);
    assert!(code
        .chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));

    env.command()
        .args(["reset", "confirm", "--email", "a@x.com", "--code", &code])
        .args(["--new-password", "fresh-start"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Password updated"));

    env.command()
        .args(["login", "--username", "alice", "--password", "fresh-start"])
        .assert()
        .success();
    env.command()
        .args(["login", "--username", "alice", "--password", "password"])
        .assert()
        .code(1);

    // Codes are single use
    env.command()
        .args(["reset", "confirm", "--email", "a@x.com", "--code", &code])
        .args(["--new-password", "again"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid or expired code"));
}

#[test]
fn test_reset_with_wrong_code() {
    let env = TestEnv::new();
    env.register("alice", "a@x.com");
    let code = request_code(&env, "a@x.com");
    let wrong = if code == "AAAAAA" { "BBBBBB" } else { "AAAAAA" };

    env.command()
        .args(["reset", "confirm", "--email", "a@x.com", "--code", wrong])
        .args(["--new-password", "x"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid or expired code"));

    env.command()
        .args(["login", "--username", "alice", "--password", "password"])
        .assert()
        .success();
}

#[test]
fn test_reset_for_unknown_email() {
    let env = TestEnv::new();

    env.command()
        .args(["reset", "request", "--email", "ghost@x.com"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("User not found"));
}

#[test]
fn test_room_edit_requires_admin() {
    let env = TestEnv::new();
    env.register("alice", "a@x.com");

    env.command()
        .args(["room-edit", "2", "--image", "https://img.example/new.jpg"])
        .args(["--admin-user", "alice", "--admin-password", "password"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("not an administrator"));

    env.command()
        .args(["room-edit", "2", "--image", "https://img.example/new.jpg"])
        .args(["--admin-password", "wrong"])
        .assert()
        .code(1);

    env.command()
        .args(["room-edit", "2", "--image", "https://img.example/new.jpg"])
        .args(["--video", "https://video.example/tour.mp4"])
        .args(["--admin-password", "12345678"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated Room 3.2 (2)"));

    let output = env
        .command()
        .args(["rooms", "--format", "json"])
        .output()
        .unwrap();
    let rooms: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(rooms[1]["image"], "https://img.example/new.jpg");
    assert_eq!(rooms[1]["video"], "https://video.example/tour.mp4");
}

#[test]
fn test_room_edit_unknown_room() {
    let env = TestEnv::new();

    env.command()
        .args(["room-edit", "99", "--image", "https://img.example/x.jpg"])
        .args(["--admin-password", "12345678"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Room not found: 99"));
}
