use crate::helpers::prelude::*;

#[test]
fn it_rejects_an_unrecognized_action() {
    let dir = tempdir().build();

    binary()
        .arg("destroy")
        .arg("my-app")
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("unrecognized subcommand").from_utf8())
        .stdout(predicates::str::contains("Fetching").not().from_utf8());

    assert!(dir.entries(".").is_empty());
}

#[test]
fn it_prints_usage_without_arguments() {
    binary()
        .assert()
        .failure()
        .stderr(predicates::str::contains("Usage").from_utf8());
}

#[test]
fn it_requires_a_project_name() {
    let dir = tempdir().build();

    binary()
        .arg("create")
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("PROJECT_NAME").from_utf8());

    assert!(dir.entries(".").is_empty());
}

#[test]
fn it_rejects_a_zero_timeout() {
    let dir = tempdir().build();

    binary()
        .arg_create("my-app")
        .arg("--timeout")
        .arg("0")
        .current_dir(dir.path())
        .assert()
        .failure()
        .stdout(predicates::str::contains("Invalid configuration").from_utf8());

    assert!(dir.entries(".").is_empty());
}
