//! CLI integration tests
//!
//! Runs the built `shelf-identifiers` binary (requires the `cli` feature).

use assert_cmd::Command;
use predicates::str::contains;

fn shelf_identifiers() -> Command {
    Command::cargo_bin("shelf-identifiers").unwrap()
}

#[test]
fn test_validate_success_exit_code() {
    shelf_identifiers()
        .args(["validate", "0-306-40615-2", "012345678905"])
        .assert()
        .success()
        .stdout(contains("0-306-40615-2\tISBN-10"))
        .stdout(contains("012345678905\tUPC-A"));
}

#[test]
fn test_validate_failure_exit_code() {
    shelf_identifiers()
        .args(["validate", "0306406152", "12345"])
        .assert()
        .failure()
        .stdout(contains("12345\tinvalid"));
}

#[test]
fn test_identify_failure_exit_code() {
    shelf_identifiers()
        .args(["identify", "hello"])
        .assert()
        .failure()
        .stderr(contains("Unrecognized identifier: hello"));
}

#[test]
fn test_identify_json() {
    shelf_identifiers()
        .args(["--json", "identify", "9780306406157"])
        .assert()
        .success()
        .stdout(contains(r#""kind":"isbn13""#))
        .stdout(contains(r#""isbn10":"0306406152""#));
}

#[test]
fn test_convert_to_isbn10() {
    shelf_identifiers()
        .args(["convert", "--to", "isbn10", "978-0-306-40615-7"])
        .assert()
        .success()
        .stdout(contains("978-0-306-40615-7\t0306406152"));
}

#[test]
fn test_format_passthrough() {
    shelf_identifiers()
        .args(["format", "9780306406157", "12345"])
        .assert()
        .success()
        .stdout(contains("978-0-30640-615-7"))
        .stdout(contains("12345"));
}

#[test]
fn test_extract_reads_stdin() {
    shelf_identifiers()
        .args(["extract", "-"])
        .write_stdin("Copyright page. ISBN 978-0-306-40615-7 (hardcover)\n")
        .assert()
        .success()
        .stdout(contains("9780306406157"));
}

#[test]
fn test_extract_nothing_found_exit_code() {
    shelf_identifiers()
        .args(["extract", "-"])
        .write_stdin("no barcodes here")
        .assert()
        .failure();
}
