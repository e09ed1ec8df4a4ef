use anyhow::Result;

use assert_cmd::Command;
use predicates::prelude::*;

fn masonry_tui() -> Result<Command> {
    Ok(Command::cargo_bin("masonry-tui")?)
}

#[test]
fn version_flag_should_print_version() -> Result<()> {
    masonry_tui()?
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));

    Ok(())
}

#[test]
fn help_flag_should_print_usage() -> Result<()> {
    masonry_tui()?
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage").and(predicate::str::contains("--columns")));

    Ok(())
}

#[test]
fn zero_columns_should_be_rejected() -> Result<()> {
    masonry_tui()?
        .args(["--columns", "0", "a", "b"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("column count must be at least 1"));

    Ok(())
}

#[test]
fn malformed_columns_should_be_rejected() -> Result<()> {
    masonry_tui()?
        .args(["--columns", "many"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("masonry-tui:"));

    Ok(())
}

#[test]
fn unknown_option_should_be_rejected() -> Result<()> {
    masonry_tui()?
        .arg("--bogus")
        .assert()
        .failure()
        .stderr(predicate::str::contains("bogus"));

    Ok(())
}
