use assert_cmd::Command;

const BIN_NAME: &str = "blockfall";

#[test]
fn help_lists_flags() -> anyhow::Result<()> {
    let output = Command::cargo_bin(BIN_NAME)?.arg("--help").output()?;
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("--seed"));
    assert!(stdout.contains("--log-file"));
    Ok(())
}

#[test]
fn version() -> anyhow::Result<()> {
    Command::cargo_bin(BIN_NAME)?
        .arg("--version")
        .assert()
        .success()
        .stdout(concat!("blockfall ", env!("CARGO_PKG_VERSION"), "\n"));
    Ok(())
}

#[test]
fn rejects_bad_seed() -> anyhow::Result<()> {
    Command::cargo_bin(BIN_NAME)?
        .args(["--seed", "not-a-number"])
        .assert()
        .failure();
    Ok(())
}
