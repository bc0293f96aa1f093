use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::CliTest;

fn project() -> Result<CliTest> {
    let test = CliTest::new()?;
    test.write_file("src/app.py", "import x  # type: ignore[import]\n")?;
    test.write_file("src/api_generated.py", "y = 1  # type: ignore\n")?;
    Ok(test)
}

#[test]
fn test_config_exclude_and_allow() -> Result<()> {
    let test = project()?;
    test.write_file(
        ".no-inline-directives.json",
        r#"{ "exclude": ["*_generated.py"], "allow": ["type: ignore[import]"] }"#,
    )?;

    let output = test.run(test.scan_command("mypy", &["src"]))?;

    assert_eq!(output.code, 0);
    assert_eq!(output.stdout, "");

    Ok(())
}

#[test]
fn test_config_merges_with_cli_patterns() -> Result<()> {
    let test = project()?;
    test.write_file(
        ".no-inline-directives.json",
        r#"{ "exclude": ["*_generated.py"] }"#,
    )?;

    let mut cmd = test.scan_command("mypy", &["src"]);
    cmd.args(["--allow", "type: ignore[import]"]);
    let output = test.run(cmd)?;

    assert_eq!(output.code, 0);

    Ok(())
}

#[test]
fn test_config_found_from_subdirectory() -> Result<()> {
    let test = project()?;
    test.write_file(
        ".no-inline-directives.json",
        r#"{ "exclude": ["*_generated.py"] }"#,
    )?;

    let mut cmd = test.scan_command("mypy", &["."]);
    cmd.current_dir(test.root().join("src"));
    let output = test.run(cmd)?;

    assert_eq!(output.stdout, "app.py:1:mypy:type: ignore\n");

    Ok(())
}

#[test]
fn test_verbose_names_config_file() -> Result<()> {
    let test = project()?;
    test.write_file("ci/strict.json", r#"{ "allow": ["type: ignore"] }"#)?;

    let mut cmd = test.scan_command("mypy", &["src/app.py"]);
    cmd.args(["--config", "ci/strict.json", "--verbose"]);
    let output = test.run(cmd)?;

    assert_eq!(output.code, 0);
    assert_eq!(
        output.stdout.lines().next(),
        Some("Using config: ci/strict.json")
    );

    Ok(())
}

#[test]
fn test_no_config_flag() -> Result<()> {
    let test = project()?;
    test.write_file(
        ".no-inline-directives.json",
        r#"{ "exclude": ["*_generated.py"], "allow": ["type: ignore"] }"#,
    )?;

    let mut cmd = test.scan_command("mypy", &["src"]);
    cmd.arg("--no-config");
    let output = test.run(cmd)?;

    assert_eq!(output.code, 1);
    assert_eq!(output.stdout.lines().count(), 2);

    Ok(())
}

#[test]
fn test_explicit_config_path() -> Result<()> {
    let test = project()?;
    test.write_file("ci/strict.json", r#"{ "allow": ["type: ignore"] }"#)?;

    let mut cmd = test.scan_command("mypy", &["src"]);
    cmd.args(["--config", "ci/strict.json"]);
    let output = test.run(cmd)?;

    assert_eq!(output.code, 0);

    Ok(())
}

#[test]
fn test_malformed_config() -> Result<()> {
    let test = project()?;
    test.write_file(".no-inline-directives.json", "{ not json")?;

    let output = test.run(test.scan_command("mypy", &["src"]))?;

    assert_eq!(output.code, 2);
    assert!(output.stderr.contains("Failed to parse config file"));

    Ok(())
}

#[test]
fn test_invalid_config_glob() -> Result<()> {
    let test = project()?;
    test.write_file(".no-inline-directives.json", r#"{ "exclude": ["[*"] }"#)?;

    let output = test.run(test.scan_command("mypy", &["src"]))?;

    assert_eq!(output.code, 2);
    assert!(output.stderr.contains("Invalid glob pattern in 'exclude'"));

    Ok(())
}

#[test]
fn test_fail_on_read_error() -> Result<()> {
    let test = CliTest::new()?;
    test.write_bytes("bad.py", &[0xff, 0xfe, b'\n'])?;
    test.write_file(".no-inline-directives.json", r#"{ "failOnReadError": true }"#)?;

    let output = test.run(test.scan_command("mypy", &["bad.py"]))?;

    assert_eq!(output.code, 2);
    assert!(output.stderr.contains("Error reading bad.py"));

    Ok(())
}

#[test]
fn test_fail_on_read_error_with_warn_only() -> Result<()> {
    let test = CliTest::new()?;
    test.write_bytes("bad.py", &[0xff, 0xfe, b'\n'])?;
    test.write_file(".no-inline-directives.json", r#"{ "failOnReadError": true }"#)?;

    let mut cmd = test.scan_command("mypy", &["bad.py"]);
    cmd.arg("--warn-only");
    let output = test.run(cmd)?;

    assert_eq!(output.code, 0);

    Ok(())
}
