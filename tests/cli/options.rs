use anyhow::Result;
use insta::assert_snapshot;
use pretty_assertions::assert_eq;

use crate::CliTest;

fn project() -> Result<CliTest> {
    let test = CliTest::new()?;
    test.write_file(
        "a.py",
        "import os  # type: ignore[import]\nx = os.y  # type: ignore\n",
    )?;
    test.write_file("b.py", "def f():  # pylint: disable=too-many-arguments\n    pass\n")?;
    Ok(test)
}

// ============================================================
// Output modes
// ============================================================

#[test]
fn test_count() -> Result<()> {
    let test = project()?;
    let mut cmd = test.scan_command("pylint,mypy", &["a.py", "b.py"]);
    cmd.arg("--count");

    let output = test.run(cmd)?;

    assert_eq!(output.code, 1);
    assert_eq!(output.stdout, "3\n");

    Ok(())
}

#[test]
fn test_count_zero() -> Result<()> {
    let test = CliTest::with_file("ok.py", "x = 1\n")?;
    let mut cmd = test.scan_command("pylint", &["ok.py"]);
    cmd.arg("--count");

    let output = test.run(cmd)?;

    assert_eq!(output.code, 0);
    assert_eq!(output.stdout, "0\n");

    Ok(())
}

#[test]
fn test_quiet() -> Result<()> {
    let test = project()?;
    let mut cmd = test.scan_command("pylint,mypy", &["a.py", "b.py"]);
    cmd.arg("--quiet");

    let output = test.run(cmd)?;

    assert_eq!(output.code, 1);
    assert_eq!(output.stdout, "");

    Ok(())
}

#[test]
fn test_json() -> Result<()> {
    let test = project()?;
    let mut cmd = test.scan_command("mypy", &["a.py"]);
    cmd.arg("--json");

    let output = test.run(cmd)?;

    assert_eq!(output.code, 1);
    let value: serde_json::Value = serde_json::from_str(&output.stdout)?;
    assert_eq!(
        value,
        serde_json::json!([
            {
                "path": "a.py",
                "line": 1,
                "tool": "mypy",
                "directive": "type: ignore",
                "snippet": "type: ignore[import]",
            },
            {
                "path": "a.py",
                "line": 2,
                "tool": "mypy",
                "directive": "type: ignore",
                "snippet": "type: ignore",
            },
        ])
    );

    Ok(())
}

#[test]
fn test_verbose() -> Result<()> {
    let test = project()?;
    test.write_file("notes.txt", "# pylint: disable=x\n")?;
    let mut cmd = test.scan_command("pylint,mypy", &["."]);
    cmd.arg("--verbose");

    let output = test.run(cmd)?;

    assert_eq!(output.code, 1);
    assert_snapshot!(output.stdout, @r"
    Checking for: mypy, pylint
    Scanning: a.py
    a.py:1:mypy:type: ignore
    a.py:2:mypy:type: ignore
    Scanning: b.py
    b.py:1:pylint:pylint: disable
    Scanned 2 file(s), found 3 finding(s)
    ");

    Ok(())
}

#[test]
fn test_conflicting_output_flags() -> Result<()> {
    let test = project()?;
    let mut cmd = test.scan_command("mypy", &["a.py"]);
    cmd.args(["--quiet", "--json"]);

    let output = test.run(cmd)?;

    assert_eq!(output.code, 2);
    assert!(output.stderr.contains("cannot be used with"));

    Ok(())
}

// ============================================================
// Behavior flags
// ============================================================

#[test]
fn test_fail_fast() -> Result<()> {
    let test = project()?;
    let mut cmd = test.scan_command("pylint,mypy", &["b.py", "a.py"]);
    cmd.arg("--fail-fast");

    let output = test.run(cmd)?;

    assert_eq!(output.code, 1);
    assert_eq!(output.stdout, "a.py:1:mypy:type: ignore\n");

    Ok(())
}

#[test]
fn test_fail_fast_count() -> Result<()> {
    let test = project()?;
    let mut cmd = test.scan_command("pylint,mypy", &["a.py", "b.py"]);
    cmd.args(["--fail-fast", "--count"]);

    let output = test.run(cmd)?;

    assert_eq!(output.code, 1);
    assert_eq!(output.stdout, "1\n");

    Ok(())
}

#[test]
fn test_warn_only() -> Result<()> {
    let test = project()?;
    let mut cmd = test.scan_command("pylint", &["b.py"]);
    cmd.arg("--warn-only");

    let output = test.run(cmd)?;

    assert_eq!(output.code, 0);
    assert_eq!(output.stdout, "b.py:1:pylint:pylint: disable\n");

    Ok(())
}

#[test]
fn test_fail_fast_and_warn_only_conflict() -> Result<()> {
    let test = project()?;
    let mut cmd = test.scan_command("pylint", &["b.py"]);
    cmd.args(["--fail-fast", "--warn-only"]);

    let output = test.run(cmd)?;

    assert_eq!(output.code, 2);

    Ok(())
}

// ============================================================
// Allow
// ============================================================

#[test]
fn test_allow_specific_directive() -> Result<()> {
    let test = project()?;
    let mut cmd = test.scan_command("mypy", &["a.py"]);
    cmd.args(["--allow", "type: ignore[import]"]);

    let output = test.run(cmd)?;

    assert_eq!(output.code, 1);
    assert_eq!(output.stdout, "a.py:2:mypy:type: ignore\n");

    Ok(())
}

#[test]
fn test_allow_multiple_patterns() -> Result<()> {
    let test = project()?;
    let mut cmd = test.scan_command("pylint,mypy", &["a.py", "b.py"]);
    cmd.args(["--allow", "type: ignore,too-many-arguments"]);

    let output = test.run(cmd)?;

    assert_eq!(output.code, 0);
    assert_eq!(output.stdout, "");

    Ok(())
}

// ============================================================
// Tool validation
// ============================================================

#[test]
fn test_invalid_tool() -> Result<()> {
    let test = project()?;

    let output = test.run(test.scan_command("pylint,eslint", &["a.py"]))?;

    assert_eq!(output.code, 2);
    assert_eq!(output.stdout, "");
    assert_snapshot!(output.stderr, @"Error: Invalid tool(s): eslint. Valid options: clang-diagnostic, clang-format, clang-tidy, coverage, markdownlint, mypy, pylint, yamllint");

    Ok(())
}

#[test]
fn test_empty_tool_list() -> Result<()> {
    let test = project()?;

    let output = test.run(test.scan_command(" , ", &["a.py"]))?;

    assert_eq!(output.code, 2);
    assert!(output.stderr.contains("At least one tool must be specified"));

    Ok(())
}

#[test]
fn test_missing_tools_flag() -> Result<()> {
    let test = project()?;
    let mut cmd = test.command();
    cmd.arg("a.py");

    let output = test.run(cmd)?;

    assert_eq!(output.code, 2);
    assert!(output.stderr.contains("--tools"));

    Ok(())
}
