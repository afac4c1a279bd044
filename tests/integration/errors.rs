use predicates::prelude::*;

use super::flashprompt;
use flashprompt::test_utils::TestEnvironment;

#[test]
fn test_errors_exit_with_status_one() {
    let env = TestEnvironment::new().unwrap();

    flashprompt(&env)
        .args(["show", "missing"])
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("error: Template 'missing' not found"))
        .stderr(predicate::str::contains("suggestion: Run 'flashprompt list'"));
}

#[test]
fn test_several_suggestions() {
    let env =
        TestEnvironment::with_templates(&[("report", "r"), ("repost", "p"), ("other", "o")])
            .unwrap();

    flashprompt(&env)
        .args(["show", "repor"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Did you mean one of: 'report', 'repost'?"));
}

#[test]
fn test_help_lists_commands() {
    let env = TestEnvironment::new().unwrap();

    flashprompt(&env)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("render"))
        .stdout(predicate::str::contains("edit"))
        .stdout(predicate::str::contains("--store"));
}

#[test]
fn test_verbose_logs_to_stderr() {
    let env = TestEnvironment::new().unwrap();

    flashprompt(&env)
        .args(["--verbose", "list"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Opened template store"));
}
