use predicates::prelude::*;

use super::flashprompt;
use flashprompt::test_utils::TestEnvironment;

const GREETING: &str = "Dear {{name}}, welcome to {{place}}.";

#[test]
fn test_render_greeting() {
    let env = TestEnvironment::with_templates(&[("greeting", GREETING)]).unwrap();

    flashprompt(&env)
        .args(["render", "greeting", "--set", "name=Alice", "--set", "place=Wonderland"])
        .assert()
        .success()
        .stdout("Dear Alice, welcome to Wonderland.\n");
}

#[test]
fn test_render_values_are_literal() {
    let env = TestEnvironment::with_templates(&[("t", "Hi {{name}} and {{other}}")]).unwrap();

    // A value that looks like a placeholder is not expanded again
    flashprompt(&env)
        .args(["render", "t", "--set", "name={{other}} 100% {cool}", "--set", "other=X"])
        .assert()
        .success()
        .stdout("Hi {{other}} 100% {cool} and X\n");
}

#[test]
fn test_render_missing_values_are_empty() {
    let env = TestEnvironment::with_templates(&[("t", "{{x}}{{y}}")]).unwrap();

    flashprompt(&env).args(["render", "t", "--set", "x=A"]).assert().success().stdout("A\n");
}

#[test]
fn test_render_strict_fails_on_blanks() {
    let env = TestEnvironment::with_templates(&[("greeting", GREETING)]).unwrap();

    flashprompt(&env)
        .args(["render", "greeting", "--set", "name=Alice", "--strict"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Placeholders without a value: place"));
}

#[test]
fn test_render_interactive_prompts_in_order() {
    let env = TestEnvironment::with_templates(&[("greeting", GREETING)]).unwrap();

    flashprompt(&env)
        .args(["render", "greeting", "--interactive"])
        .write_stdin("Alice\nWonderland\n")
        .assert()
        .success()
        .stdout("Dear Alice, welcome to Wonderland.\n")
        .stderr(predicate::str::contains("name: "))
        .stderr(predicate::str::contains("place: "));
}

#[test]
fn test_render_interactive_skips_set_fields() {
    let env = TestEnvironment::with_templates(&[("greeting", GREETING)]).unwrap();

    flashprompt(&env)
        .args(["render", "greeting", "-i", "--set", "name=Bob"])
        .write_stdin("Paris\n")
        .assert()
        .success()
        .stdout("Dear Bob, welcome to Paris.\n")
        .stderr(predicate::str::contains("name: ").not());
}

#[test]
fn test_render_interactive_stops_at_eof() {
    let env = TestEnvironment::with_templates(&[("greeting", GREETING)]).unwrap();

    flashprompt(&env)
        .args(["render", "greeting", "--interactive"])
        .write_stdin("Alice\n")
        .assert()
        .success()
        .stdout("Dear Alice, welcome to .\n");
}

#[test]
fn test_render_json() {
    let env = TestEnvironment::with_templates(&[("greeting", GREETING)]).unwrap();

    let output = flashprompt(&env)
        .args(["render", "greeting", "--set", "name=Alice", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "name": "greeting",
            "preview": "Dear Alice, welcome to .",
            "fields": [
                {"name": "name", "value": "Alice"},
                {"name": "place", "value": ""}
            ],
            "unfilled": ["place"]
        })
    );
}

#[test]
fn test_render_unknown_field() {
    let env = TestEnvironment::with_templates(&[("greeting", GREETING)]).unwrap();

    flashprompt(&env)
        .args(["render", "greeting", "--set", "nme=Alice"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Template has no placeholder named 'nme'"))
        .stderr(predicate::str::contains("Did you mean 'name'?"));
}

#[test]
fn test_render_malformed_assignment() {
    let env = TestEnvironment::with_templates(&[("greeting", GREETING)]).unwrap();

    flashprompt(&env)
        .args(["render", "greeting", "--set", "novalue"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected NAME=VALUE"));
}

#[test]
fn test_render_missing_template() {
    let env = TestEnvironment::new().unwrap();

    flashprompt(&env)
        .args(["render", "nothing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Template 'nothing' not found"))
        .stderr(predicate::str::contains("flashprompt list"));
}

#[test]
fn test_copy_help_mentions_clipboard_manager() {
    let env = TestEnvironment::new().unwrap();

    flashprompt(&env)
        .args(["render", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("clipboard manager"));
}
