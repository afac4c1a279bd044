use predicates::prelude::*;

use super::flashprompt;
use flashprompt::test_utils::TestEnvironment;

#[test]
fn test_show_text() {
    let env = TestEnvironment::with_templates(&[(
        "greeting",
        "Dear {{name}}, welcome to {{place}}. Bye {{name}}!",
    )])
    .unwrap();

    flashprompt(&env)
        .args(["show", "greeting"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dear {{name}}, welcome to {{place}}. Bye {{name}}!"))
        .stdout(predicate::str::contains("name ×2 (primary)"))
        .stdout(predicate::str::contains("place"));
}

#[test]
fn test_show_without_placeholders() {
    let env = TestEnvironment::with_templates(&[("plain", "Just text with {single} braces")])
        .unwrap();

    flashprompt(&env)
        .args(["show", "plain"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No placeholders"));
}

#[test]
fn test_show_json() {
    let env = TestEnvironment::with_templates(&[("t", "{{b}} {{a}} {{b}}")]).unwrap();

    let output = flashprompt(&env).args(["show", "t", "--format", "json"]).output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "name": "t",
            "template": "{{b}} {{a}} {{b}}",
            "placeholders": [
                {"name": "b", "occurrences": 2, "primary": true},
                {"name": "a", "occurrences": 1, "primary": false}
            ]
        })
    );
}

#[test]
fn test_show_missing_suggests_similar() {
    let env = TestEnvironment::with_templates(&[("greeting", "Hi")]).unwrap();

    flashprompt(&env)
        .args(["show", "greting"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Template 'greting' not found"))
        .stderr(predicate::str::contains("Did you mean 'greeting'?"));
}
