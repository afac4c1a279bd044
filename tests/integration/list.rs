use predicates::prelude::*;

use super::flashprompt;
use flashprompt::test_utils::TestEnvironment;

#[test]
fn test_list_empty() {
    let env = TestEnvironment::new().unwrap();

    flashprompt(&env)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No templates saved"));
}

#[test]
fn test_list_in_save_order() {
    let env =
        TestEnvironment::with_templates(&[("zeta", "z"), ("alpha", "a"), ("mid", "m")]).unwrap();

    flashprompt(&env).arg("list").assert().success().stdout("zeta\nalpha\nmid\n");
}

#[test]
fn test_list_json() {
    let env = TestEnvironment::with_templates(&[("greeting", "Hi {{name}} from {{place}}")])
        .unwrap();

    let output = flashprompt(&env).args(["list", "--format", "json"]).output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        value,
        serde_json::json!([{"name": "greeting", "placeholders": ["name", "place"]}])
    );
}

#[test]
fn test_list_json_empty() {
    let env = TestEnvironment::new().unwrap();

    flashprompt(&env).args(["list", "-f", "json"]).assert().success().stdout("[]\n");
}
