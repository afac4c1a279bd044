use predicates::prelude::*;

use super::flashprompt;
use flashprompt::test_utils::TestEnvironment;

#[test]
fn test_store_created_on_first_use() {
    let env = TestEnvironment::new().unwrap();
    assert!(!env.store_path.exists());

    flashprompt(&env).arg("list").assert().success();

    assert_eq!(env.read_store_file().unwrap(), "[]");
}

#[test]
fn test_store_file_format() {
    let env = TestEnvironment::new().unwrap();

    flashprompt(&env).args(["add", "挨拶", "--body", "こんにちは {{name}}"]).assert().success();

    let raw = env.read_store_file().unwrap();
    assert_eq!(raw, "[\n  {\n    \"name\": \"挨拶\",\n    \"template\": \"こんにちは {{name}}\"\n  }\n]");
}

#[test]
fn test_corrupt_store_opens_empty() {
    let env = TestEnvironment::new().unwrap();
    env.write_file("data/prompts.json", "{ this is not json").unwrap();

    flashprompt(&env)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No templates saved"))
        .stderr(predicate::str::contains("corrupt"));
}

#[test]
fn test_existing_store_is_read() {
    let env = TestEnvironment::new().unwrap();
    env.write_file(
        "data/prompts.json",
        r#"[{"name": "legacy", "template": "From {{source}}"}]"#,
    )
    .unwrap();

    flashprompt(&env)
        .args(["render", "legacy", "--set", "source=disk"])
        .assert()
        .success()
        .stdout("From disk\n");
}
