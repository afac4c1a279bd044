use predicates::prelude::*;

use super::flashprompt;
use flashprompt::test_utils::TestEnvironment;

#[test]
fn test_remove_force() {
    let env = TestEnvironment::with_templates(&[("a", "A"), ("b", "B")]).unwrap();

    flashprompt(&env)
        .args(["remove", "a", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed template 'a'"));

    assert_eq!(env.template_names(), vec!["b"]);
}

#[test]
fn test_remove_needs_confirmation() {
    let env = TestEnvironment::with_templates(&[("a", "A")]).unwrap();

    flashprompt(&env)
        .args(["remove", "a"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Confirmation required to remove template 'a'"))
        .stderr(predicate::str::contains("--force"));

    assert_eq!(env.template_names(), vec!["a"]);
}

#[test]
fn test_remove_missing() {
    let env = TestEnvironment::with_templates(&[("greeting", "Hi")]).unwrap();

    flashprompt(&env)
        .args(["remove", "greetings", "--force"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Template 'greetings' not found"))
        .stderr(predicate::str::contains("Did you mean 'greeting'?"));

    assert_eq!(env.template_names(), vec!["greeting"]);
}

#[test]
fn test_remove_drops_duplicates() {
    let env = TestEnvironment::with_templates(&[("dup", "1"), ("keep", "k"), ("dup", "2")]).unwrap();

    flashprompt(&env).args(["remove", "dup", "--force"]).assert().success();

    assert_eq!(env.template_names(), vec!["keep"]);
}
