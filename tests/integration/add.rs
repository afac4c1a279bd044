use predicates::prelude::*;

use super::flashprompt;
use flashprompt::test_utils::TestEnvironment;

#[test]
fn test_add_with_body() {
    let env = TestEnvironment::new().unwrap();

    flashprompt(&env)
        .args(["add", "greeting", "--body", "Dear {{name}}, welcome to {{place}}."])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved template 'greeting'"))
        .stdout(predicate::str::contains("name, place"));

    assert_eq!(
        env.template_body("greeting").as_deref(),
        Some("Dear {{name}}, welcome to {{place}}.")
    );
}

#[test]
fn test_add_trims_name_and_body() {
    let env = TestEnvironment::new().unwrap();

    flashprompt(&env).args(["add", "  padded  ", "--body", "\n  text  \n"]).assert().success();

    assert_eq!(env.template_names(), vec!["padded"]);
    assert_eq!(env.template_body("padded").as_deref(), Some("text"));
}

#[test]
fn test_add_from_file() {
    let env = TestEnvironment::new().unwrap();
    let file = env.write_file("review.txt", "Review this {{language}} code:\n\n{{code}}\n").unwrap();

    flashprompt(&env)
        .args(["add", "review", "--file"])
        .arg(&file)
        .assert()
        .success();

    assert_eq!(
        env.template_body("review").as_deref(),
        Some("Review this {{language}} code:\n\n{{code}}")
    );
}

#[test]
fn test_add_from_stdin() {
    let env = TestEnvironment::new().unwrap();

    flashprompt(&env)
        .args(["add", "piped"])
        .write_stdin("Summarize {{topic}}\n")
        .assert()
        .success();

    assert_eq!(env.template_body("piped").as_deref(), Some("Summarize {{topic}}"));
}

#[test]
fn test_add_with_vars() {
    let env = TestEnvironment::new().unwrap();

    flashprompt(&env)
        .args(["add", "translate", "--body", "Translate to", "--var", "language", "--var", "text"])
        .assert()
        .success();

    assert_eq!(
        env.template_body("translate").as_deref(),
        Some("Translate to {{language}} {{text}}")
    );
}

#[test]
fn test_add_invalid_var_name() {
    let env = TestEnvironment::new().unwrap();

    flashprompt(&env)
        .args(["add", "bad", "--body", "x", "--var", "has space"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid placeholder name"));

    assert!(env.template_names().is_empty());
}

#[test]
fn test_add_empty_body_rejected() {
    let env = TestEnvironment::new().unwrap();

    flashprompt(&env)
        .args(["add", "blank", "--body", "   \n"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Template body must not be empty"));

    assert!(env.template_names().is_empty());
}

#[test]
fn test_add_empty_name_rejected() {
    let env = TestEnvironment::new().unwrap();

    flashprompt(&env)
        .args(["add", "", "--body", "text"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Template name must not be empty"));
}

#[test]
fn test_add_duplicate_rejected() {
    let env = TestEnvironment::with_templates(&[("greeting", "Hi")]).unwrap();

    flashprompt(&env)
        .args(["add", "greeting", "--body", "Hello"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Template 'greeting' already exists"))
        .stderr(predicate::str::contains("flashprompt edit greeting"));

    assert_eq!(env.template_body("greeting").as_deref(), Some("Hi"));
}
