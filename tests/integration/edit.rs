use predicates::prelude::*;

use super::flashprompt;
use flashprompt::test_utils::TestEnvironment;

#[test]
fn test_edit_body_reports_fields() {
    let env = TestEnvironment::with_templates(&[("t", "{{a}} and {{b}}")]).unwrap();

    flashprompt(&env)
        .args(["edit", "t", "--body", "{{b}} then {{c}}", "--set", "b=2", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("+ c"))
        .stdout(predicate::str::contains("- a"))
        // The value given for "b" survives the body change
        .stdout(predicate::str::contains("2 then "))
        .stdout(predicate::str::contains("Saved template 't'"));

    assert_eq!(env.template_body("t").as_deref(), Some("{{b}} then {{c}}"));
}

#[test]
fn test_edit_from_file_trims() {
    let env = TestEnvironment::with_templates(&[("t", "old")]).unwrap();
    let file = env.write_file("new.txt", "\n  new {{body}}  \n").unwrap();

    flashprompt(&env).args(["edit", "t", "--yes", "--file"]).arg(&file).assert().success();

    assert_eq!(env.template_body("t").as_deref(), Some("new {{body}}"));
}

#[test]
fn test_edit_rename() {
    let env = TestEnvironment::with_templates(&[("old", "body"), ("other", "x")]).unwrap();

    flashprompt(&env)
        .args(["edit", "old", "--rename", "new", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved template 'new'"));

    assert_eq!(env.template_names(), vec!["other", "new"]);
    assert_eq!(env.template_body("new").as_deref(), Some("body"));
}

#[test]
fn test_edit_rename_onto_existing_is_refused() {
    let env = TestEnvironment::with_templates(&[("a", "A"), ("b", "B")]).unwrap();

    flashprompt(&env)
        .args(["edit", "a", "--rename", "b", "--body", "A2", "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Template 'b' already exists"));

    assert_eq!(env.template_body("a").as_deref(), Some("A"));
    assert_eq!(env.template_body("b").as_deref(), Some("B"));
}

#[test]
fn test_edit_requires_confirmation_without_terminal() {
    let env = TestEnvironment::with_templates(&[("t", "old")]).unwrap();

    flashprompt(&env)
        .args(["edit", "t", "--body", "new"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Confirmation required to edit template 't'"))
        .stderr(predicate::str::contains("--yes"));

    assert_eq!(env.template_body("t").as_deref(), Some("old"));
}

#[test]
fn test_edit_no_changes() {
    let env = TestEnvironment::with_templates(&[("t", "same {{x}}")]).unwrap();

    flashprompt(&env)
        .args(["edit", "t", "--body", "  same {{x}}\n"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No changes"));
}

#[test]
fn test_edit_empty_body_rejected() {
    let env = TestEnvironment::with_templates(&[("t", "keep")]).unwrap();

    flashprompt(&env)
        .args(["edit", "t", "--body", "  ", "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Template body must not be empty"));

    assert_eq!(env.template_body("t").as_deref(), Some("keep"));
}

#[test]
fn test_edit_nothing_requested() {
    let env = TestEnvironment::with_templates(&[("t", "keep")]).unwrap();

    flashprompt(&env)
        .args(["edit", "t"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Nothing to change for 't'"));
}

#[test]
fn test_edit_set_accepts_fields_of_new_body() {
    let env = TestEnvironment::with_templates(&[("t", "{{a}}{{b}}")]).unwrap();

    flashprompt(&env)
        .args(["edit", "t", "--body", "{{b}}-{{c}}", "--set", "c=3", "--set", "b=2", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("+ c"))
        .stdout(predicate::str::contains("2-3"));

    assert_eq!(env.template_body("t").as_deref(), Some("{{b}}-{{c}}"));
}

#[test]
fn test_edit_set_rejects_field_of_neither_body() {
    let env = TestEnvironment::with_templates(&[("t", "{{a}}")]).unwrap();

    flashprompt(&env)
        .args(["edit", "t", "--body", "{{b}}", "--set", "zzz=1", "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Template has no placeholder named 'zzz'"));

    assert_eq!(env.template_body("t").as_deref(), Some("{{a}}"));
}
