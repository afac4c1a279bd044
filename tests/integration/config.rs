use predicates::prelude::*;

use super::flashprompt;
use flashprompt::test_utils::TestEnvironment;

/// Run without `--store` so the configured save directory is used.
fn without_store(env: &TestEnvironment) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(env!("CARGO_BIN_EXE_flashprompt"));
    cmd.arg("--config")
        .arg(&env.config_path)
        .env("NO_COLOR", "1")
        .env("CLICOLOR", "0")
        .env_remove("RUST_LOG")
        .env_remove("FLASHPROMPT_STORE")
        .env_remove("FLASHPROMPT_CONFIG");
    cmd
}

#[test]
fn test_config_path() {
    let env = TestEnvironment::new().unwrap();

    flashprompt(&env)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(env.config_path.display().to_string()));
}

#[test]
fn test_config_show_defaults() {
    let env = TestEnvironment::new().unwrap();

    flashprompt(&env)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(default)"))
        .stdout(predicate::str::contains(env.store_path.display().to_string()));
}

#[test]
fn test_set_dir_moves_store() {
    let env = TestEnvironment::new().unwrap();
    let save_dir = env.path().join("my-prompts");

    without_store(&env)
        .args(["config", "set-dir"])
        .arg(&save_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Save directory set to"));

    let config = std::fs::read_to_string(&env.config_path).unwrap();
    assert!(config.contains("save_directory"));

    without_store(&env).args(["add", "t", "--body", "{{x}}"]).assert().success();
    let stored = std::fs::read_to_string(save_dir.join("prompts.json")).unwrap();
    assert!(stored.contains("\"template\": \"{{x}}\""));

    without_store(&env)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains(save_dir.join("prompts.json").display().to_string()));
}

#[test]
fn test_clear_dir() {
    let env = TestEnvironment::new().unwrap();

    flashprompt(&env).args(["config", "set-dir", "/tmp/somewhere"]).assert().success();
    flashprompt(&env)
        .args(["config", "clear-dir"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Save directory cleared"));

    flashprompt(&env)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(default)"));
}

#[test]
fn test_invalid_config_file() {
    let env = TestEnvironment::new().unwrap();
    std::fs::create_dir_all(env.config_path.parent().unwrap()).unwrap();
    std::fs::write(&env.config_path, "save_directory = [").unwrap();

    flashprompt(&env)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"))
        .stderr(predicate::str::contains("flashprompt config path"));
}
