//! Command-line surface: help, errors and their exit codes, listing,
//! completions and configuration.

mod common;

use std::fs;

use predicates::prelude::*;

use common::{ACCOUNT, Sandbox};

#[test]
fn help_lists_subcommands() {
    Sandbox::new()
        .sprout()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("new"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn version_flag() {
    Sandbox::new()
        .sprout()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn no_arguments_prints_usage_and_fails() {
    Sandbox::new()
        .sprout()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

// ── sprout new: errors ────────────────────────────────────────────────────────

#[test]
fn invalid_slug_is_a_user_error() {
    let sandbox = Sandbox::new();
    sandbox
        .new_project(".hidden")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid project slug"));
    assert!(!sandbox.out().exists());
}

#[test]
fn unknown_ci_service_lists_known_ones() {
    Sandbox::new()
        .new_project("myproject")
        .args(["--ci", "jenkins"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("jenkins"))
        .stderr(predicate::str::contains(".travis.yml"));
}

#[test]
fn unknown_framework_is_not_found() {
    Sandbox::new()
        .new_project("myproject")
        .args(["--framework", "rails"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("rails"));
}

#[test]
fn missing_account_points_at_flag_and_config() {
    let sandbox = Sandbox::new();
    sandbox
        .sprout()
        .args(["new", "myproject", "--output-dir"])
        .arg(sandbox.out())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--vcs-account"))
        .stderr(predicate::str::contains("defaults.vcs_account"));
}

#[test]
fn missing_template_is_not_found() {
    let sandbox = Sandbox::new();
    sandbox
        .new_project("myproject")
        .arg("--template")
        .arg(sandbox.path().join("no-such-template"))
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Template not found"));
}

#[test]
fn custom_template_is_rendered() {
    let sandbox = Sandbox::new();
    let template = sandbox.path().join("tpl");
    fs::create_dir_all(template.join("_")).unwrap();
    fs::write(template.join("NAME"), "{{ cookiecutter.project_slug }}\n").unwrap();

    sandbox
        .new_project("custom")
        .args(["--ci", "(none)"])
        .arg("--template")
        .arg(&template)
        .assert()
        .success();

    let project = sandbox.project("custom");
    assert_eq!(fs::read_to_string(project.join("NAME")).unwrap(), "custom\n");
    assert!(!project.join("_").exists());
}

#[test]
fn missing_staged_variant_is_not_found() {
    let sandbox = Sandbox::new();
    let template = sandbox.path().join("tpl");
    fs::create_dir_all(template.join("_").join("ci-services")).unwrap();

    sandbox
        .new_project("myproject")
        .args(["--ci", ".travis.yml"])
        .arg("--template")
        .arg(&template)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("No staged CI service variant"));
}

#[test]
fn staged_file_clashing_with_root_is_refused() {
    let sandbox = Sandbox::new();
    let template = sandbox.path().join("tpl");
    let staged = template.join("_").join("ci-services").join(".travis.yml");
    fs::create_dir_all(&staged).unwrap();
    fs::write(template.join("README.rst"), "root readme\n").unwrap();
    fs::write(staged.join("README.rst"), "ci readme\n").unwrap();

    sandbox
        .new_project("myproject")
        .args(["--ci", ".travis.yml"])
        .arg("--template")
        .arg(&template)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"));

    let readme = fs::read_to_string(sandbox.project("myproject").join("README.rst")).unwrap();
    assert_eq!(readme, "root readme\n");
}

// ── configuration ─────────────────────────────────────────────────────────────

#[test]
fn config_file_supplies_defaults() {
    let sandbox = Sandbox::new();
    let config = sandbox.path().join("sprout.toml");
    fs::write(
        &config,
        format!("[defaults]\nvcs_account = \"{ACCOUNT}\"\nvcs_platform = \"GitLab.com\"\n"),
    )
    .unwrap();

    sandbox
        .sprout()
        .arg("--config")
        .arg(&config)
        .args(["new", "myproject", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "git@gitlab.com:painless-software/myproject.git",
        ));
}

#[test]
fn environment_overrides_defaults() {
    Sandbox::new()
        .sprout()
        .env("SPROUT_DEFAULTS__VCS_ACCOUNT", "acme")
        .args(["new", "myproject", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("git@github.com:acme/myproject.git"));
}

#[test]
fn flags_override_environment() {
    Sandbox::new()
        .sprout()
        .env("SPROUT_DEFAULTS__VCS_ACCOUNT", "acme")
        .args(["new", "myproject", "--vcs-account", "other", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("git@github.com:other/myproject.git"));
}

#[test]
fn missing_explicit_config_is_a_config_error() {
    let sandbox = Sandbox::new();
    sandbox
        .sprout()
        .arg("--config")
        .arg(sandbox.path().join("absent.toml"))
        .arg("list")
        .assert()
        .code(4);
}

#[test]
fn init_writes_config_once() {
    let sandbox = Sandbox::new();
    let config = sandbox.path().join("conf").join("sprout.toml");

    sandbox
        .sprout()
        .arg("--config")
        .arg(&config)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration created"));
    assert!(fs::read_to_string(&config).unwrap().contains("[defaults]"));

    sandbox
        .sprout()
        .arg("--config")
        .arg(&config)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn config_get_prints_value() {
    Sandbox::new()
        .sprout()
        .env("SPROUT_DEFAULTS__FRAMEWORK", "Flask")
        .args(["config", "get", "defaults.framework"])
        .assert()
        .success()
        .stdout("Flask\n");
}

#[test]
fn config_get_unknown_key_fails() {
    Sandbox::new()
        .sprout()
        .args(["config", "get", "nope"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn config_path_honours_flag() {
    let sandbox = Sandbox::new();
    let config = sandbox.path().join("custom.toml");
    fs::write(&config, "").unwrap();

    sandbox
        .sprout()
        .arg("--config")
        .arg(&config)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("custom.toml"));
}

// ── list / completions ────────────────────────────────────────────────────────

#[test]
fn list_shows_all_categories() {
    Sandbox::new()
        .sprout()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("bitbucket-pipelines.yml"))
        .stdout(predicate::str::contains("PHP-generic"))
        .stdout(predicate::str::contains("Deployment technologies:"));
}

#[test]
fn list_json_is_parseable() {
    let output = Sandbox::new()
        .sprout()
        .args(["--output-format", "json", "list", "ci"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let doc: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let services = doc["ci_services"].as_array().unwrap();
    assert_eq!(services.len(), 6);
    assert!(doc.get("frameworks").is_none());
}

#[test]
fn completions_for_bash() {
    Sandbox::new()
        .sprout()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("_sprout"));
}
