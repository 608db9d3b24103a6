use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn art_explorer(root: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("art-explorer").unwrap();
    cmd.env_remove("PROJECT_ROOT")
        .env_remove("ART_EXPLORER_TOOL")
        .env_remove("ART_EXPLORER_SHELL")
        .env_remove("RUST_LOG")
        .arg("--root")
        .arg(root);
    cmd
}

fn project() -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("art.config.json"),
        r#"{
            "projectType": "spa-react",
            "projectVirtualPath": "/src/modules",
            "webpack": { "entry": { "/src/modules/app/index.js": "./src/modules/app/index.js" } }
        }"#,
    )
    .unwrap();
    temp
}

#[test]
fn tree_without_config_shows_advisory() {
    let temp = TempDir::new().unwrap();
    art_explorer(temp.path())
        .arg("tree")
        .assert()
        .success()
        .stderr(predicate::str::contains("Not Art Project"))
        .stdout(predicate::str::contains("app/index.js").not());
}

#[test]
fn tree_lists_modules_and_actions() {
    let temp = project();
    art_explorer(temp.path())
        .arg("tree")
        .assert()
        .success()
        .stdout(predicate::str::contains("📦 app/index.js"))
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("build"));
}

#[test]
fn tree_json_nests_children() {
    let temp = project();
    let output = art_explorer(temp.path())
        .args(["tree", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json[0]["label"], "app/index.js");
    assert_eq!(json[0]["children"][1]["label"], "build");
    assert_eq!(
        json[0]["children"][1]["command"]["command_id"],
        "artProjectExplorer:build"
    );
}

#[test]
fn run_dry_run_prints_command_line() {
    let temp = project();
    art_explorer(temp.path())
        .args(["run", "build", "app/index.js", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"art build -m="app/index.js""#));
}

#[test]
fn run_uses_configured_tool_name() {
    let temp = project();
    art_explorer(temp.path())
        .env("ART_EXPLORER_TOOL", "npx art")
        .args(["run", "serve", "app/index.js", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"npx art serve -m="app/index.js""#));
}

#[test]
fn run_rejects_shell_metacharacters() {
    let temp = project();
    art_explorer(temp.path())
        .args(["run", "build", "app\"; rm -rf /; \"", "--dry-run"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("shell metacharacters"));
}

#[test]
fn run_outside_project_fails() {
    let temp = TempDir::new().unwrap();
    art_explorer(temp.path())
        .args(["run", "serve", "app/index.js", "--dry-run"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not an art project"));
}

#[test]
fn create_project_translates_choice() {
    let temp = TempDir::new().unwrap();
    art_explorer(temp.path())
        .args(["create", "project", "--type", "SSR-Vue", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("art create project -t=ssr-vue"));
}

#[test]
fn create_module_defaults_to_project_type() {
    let temp = project();
    art_explorer(temp.path())
        .args(["create", "module", "shop", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#"art create module -m="shop" -t=spa-react"#,
        ));
}

#[test]
fn init_then_discover() {
    let temp = TempDir::new().unwrap();
    let web = temp.path().join("web");
    fs::create_dir(&web).unwrap();

    art_explorer(&web).arg("init").assert().success();
    assert!(web.join("art.config.json").exists());

    art_explorer(temp.path())
        .arg("discover")
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 1 art project(s)"));
}
