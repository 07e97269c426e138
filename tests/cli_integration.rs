//! CLI integration tests for Recipe.
//!
//! These tests drive the binary end to end: init, inspection commands and
//! generation of the toolchain file.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use tempfile::TempDir;

const MANIFEST: &str = r#"[package]
name = "reinforce"
version = "0.1.0"
package-type = "static-library"

[requirements]
requires = ["xtensor/0.24.7", "fmt/10.2.1", "range-v3/0.12.0"]
"#;

/// Get the recipe binary command, isolated from the user's global config.
fn recipe(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("recipe").unwrap();
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("RUST_LOG");
    cmd
}

/// Create a temporary project containing the reinforce manifest.
fn project() -> (TempDir, PathBuf) {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("reinforce");
    fs::create_dir_all(&root).unwrap();
    fs::write(root.join("Recipe.toml"), MANIFEST).unwrap();
    (tmp, root)
}

// ============================================================================
// recipe init
// ============================================================================

#[test]
fn test_init_creates_manifest() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("mylib");

    recipe(tmp.path())
        .args(["init", "mylib"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Initialized `mylib`"));

    let manifest = fs::read_to_string(dir.join("Recipe.toml")).unwrap();
    assert!(manifest.contains("name = \"mylib\""));
    assert!(dir.join(".gitignore").exists());
}

#[test]
fn test_init_refuses_existing_manifest() {
    let (tmp, root) = project();

    recipe(tmp.path())
        .arg("init")
        .current_dir(&root)
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_init_then_requirements() {
    let tmp = TempDir::new().unwrap();

    recipe(tmp.path())
        .args(["init", "--name", "empty", "proj"])
        .current_dir(tmp.path())
        .assert()
        .success();

    recipe(tmp.path())
        .arg("requirements")
        .current_dir(tmp.path().join("proj"))
        .assert()
        .success()
        .stdout(predicate::str::contains("test_requires gtest/[>=1.13.0]"));
}

// ============================================================================
// recipe options
// ============================================================================

#[test]
fn test_options_lists_declared_toggles() {
    let (tmp, root) = project();

    recipe(tmp.path())
        .args(["options", "-o", "with_fast_math=True"])
        .current_dir(&root)
        .assert()
        .success()
        .stdout(predicate::str::contains("with_tbb"))
        .stdout(predicate::str::contains("with_pymodule"))
        .stdout(predicate::str::contains("with_testing"))
        .stdout(predicate::str::is_match(r"with_fast_math\s+True\s+\(override\)").unwrap());
}

#[test]
fn test_options_json() {
    let (tmp, root) = project();

    let output = recipe(tmp.path())
        .args(["options", "--json"])
        .current_dir(&root)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let names: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["with_tbb", "with_pymodule", "with_fast_math", "with_testing"]);
}

// ============================================================================
// recipe requirements
// ============================================================================

#[test]
fn test_requirements_defaults() {
    let (tmp, root) = project();

    recipe(tmp.path())
        .arg("requirements")
        .current_dir(&root)
        .assert()
        .success()
        .stdout(predicate::str::contains("xtensor/0.24.7"))
        .stdout(predicate::str::contains("onetbb").not())
        .stdout(predicate::str::contains("pybind11").not())
        .stdout(predicate::str::contains("gtest/[>=1.13.0]"));
}

#[test]
fn test_requirements_with_tbb_and_pymodule() {
    let (tmp, root) = project();

    let output = recipe(tmp.path())
        .args([
            "requirements",
            "--json",
            "-o",
            "with_pymodule=True",
            "-o",
            "with_tbb=True",
        ])
        .current_dir(&root)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        json["requires"],
        serde_json::json!([
            "xtensor/0.24.7",
            "fmt/10.2.1",
            "range-v3/0.12.0",
            "onetbb/2021.10.0",
            "pybind11/2.12.0"
        ])
    );
    assert_eq!(json["test_requires"], serde_json::json!(["gtest/[>=1.13.0]"]));
}

#[test]
fn test_requirements_from_subdirectory() {
    let (tmp, root) = project();
    let sub = root.join("src").join("core");
    fs::create_dir_all(&sub).unwrap();

    recipe(tmp.path())
        .args(["requirements", "-o", "with_tbb=on"])
        .current_dir(&sub)
        .assert()
        .success()
        .stdout(predicate::str::contains("onetbb/2021.10.0"));
}

#[test]
fn test_project_config_overrides_apply() {
    let (tmp, root) = project();
    fs::create_dir_all(root.join(".recipe")).unwrap();
    fs::write(
        root.join(".recipe/config.toml"),
        "[options]\nwith_pymodule = true\n",
    )
    .unwrap();

    recipe(tmp.path())
        .arg("requirements")
        .current_dir(&root)
        .assert()
        .success()
        .stdout(predicate::str::contains("pybind11/2.12.0"));

    // The command line wins over the project config
    recipe(tmp.path())
        .args(["requirements", "-o", "with_pymodule=False"])
        .current_dir(&root)
        .assert()
        .success()
        .stdout(predicate::str::contains("pybind11").not());
}

// ============================================================================
// recipe toolchain
// ============================================================================

#[test]
fn test_toolchain_json() {
    let (tmp, root) = project();

    let output = recipe(tmp.path())
        .args(["toolchain", "--json", "-o", "with_tbb=True"])
        .current_dir(&root)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let vars = json.as_object().unwrap();
    assert_eq!(vars.len(), 23);
    assert_eq!(vars["USE_TBB"], "ON");
    assert_eq!(vars["ENABLE_FAST_MATH"], "OFF");
    assert_eq!(vars["ENABLE_BUILD_PYTHON_EXTENSION"], "OFF");
    assert_eq!(vars["USE_PYBIND11_FINDPYTHON"], true);
    assert_eq!(vars["ENABLE_IPO"], false);
}

#[test]
fn test_toolchain_cmake_args() {
    let (tmp, root) = project();

    recipe(tmp.path())
        .args(["toolchain", "--cmake-args", "-o", "with_testing=yes"])
        .current_dir(&root)
        .assert()
        .success()
        .stdout(predicate::str::contains("-DENABLE_TESTING=ON"))
        .stdout(predicate::str::contains("-DUSE_TBB=OFF"))
        .stdout(predicate::str::contains("-DUSE_PYBIND11_FINDPYTHON=ON"));
}

// ============================================================================
// recipe generate
// ============================================================================

#[test]
fn test_generate_writes_files() {
    let (tmp, root) = project();
    fs::write(root.join("CMakeLists.txt"), "cmake_minimum_required(VERSION 3.15)\n").unwrap();

    recipe(tmp.path())
        .args(["generate", "-o", "with_tbb=True"])
        .current_dir(&root)
        .assert()
        .success();

    let out = root.join("build/generators");
    let toolchain = fs::read_to_string(out.join("recipe_toolchain.cmake")).unwrap();
    assert!(toolchain.contains("set(USE_TBB \"ON\" CACHE STRING"));
    assert!(toolchain.contains("set(ENABLE_IPO OFF CACHE BOOL"));

    let requirements = fs::read_to_string(out.join("requirements.json")).unwrap();
    assert!(requirements.contains("onetbb/2021.10.0"));
}

#[test]
fn test_generate_custom_output_dir() {
    let (tmp, root) = project();

    recipe(tmp.path())
        .args(["generate", "--output-dir", "gen"])
        .current_dir(&root)
        .assert()
        .success();

    assert!(root.join("gen/recipe_toolchain.cmake").exists());
    assert!(root.join("gen/requirements.json").exists());
    assert!(!root.join("build").exists());
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_unknown_option_fails() {
    let (tmp, root) = project();

    recipe(tmp.path())
        .args(["generate", "-o", "with_cuda=True"])
        .current_dir(&root)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown option `with_cuda`"))
        .stderr(predicate::str::contains("recipe options"));

    assert!(!root.join("build").exists());
}

#[test]
fn test_invalid_option_value_fails() {
    let (tmp, root) = project();

    recipe(tmp.path())
        .args(["requirements", "-o", "with_tbb=maybe"])
        .current_dir(&root)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value `maybe`"));
}

#[test]
fn test_broken_project_config_fails() {
    let (tmp, root) = project();
    fs::create_dir_all(root.join(".recipe")).unwrap();
    fs::write(
        root.join(".recipe/config.toml"),
        "[options]\nwith_tbb = \"True\"\n",
    )
    .unwrap();

    recipe(tmp.path())
        .arg("generate")
        .current_dir(&root)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse config file"));

    assert!(!root.join("build").exists());
}

#[test]
fn test_missing_manifest_fails() {
    let tmp = TempDir::new().unwrap();

    recipe(tmp.path())
        .arg("requirements")
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not find `Recipe.toml`"))
        .stderr(predicate::str::contains("recipe init"));
}

// ============================================================================
// recipe completions
// ============================================================================

#[test]
fn test_completions_bash() {
    let tmp = TempDir::new().unwrap();

    recipe(tmp.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("recipe"));
}
