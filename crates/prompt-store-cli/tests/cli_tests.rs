use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command with --no-color flag for testing
fn prompt_store_cmd() -> Command {
    let mut cmd = Command::cargo_bin("prompt-store").expect("Failed to find prompt-store binary");
    cmd.env_remove("PROMPT_STORE_DB");
    cmd.arg("--no-color");
    cmd
}

/// Runs a command with `--json` and parses its stdout.
fn run_json(db_arg: &str, args: &[&str]) -> Value {
    let output = prompt_store_cmd()
        .args(["--database-file", db_arg, "--json"])
        .args(args)
        .output()
        .expect("Failed to run prompt-store");
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}

/// Adds a prompt and returns its id.
fn add_prompt(db_arg: &str, title: &str, content: &str, tags: &str) -> String {
    let created = run_json(
        db_arg,
        &["add", title, "--content", content, "--tags", tags],
    );
    created["id"]
        .as_str()
        .expect("created prompt should have an id")
        .to_string()
}

#[test]
fn test_cli_add_prompt_success() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    prompt_store_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "add",
            "Code review",
            "--content",
            "Review this diff.",
            "--tags",
            "Coding,review",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created prompt with ID:"))
        .stdout(predicate::str::contains("- Title: Code review"));
}

#[test]
fn test_cli_add_reads_content_from_stdin() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    let output = prompt_store_cmd()
        .args(["--database-file", db_arg, "--json", "add", "Piped"])
        .write_stdin("Summarize the following text.\n")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let created: Value = serde_json::from_slice(&output).unwrap();
    let id = created["id"].as_str().unwrap();

    let prompt = run_json(db_arg, &["show", id]);
    assert_eq!(prompt["content"], "Summarize the following text.");
}

#[test]
fn test_cli_list_empty_prompts() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    prompt_store_cmd()
        .args(["--database-file", db_path.to_str().unwrap(), "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No prompts found."));
}

#[test]
fn test_cli_default_command_lists_prompts() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    add_prompt(db_arg, "Listed", "content", "misc");

    prompt_store_cmd()
        .args(["--database-file", db_arg])
        .assert()
        .success()
        .stdout(predicate::str::contains("### Listed"))
        .stdout(predicate::str::contains("Showing 1-1 of 1"));
}

#[test]
fn test_cli_show_prompt() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    let id = add_prompt(db_arg, "Show Title", "Full prompt body", "Beta,alpha");

    prompt_store_cmd()
        .args(["--database-file", db_arg, "show", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Show Title"))
        .stdout(predicate::str::contains("Full prompt body"))
        .stdout(predicate::str::contains("- Tags: `alpha`, `beta`"));
}

#[test]
fn test_cli_duplicate_title_fails() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    add_prompt(db_arg, "Taken", "first", "a");

    prompt_store_cmd()
        .args(["--database-file", db_arg, "add", "Taken", "--content", "second"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Error [DUPLICATE_TITLE]: A prompt with this title already exists",
        ));

    let page = run_json(db_arg, &["list"]);
    assert_eq!(page["total"], 1);
}

#[test]
fn test_cli_json_error_response() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    let output = prompt_store_cmd()
        .args([
            "--database-file",
            db_arg,
            "--json",
            "add",
            "Bad tags",
            "--content",
            "x",
            "--tags",
            "good,bad tag!",
        ])
        .assert()
        .failure()
        .get_output()
        .stdout
        .clone();

    let response: Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(response["error"]["code"], "INVALID_TAG");
    assert!(response["error"]["message"]
        .as_str()
        .unwrap()
        .contains("bad tag!"));
}

#[test]
fn test_cli_update_replaces_prompt() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    let id = add_prompt(db_arg, "Draft", "old", "keep,drop");

    prompt_store_cmd()
        .args([
            "--database-file",
            db_arg,
            "update",
            &id,
            "--title",
            "Final",
            "--content",
            "new",
            "--tags",
            "keep",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated prompt with ID:"))
        .stdout(predicate::str::contains("- Title: Final"));

    let prompt = run_json(db_arg, &["show", &id]);
    assert_eq!(prompt["title"], "Final");
    assert_eq!(prompt["content"], "new");
    assert_eq!(prompt["tags"], serde_json::json!(["keep"]));
}

#[test]
fn test_cli_update_missing_prompt() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    prompt_store_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "update",
            "no-such-id",
            "--title",
            "T",
            "--content",
            "C",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error [NOT_FOUND]: Prompt not found"));
}

#[test]
fn test_cli_delete_prompt() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    let id = add_prompt(db_arg, "Doomed", "content", "temp");

    prompt_store_cmd()
        .args(["--database-file", db_arg, "delete", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "Deleted prompt with ID: {id}"
        )));

    prompt_store_cmd()
        .args(["--database-file", db_arg, "show", &id])
        .assert()
        .failure()
        .stderr(predicate::str::contains("NOT_FOUND"));

    prompt_store_cmd()
        .args(["--database-file", db_arg, "tags"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- `temp` (0 prompts)"));
}

#[test]
fn test_cli_search_prompts() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    add_prompt(db_arg, "Rust review", "Check lifetimes", "rust");
    add_prompt(db_arg, "Poem", "Write a haiku", "fun");

    prompt_store_cmd()
        .args(["--database-file", db_arg, "search", "RUST"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Search results for \"RUST\""))
        .stdout(predicate::str::contains("### Rust review"))
        .stdout(predicate::str::contains("Poem").not());
}

#[test]
fn test_cli_filter_by_tags() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    add_prompt(db_arg, "Both", "x", "a,b");
    add_prompt(db_arg, "Only A", "x", "a");
    add_prompt(db_arg, "Neither", "x", "c");

    let results = run_json(db_arg, &["filter", "A,b"]);
    assert_eq!(results["matched_tags"], serde_json::json!(["a", "b"]));
    assert_eq!(results["total"], 2);
    assert_eq!(results["has_more"], false);

    prompt_store_cmd()
        .args(["--database-file", db_arg, "filter", "c"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Prompts tagged `c`"))
        .stdout(predicate::str::contains("### Neither"));
}

#[test]
fn test_cli_list_tags() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    add_prompt(db_arg, "One", "1", "zeta,alpha");
    add_prompt(db_arg, "Two", "2", "alpha");

    let tags = run_json(db_arg, &["tags"]);
    assert_eq!(tags["total"], 2);
    assert_eq!(tags["tags"][0]["name"], "alpha");
    assert_eq!(tags["tags"][0]["prompt_count"], 2);
    assert_eq!(tags["tags"][1]["name"], "zeta");

    prompt_store_cmd()
        .args(["--database-file", db_arg, "tags"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Tags"))
        .stdout(predicate::str::contains("- `alpha` (2 prompts)"))
        .stdout(predicate::str::contains("- `zeta` (1 prompt)"));
}

#[test]
fn test_cli_pagination() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    for i in 0..3 {
        add_prompt(db_arg, &format!("Prompt {i}"), "content", "page");
    }

    let page = run_json(db_arg, &["list", "--limit", "2"]);
    assert_eq!(page["prompts"].as_array().unwrap().len(), 2);
    assert_eq!(page["total"], 3);
    assert_eq!(page["has_more"], true);

    let page = run_json(db_arg, &["list", "--limit", "2", "--offset", "2"]);
    assert_eq!(page["prompts"].as_array().unwrap().len(), 1);
    assert_eq!(page["has_more"], false);

    prompt_store_cmd()
        .args(["--database-file", db_arg, "list", "--limit", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("INVALID_INPUT"));

    prompt_store_cmd()
        .args(["--database-file", db_arg, "list", "--offset", "-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("INVALID_INPUT"));
}

#[test]
fn test_cli_database_file_from_environment() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("env.db");

    let mut cmd = Command::cargo_bin("prompt-store").unwrap();
    cmd.env("PROMPT_STORE_DB", &db_path)
        .args(["--no-color", "add", "From env", "--content", "x"])
        .assert()
        .success();

    assert!(db_path.exists());
}

#[test]
fn test_cli_reset_requires_confirmation() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    add_prompt(db_arg, "Precious", "content", "keep");

    prompt_store_cmd()
        .args(["--database-file", db_arg, "reset"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--confirm"));

    assert_eq!(run_json(db_arg, &["list"])["total"], 1);

    prompt_store_cmd()
        .args(["--database-file", db_arg, "reset", "--confirm"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Prompt store reset."));

    assert_eq!(run_json(db_arg, &["list"])["total"], 0);
    assert_eq!(run_json(db_arg, &["tags"])["total"], 0);
}

#[test]
fn test_cli_global_reset_flag() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    add_prompt(db_arg, "Old", "content", "old");

    prompt_store_cmd()
        .args(["--database-file", db_arg, "--reset", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No prompts found."));
}
