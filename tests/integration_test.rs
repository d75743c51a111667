// tests/integration_test.rs
use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use branch_bump::cli::{run_bump_workflow, BumpArgs};
use branch_bump::config::Config;
use branch_bump::git::Git2Repository;

const PACKAGE_JSON: &str = "{\n  \"name\": \"demo\",\n  \"version\": \"2.3.9\"\n}\n";
const PACKAGE_LOCK_JSON: &str =
    "{\n  \"name\": \"demo\",\n  \"version\": \"2.3.9\",\n  \"lockfileVersion\": 3\n}\n";

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_branch-bump"))
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Fresh repository on `branch` with the two package files committed
fn init_project(branch: &str) -> (tempfile::TempDir, git2::Repository) {
    init_project_in(branch, "")
}

/// Same as `init_project`, with the package files under `subdir`
fn init_project_in(branch: &str, subdir: &str) -> (tempfile::TempDir, git2::Repository) {
    let dir = tempfile::tempdir().unwrap();
    let package_dir = dir.path().join(subdir);
    fs::create_dir_all(&package_dir).unwrap();
    let repo = git2::Repository::init(dir.path()).unwrap();
    {
        let mut config = repo.config().unwrap();
        config.set_str("user.name", "Test Author").unwrap();
        config.set_str("user.email", "test@example.com").unwrap();
    }

    fs::write(package_dir.join("package.json"), PACKAGE_JSON).unwrap();
    fs::write(package_dir.join("package-lock.json"), PACKAGE_LOCK_JSON).unwrap();

    repo.set_head(&format!("refs/heads/{}", branch)).unwrap();
    {
        let mut index = repo.index().unwrap();
        index
            .add_path(&Path::new(subdir).join("package.json"))
            .unwrap();
        index
            .add_path(&Path::new(subdir).join("package-lock.json"))
            .unwrap();
        index.write().unwrap();
        let tree = repo.find_tree(index.write_tree().unwrap()).unwrap();
        let sig = repo.signature().unwrap();
        repo.commit(Some("HEAD"), &sig, &sig, "initial", &tree, &[])
            .unwrap();
    }

    (dir, repo)
}

fn head_message(repo: &git2::Repository) -> String {
    repo.head()
        .unwrap()
        .peel_to_commit()
        .unwrap()
        .message()
        .unwrap()
        .to_string()
}

/// Content of `path` in the tree of the HEAD commit
fn committed_file(repo: &git2::Repository, path: &str) -> String {
    let tree = repo.head().unwrap().peel_to_tree().unwrap();
    let entry = tree.get_path(Path::new(path)).unwrap();
    let blob = repo.find_blob(entry.id()).unwrap();
    String::from_utf8(blob.content().to_vec()).unwrap()
}

#[test]
fn test_branch_bump_help() {
    let output = bin().arg("--help").output().expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = stdout(&output);
    assert!(stdout.contains("branch-bump"));
    assert!(stdout.contains("bump"));
}

#[test]
fn test_bump_help_lists_commit_flag() {
    let output = bin().args(["bump", "--help"]).output().unwrap();

    assert!(output.status.success());
    let stdout = stdout(&output);
    assert!(stdout.contains("--commit"));
    assert!(stdout.contains("-c"));
}

#[test]
fn test_feature_branch_with_commit() {
    let (dir, repo) = init_project("feature/x");

    let output = bin()
        .args(["bump", "--commit", "--dir"])
        .arg(dir.path())
        .output()
        .unwrap();

    assert!(output.status.success(), "stdout: {}", stdout(&output));
    assert!(stdout(&output).contains("Version updated successfully!"));
    assert!(stdout(&output).contains("Changes committed successfully!"));

    let package = fs::read_to_string(dir.path().join("package.json")).unwrap();
    let lock = fs::read_to_string(dir.path().join("package-lock.json")).unwrap();
    assert_eq!(package, PACKAGE_JSON.replace("2.3.9", "2.4.0"));
    assert_eq!(lock, PACKAGE_LOCK_JSON.replace("2.3.9", "2.4.0"));

    assert_eq!(head_message(&repo), "feat: upgrade version");
    let reopened = git2::Repository::open(dir.path()).unwrap();
    let statuses = reopened.statuses(None).unwrap();
    assert!(statuses.is_empty(), "working tree should be clean");
}

#[test]
fn test_fix_branch_without_commit() {
    let (dir, repo) = init_project("fix/bug-123");

    let output = bin()
        .args(["bump", "-C"])
        .arg(dir.path())
        .output()
        .unwrap();

    assert!(output.status.success(), "stdout: {}", stdout(&output));
    let package = fs::read_to_string(dir.path().join("package.json")).unwrap();
    assert!(package.contains(r#""version": "2.3.10""#));
    assert_eq!(head_message(&repo), "initial");
}

#[test]
fn test_unsupported_branch_fails_and_leaves_files() {
    let (dir, _repo) = init_project("main");

    let output = bin()
        .args(["bump", "--commit", "--dir"])
        .arg(dir.path())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("ERROR"));
    assert!(stdout(&output).contains("main"));
    assert_eq!(
        fs::read_to_string(dir.path().join("package.json")).unwrap(),
        PACKAGE_JSON
    );
    assert_eq!(
        fs::read_to_string(dir.path().join("package-lock.json")).unwrap(),
        PACKAGE_LOCK_JSON
    );
}

#[test]
fn test_dry_run_reports_version() {
    let (dir, _repo) = init_project("feature/x");

    let output = bin()
        .args(["bump", "--dry-run", "--dir"])
        .arg(dir.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(stdout(&output).contains("New version would be 2.4.0"));
    assert_eq!(
        fs::read_to_string(dir.path().join("package.json")).unwrap(),
        PACKAGE_JSON
    );
}

#[test]
fn test_workflow_against_real_repository() {
    let (dir, repo) = init_project("hotfix-and-feature");
    let git = Git2Repository::open(dir.path()).unwrap();
    let args = BumpArgs {
        root: dir.path().to_path_buf(),
        commit: true,
        dry_run: false,
    };

    let outcome = run_bump_workflow(&args, &Config::default(), &git).unwrap();

    assert_eq!(outcome.branch, "hotfix-and-feature");
    assert_eq!(outcome.new_version, "2.4.0");
    let commit = repo.head().unwrap().peel_to_commit().unwrap();
    assert_eq!(Some(commit.id().to_string()), outcome.commit_id);
    assert_eq!(commit.parent_count(), 1);
}

#[test]
fn test_commit_from_current_directory_without_dir() {
    let (dir, repo) = init_project("feature/x");

    let output = bin()
        .args(["bump", "--commit"])
        .current_dir(dir.path())
        .output()
        .unwrap();

    assert!(output.status.success(), "stdout: {}", stdout(&output));
    assert!(stdout(&output).contains("Changes committed successfully!"));
    assert_eq!(head_message(&repo), "feat: upgrade version");
    assert_eq!(
        committed_file(&repo, "package.json"),
        PACKAGE_JSON.replace("2.3.9", "2.4.0")
    );
    assert_eq!(
        committed_file(&repo, "package-lock.json"),
        PACKAGE_LOCK_JSON.replace("2.3.9", "2.4.0")
    );
}

#[test]
fn test_commit_with_relative_subdirectory() {
    let (dir, repo) = init_project_in("fix/bug-123", "app");

    let output = bin()
        .args(["bump", "-c", "-C", "app"])
        .current_dir(dir.path())
        .output()
        .unwrap();

    assert!(output.status.success(), "stdout: {}", stdout(&output));
    assert_eq!(head_message(&repo), "fix: upgrade version");
    assert_eq!(
        committed_file(&repo, "app/package.json"),
        PACKAGE_JSON.replace("2.3.9", "2.3.10")
    );
    assert_eq!(
        committed_file(&repo, "app/package-lock.json"),
        PACKAGE_LOCK_JSON.replace("2.3.9", "2.3.10")
    );
}

#[test]
fn test_commit_from_package_directory_inside_repository() {
    let (dir, repo) = init_project_in("feature/y", "packages/web");

    let output = bin()
        .args(["bump", "--commit"])
        .current_dir(dir.path().join("packages").join("web"))
        .output()
        .unwrap();

    assert!(output.status.success(), "stdout: {}", stdout(&output));
    assert_eq!(
        committed_file(&repo, "packages/web/package.json"),
        PACKAGE_JSON.replace("2.3.9", "2.4.0")
    );
}

#[test]
fn test_progress_lines_are_contiguous() {
    let (dir, _repo) = init_project("feature/x");

    let output = bin()
        .args(["bump", "--dry-run"])
        .current_dir(dir.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let out = stdout(&output);
    let lines: Vec<&str> = out.lines().collect();
    let reading = lines
        .iter()
        .position(|line| line.contains("Reading current git branch"))
        .unwrap();
    assert!(
        lines[reading + 1].starts_with("Branch: feature/x"),
        "unexpected output: {}",
        out
    );
}
