use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Registry document used by the link tests.
pub const REGISTRY: &str = r#"{
    "cms_base_url": "https://cms.example",
    "default_langcode": "en",
    "revisionable_entity_types": ["node"],
    "resource_types": [
        {"entity_type_id": "node", "bundle": "news"},
        {"entity_type_id": "taxonomy_term", "bundle": "tags"}
    ]
}"#;

/// Run the CLI with an isolated data directory.
pub fn run_cli(args: &[&str], data_dir: &Path) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_next-site"));
    cmd.args(args);
    cmd.env("NEXT_SITE_DATA_DIR", data_dir);
    cmd.env_remove("RUST_LOG");
    cmd.output().expect("Failed to execute CLI")
}

/// Run the CLI and expect success.
pub fn run_cli_success(args: &[&str], data_dir: &Path) -> String {
    let output = run_cli(args, data_dir);
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("CLI command failed: {:?}\nstderr: {}", args, stderr);
    }
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Run the CLI and expect failure, returning stderr.
pub fn run_cli_failure(args: &[&str], data_dir: &Path) -> String {
    let output = run_cli(args, data_dir);
    if output.status.success() {
        panic!("CLI command should have failed: {:?}", args);
    }
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// Write a file under `dir` and return its path as a string.
pub fn write_file(dir: &Path, name: &str, content: &str) -> String {
    let path: PathBuf = dir.join(name);
    fs::write(&path, content).expect("Failed to write file");
    path.to_string_lossy().to_string()
}

/// Add the example blog site.
pub fn add_blog_site(data_dir: &Path) {
    run_cli_success(
        &[
            "site",
            "add",
            "blog",
            "--label",
            "Blog",
            "--base-url",
            "https://site.example",
            "--preview-url",
            "https://site.example/api/preview",
            "--preview-secret",
            "s3cr3t",
        ],
        data_dir,
    );
}
