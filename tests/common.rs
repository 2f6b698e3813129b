use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

/// A symptrace command isolated from the user's config and environment
pub fn symptrace(config_dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("symptrace");
    cmd.env("SYMPTRACE_CONFIG_DIR", config_dir)
        .env_remove("SYMPTRACE_GRAPH")
        .env_remove("SYMPTRACE_LOG")
        .env_remove("RUST_LOG");
    cmd
}

/// Write a graph document into `dir` and return its path
#[allow(dead_code)]
pub fn write_graph(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("write graph document");
    path
}

#[allow(dead_code)]
pub fn stdout_json(stdout: &[u8]) -> serde_json::Value {
    serde_json::from_slice(stdout).expect("stdout is a JSON document")
}
