#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Output;
use tempfile::TempDir;

/// Isolated environment for one pathtree run: its own store, config and data dirs
pub struct Workspace {
    temp_dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("create temp dir"),
        }
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Store file used by `run` unless the test passes its own --store
    pub fn store_path(&self) -> PathBuf {
        self.root().join("store.json")
    }

    /// Write a file relative to the workspace and return its path
    pub fn write<P: AsRef<Path>, S: AsRef<str>>(&self, path: P, content: S) -> PathBuf {
        let full_path = self.root().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("create parent dirs");
        }
        fs::write(&full_path, content.as_ref()).expect("write file");
        full_path
    }

    pub fn read_store(&self) -> serde_json::Value {
        let content = fs::read_to_string(self.store_path()).expect("read store");
        serde_json::from_str(&content).expect("store is JSON")
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("pathtree").expect("pathtree binary not found");
        cmd.env("XDG_CONFIG_HOME", self.root().join("config"))
            .env("XDG_DATA_HOME", self.root().join("data"))
            .env_remove("RUST_LOG")
            .arg("--store")
            .arg(self.store_path());
        cmd
    }

    /// Run pathtree with given arguments and return (stdout, stderr, success)
    pub fn run<I, S>(&self, args: I) -> (String, String, bool)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<std::ffi::OsStr>,
    {
        let mut cmd = self.command();
        cmd.args(args);
        collect(cmd.output().expect("Failed to execute pathtree"))
    }

    /// Same as `run`, feeding `stdin` to the process
    pub fn run_with_stdin<I, S>(&self, args: I, stdin: impl Into<Vec<u8>>) -> (String, String, bool)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<std::ffi::OsStr>,
    {
        let mut cmd = self.command();
        cmd.args(args).write_stdin(stdin);
        collect(cmd.output().expect("Failed to execute pathtree"))
    }
}

fn collect(output: Output) -> (String, String, bool) {
    let Output {
        status,
        stdout,
        stderr,
    } = output;
    let stdout = String::from_utf8_lossy(&stdout).to_string();
    let stderr = String::from_utf8_lossy(&stderr).to_string();

    (stdout, stderr, status.success())
}

/// Helper to convert path to string
pub fn p<P: AsRef<Path>>(path: P) -> String {
    path.as_ref().to_string_lossy().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workspace_write() {
        let ws = Workspace::new();
        let path = ws.write("nested/listing.json", "{}");
        assert!(path.exists());
        assert!(path.starts_with(ws.root()));
    }
}
