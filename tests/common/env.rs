//! Test environment for isolated terraform-install runs.
//!
//! Every run gets its own install directory, no terminal on stdin (so prompts
//! never block) and a scrubbed `TERRAFORM_INSTALL_*` environment.

use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// Result of running the CLI
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated install directory and the answers passed to every run
pub struct TestEnv {
    pub install_dir: TempDir,
    answers: Vec<(String, String)>,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            install_dir: TempDir::new().expect("Failed to create install dir"),
            answers: Vec::new(),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_terraform-install")),
        }
    }

    /// Environment populated with a complete answer set
    pub fn with_answers(answers: &[(&str, &str)]) -> Self {
        let mut env = Self::new();
        for (key, value) in answers {
            env.answer(key, value);
        }
        env
    }

    /// Pass `TERRAFORM_INSTALL_<KEY>=value` to every run
    pub fn answer(&mut self, key: &str, value: &str) -> &mut Self {
        let name = format!("TERRAFORM_INSTALL_{}", key.to_uppercase());
        self.answers.retain(|(existing, _)| *existing != name);
        self.answers.push((name, value.to_string()));
        self
    }

    /// Path inside the install directory
    pub fn path(&self, relative: &str) -> PathBuf {
        self.install_dir.path().join(relative)
    }

    pub fn exists(&self, relative: &str) -> bool {
        self.path(relative).exists()
    }

    pub fn read(&self, relative: &str) -> String {
        std::fs::read_to_string(self.path(relative))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative, e))
    }

    pub fn write(&self, relative: &str, content: &str) {
        let full_path = self.path(relative);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
    }

    /// Run with `--dir` pointing at the install directory
    pub fn run(&self, args: &[&str]) -> TestResult {
        let dir = self.install_dir.path().to_string_lossy().to_string();
        let mut full_args: Vec<&str> = args.to_vec();
        full_args.extend(["--dir", dir.as_str()]);
        self.run_raw(&full_args, self.install_dir.path())
    }

    /// Run with exactly `args`, from `cwd`
    pub fn run_raw(&self, args: &[&str], cwd: &Path) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(cwd)
            .args(args)
            .stdin(Stdio::null())
            .env("NO_COLOR", "1")
            .env_remove("TERRAFORM_INSTALL_LOG");

        for (key, _) in std::env::vars() {
            if key.starts_with("TERRAFORM_INSTALL_") {
                cmd.env_remove(key);
            }
        }
        for (key, value) in &self.answers {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute terraform-install");
        output_to_result(output)
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
