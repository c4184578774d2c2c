//! Assertion macros with descriptive failure messages.

use std::path::Path;

/// List files in a directory (for failure messages)
pub fn list_files(dir: &Path) -> Vec<String> {
    let mut files = Vec::new();
    if let Ok(entries) = std::fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                files.extend(list_files(&path));
            } else {
                files.push(path.display().to_string());
            }
        }
    }
    files.sort();
    files
}

/// Assert that an artifact exists in the install directory.
///
/// # Example
/// ```ignore
/// assert_created!(env, "install-config.yaml");
/// ```
#[macro_export]
macro_rules! assert_created {
    ($env:expr, $path:expr) => {
        assert!(
            $env.exists($path),
            "Expected '{}' in the install directory.\nFiles found:\n  {}",
            $path,
            $crate::common::list_files($env.install_dir.path()).join("\n  ")
        );
    };
}

/// Assert that an artifact does NOT exist in the install directory.
#[macro_export]
macro_rules! assert_not_created {
    ($env:expr, $path:expr) => {
        assert!(
            !$env.exists($path),
            "Expected '{}' to NOT exist, but it does.\nFiles found:\n  {}",
            $path,
            $crate::common::list_files($env.install_dir.path()).join("\n  ")
        );
    };
}

/// Assert the command succeeded, printing its output otherwise.
#[macro_export]
macro_rules! assert_success {
    ($result:expr) => {
        assert!(
            $result.success,
            "Expected success, got exit code {}.\n{}",
            $result.exit_code,
            $result.combined_output()
        );
    };
}
