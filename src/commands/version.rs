//! `version` command

/// Print the binary name and version
pub fn cmd_version() {
    println!("{} {}", env!("CARGO_BIN_NAME"), env!("CARGO_PKG_VERSION"));
}
