//! Command handlers for the binary

pub mod create;
pub mod version;
