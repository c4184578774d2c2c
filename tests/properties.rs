//! Property tests for terraform-installer.
//!
//! Properties use randomized input generation to explore edge cases and
//! protect invariants of the asset store and the input parsers.
//!
//! Run with: `cargo test --test properties`

#[path = "properties/store.rs"]
mod store;

#[path = "properties/parsing.rs"]
mod parsing;
