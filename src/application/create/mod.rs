//! Create use case
//!
//! Resolves the assets of one `create` target and persists them.

mod result;
#[cfg(test)]
mod tests;
mod use_case;

pub use result::CreateResult;
pub use use_case::CreateUseCase;
