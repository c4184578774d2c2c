//! Terminal prompts for input assets
//!
//! Prompts are only shown when stdin is a terminal; otherwise a missing
//! answer is an `InstallerError::MissingAnswer` naming the environment
//! variable that would have supplied it.

use dialoguer::{Input, Password, Select};
use is_terminal::IsTerminal;

use crate::config::env_key;
use crate::error::InstallerError;

/// A value an input asset needs, and where it can be configured
#[derive(Debug, Clone, Copy)]
pub(crate) struct Question {
    /// Human-readable field, e.g. "cluster name"
    pub field: &'static str,
    /// Key under `[answers]`
    pub key: &'static str,
    /// Prompt text
    pub prompt: &'static str,
}

impl Question {
    pub(crate) const fn new(field: &'static str, key: &'static str, prompt: &'static str) -> Self {
        Self { field, key, prompt }
    }

    fn missing(&self) -> anyhow::Error {
        InstallerError::MissingAnswer {
            field: self.field.to_string(),
            env: env_key(self.key),
        }
        .into()
    }

    fn prompt_failed(&self, err: dialoguer::Error) -> anyhow::Error {
        InstallerError::Prompt {
            field: self.field.to_string(),
            message: err.to_string(),
        }
        .into()
    }

    /// Fail unless a prompt can be shown
    fn ensure_interactive(&self) -> anyhow::Result<()> {
        if is_interactive() {
            Ok(())
        } else {
            Err(self.missing())
        }
    }

    /// Free-text answer validated with `validate`
    pub(crate) fn text(
        &self,
        default: Option<&str>,
        validate: impl Fn(&str) -> Result<(), String>,
    ) -> anyhow::Result<String> {
        self.ensure_interactive()?;
        let mut input = Input::<String>::new()
            .with_prompt(self.prompt)
            .validate_with(move |value: &String| validate(value.trim()));
        if let Some(default) = default {
            input = input.default(default.to_string());
        }
        input
            .interact_text()
            .map(|value| value.trim().to_string())
            .map_err(|e| self.prompt_failed(e))
    }

    /// Free-text answer that may be left empty
    pub(crate) fn optional_text(
        &self,
        validate: impl Fn(&str) -> Result<(), String>,
    ) -> anyhow::Result<String> {
        self.ensure_interactive()?;
        Input::<String>::new()
            .with_prompt(self.prompt)
            .allow_empty(true)
            .validate_with(move |value: &String| {
                let value = value.trim();
                if value.is_empty() {
                    Ok(())
                } else {
                    validate(value)
                }
            })
            .interact_text()
            .map(|value| value.trim().to_string())
            .map_err(|e| self.prompt_failed(e))
    }

    /// Hidden answer, used for secrets
    pub(crate) fn secret(
        &self,
        validate: impl Fn(&str) -> Result<(), String>,
    ) -> anyhow::Result<String> {
        self.ensure_interactive()?;
        let value = Password::new()
            .with_prompt(self.prompt)
            .interact()
            .map_err(|e| self.prompt_failed(e))?;
        let value = value.trim().to_string();
        validate(&value).map_err(|message| {
            anyhow::Error::from(InstallerError::Prompt {
                field: self.field.to_string(),
                message,
            })
        })?;
        Ok(value)
    }

    /// Index of the chosen item
    pub(crate) fn select(&self, items: &[String], default: usize) -> anyhow::Result<usize> {
        self.ensure_interactive()?;
        Select::new()
            .with_prompt(self.prompt)
            .items(items)
            .default(default)
            .interact()
            .map_err(|e| self.prompt_failed(e))
    }
}

/// True when prompts can be shown
pub(crate) fn is_interactive() -> bool {
    std::io::stdin().is_terminal() && std::io::stderr().is_terminal()
}
