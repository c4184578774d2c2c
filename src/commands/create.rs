//! `create` command entry point

use std::path::Path;

use anyhow::Result;
use terraform_installer::logging;
use terraform_installer::{Answers, Config, CreateUseCase, Target};
use tracing::{debug, info, warn};

/// Load inputs, set up logging, then fetch and write `target`
pub fn cmd_create(dir: &Path, log_level: Option<&str>, target: Target) -> Result<()> {
    let (config, warnings) = Config::load_for_dir(dir)?;

    let (level, rejected) = logging::resolve_level(log_level, config.log.level);
    logging::init(dir, level)?;
    if let Some(raw) = rejected {
        warn!("Invalid log level {:?}, using \"info\"", raw);
    }
    for warning in &warnings {
        warn!("{}", warning);
    }
    debug!(dir = %dir.display(), target = %target, "Running create");

    let mut create = CreateUseCase::new(dir, Answers::new(config.answers));
    let result = create.execute(target)?;

    if result.is_empty() {
        info!("Nothing to create for {}", target);
    } else {
        info!(
            "{} created in: {}",
            title_case(target.command()),
            dir.display()
        );
    }
    Ok(())
}

/// `ignition-configs` -> `Ignition-Configs`
fn title_case(command: &str) -> String {
    command
        .split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join("-")
}
