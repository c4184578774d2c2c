//! terraform-install - renders install assets for Terraform-provisioned clusters
//!
//! Usage: terraform-install [--dir <DIR>] [--log-level <LEVEL>] <COMMAND>
//!
//! Commands:
//!   create   Create install-config, manifests, ignition configs or the cluster plan
//!   version  Print version information

use std::process::ExitCode;

use clap::Parser;

mod cli;
mod commands;

use cli::{Cli, Commands};
use terraform_installer::exit_code_for;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Create { target } => {
            commands::create::cmd_create(&cli.dir, cli.log_level.as_deref(), target.target())
        }
        Commands::Version => {
            commands::version::cmd_version();
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::from(exit_code_for(&err) as u8)
        }
    }
}
