// securepass-cli/src/commands/config.rs
use anyhow::Result;
use clap::Subcommand;
use securepass_client::Config;

use crate::output::{print_response, stdout_is_terminal, Response};

#[derive(Subcommand, Clone, Debug)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,
    /// Print the configuration file path
    Path,
}

pub fn handle_config(cmd: ConfigCommands) -> Result<()> {
    match cmd {
        ConfigCommands::Show => {
            let config = Config::load()?;
            if stdout_is_terminal() {
                print!("{}", toml::to_string_pretty(&config)?);
            } else {
                print_response(&Response::ok(config))?;
            }
            Ok(())
        }
        ConfigCommands::Path => {
            println!("{}", Config::config_path()?.display());
            Ok(())
        }
    }
}
