//! Configure command implementation.

use crate::cli::ConfigureArgs;
use crate::config::Config;
use crate::credentials::{Credentials, API_KEY_ENV};
use crate::error::{CliError, Result};
use crate::output::Formatter;
use std::path::Path;

/// Execute the configure command.
///
/// `config_path` is where the configuration file is written when a setting
/// changes.
pub async fn execute_configure(
    args: ConfigureArgs,
    config: &mut Config,
    config_path: &Path,
    formatter: &Formatter,
) -> Result<()> {
    if args.api_key.is_none() && args.model.is_none() && !args.show {
        println!(
            "{}",
            formatter.info("Nothing to change. Use --api-key, --model or --show")
        );
        return Ok(());
    }

    let mut changed = false;

    if let Some(key) = args.api_key {
        let key = key.trim().to_string();
        if key.is_empty() {
            return Err(CliError::InvalidInput("API key cannot be empty".to_string()));
        }

        Credentials { api_key: key }.save(&config.credentials_file)?;
        println!(
            "{}",
            formatter.success(&format!(
                "API key saved to {}",
                config.credentials_file.display()
            ))
        );
    }

    if let Some(model) = args.model {
        config.llm.model = model;
        config.llm.validate().map_err(CliError::Config)?;
        changed = true;
    }

    if changed {
        config.save_to(config_path)?;
        println!(
            "{}",
            formatter.success(&format!("Configuration saved to {}", config_path.display()))
        );
    }

    if args.show {
        show(config, config_path, formatter)?;
    }

    Ok(())
}

fn show(config: &Config, config_path: &Path, formatter: &Formatter) -> Result<()> {
    let key = match Credentials::load(&config.credentials_file)? {
        Some(credentials) => credentials.masked(),
        None => formatter.warning("not set"),
    };

    println!("Config file: {}", config_path.display());
    println!("Credential file: {}", config.credentials_file.display());
    println!("API key: {}", key);
    if std::env::var(API_KEY_ENV).is_ok_and(|v| !v.trim().is_empty()) {
        println!("{}", formatter.info(&format!("{} is set and takes precedence", API_KEY_ENV)));
    }
    println!();
    print!("{}", config.to_toml()?);

    Ok(())
}
