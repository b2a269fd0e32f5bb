pub mod models;

pub use models::Update;

use crate::{cli::Cli, logging::Logger};
use anyhow::{Context, Result};
use std::{fs, path::Path};

pub const TOKEN_VAR: &str = "DUCK_TOKEN";
pub const NAMES_VAR: &str = "DUCK_NAMES";

/// Merges the CLI, the environment and the config file, in that order, and
/// stops as soon as the update is valid.
pub fn resolve<F>(cli: &Cli, env: F, logger: &Logger) -> Update
where
    F: Fn(&str) -> Option<String>,
{
    let mut update = from_cli(cli, logger);

    if !update.is_valid() {
        apply_env(&mut update, env, logger);
    }

    if !update.is_valid() {
        apply_file(&mut update, &cli.config, logger);
    }

    update
}

pub fn from_cli(cli: &Cli, logger: &Logger) -> Update {
    logger.debug(format_args!("Set token from CLI to {}", mask(&cli.token)));
    logger.debug(format_args!("Set names from CLI to {}", cli.names.join(", ")));

    Update::new(cli.token.clone(), cli.names.clone())
}

/// Fills the fields still empty from `DUCK_TOKEN` and `DUCK_NAMES`.
pub fn apply_env<F>(update: &mut Update, env: F, logger: &Logger)
where
    F: Fn(&str) -> Option<String>,
{
    if update.token.is_empty() {
        update.token = env(TOKEN_VAR).unwrap_or_default();
        logger.debug(format_args!(
            "Set token from environment to {}",
            mask(&update.token)
        ));
    }

    let names = env(NAMES_VAR).unwrap_or_default();
    if update.names.is_empty() && !names.is_empty() {
        update.names = names.split_whitespace().map(str::to_owned).collect();
        logger.debug(format_args!(
            "Set names from environment to {}",
            update.names.join(", ")
        ));
    }
}

pub fn load_file(path: &Path) -> Result<Update> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    serde_yaml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Fills the fields still empty from the YAML file at `path`. A file that
/// cannot be read or parsed leaves `update` untouched.
pub fn apply_file(update: &mut Update, path: &Path, logger: &Logger) {
    let file = match load_file(path) {
        Ok(file) => file,
        Err(e) => {
            logger.debug(format_args!("{:#}", e));
            return;
        }
    };

    if file.token.is_empty() {
        logger.debug(format_args!(
            "the token is empty after trying to parse {}",
            path.display()
        ));
    } else if update.token.is_empty() {
        update.token = file.token;
    }

    if file.names.is_empty() {
        logger.debug(format_args!(
            "no names/subdomains specified to update from {}",
            path.display()
        ));
    } else if update.names.is_empty() {
        update.names = file.names;
    }
}

/// Hides all but the last four characters of a token.
pub fn mask(token: &str) -> String {
    let count = token.chars().count();
    if count <= 4 {
        return "*".repeat(count);
    }

    let visible: String = token.chars().skip(count - 4).collect();
    format!("{}{}", "*".repeat(count - 4), visible)
}
