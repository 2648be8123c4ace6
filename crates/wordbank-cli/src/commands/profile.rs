//! Profile command implementation.

use crate::cli::{ProfileAction, ProfileArgs};
use crate::config::{Config, Profile};
use crate::error::{CliError, Result};
use crate::output::Formatter;
use std::path::PathBuf;

/// Execute the profile command.
pub fn execute_profile(args: ProfileArgs, config: &mut Config, formatter: &Formatter) -> Result<()> {
    match args.action {
        ProfileAction::List => list_profiles(config, formatter),
        ProfileAction::Show => show_active_profile(config, formatter),
        ProfileAction::Switch { name } => {
            switch_profile(config, name.clone())?;
            config.save()?;
            println!(
                "{}",
                formatter.success(&format!("Switched to profile '{}'", name))
            );
            Ok(())
        }
        ProfileAction::Set { name, db_path } => {
            let action = set_profile(config, name.clone(), db_path);
            config.save()?;
            println!(
                "{}",
                formatter.success(&format!("{} profile '{}'", action, name))
            );
            Ok(())
        }
        ProfileAction::Delete { name } => {
            if delete_profile(config, &name)? {
                config.save()?;
                println!(
                    "{}",
                    formatter.success(&format!("Deleted profile '{}'", name))
                );
            } else {
                println!(
                    "{}",
                    formatter.warning(&format!("Profile '{}' does not exist", name))
                );
            }
            Ok(())
        }
    }
}

/// List all profiles.
fn list_profiles(config: &Config, formatter: &Formatter) -> Result<()> {
    if config.profiles.is_empty() {
        println!("{}", formatter.info("No profiles configured"));
        return Ok(());
    }

    let mut names: Vec<&String> = config.profiles.keys().collect();
    names.sort();

    println!("Available profiles:");
    for name in names {
        let active = name == &config.active_profile;
        let marker = if active { "* " } else { "  " };
        println!(
            "{}{}",
            marker,
            if active {
                formatter.success(name)
            } else {
                name.clone()
            }
        );
        println!("    Database: {}", config.profiles[name].database.display());
    }

    Ok(())
}

/// Show the active profile.
fn show_active_profile(config: &Config, formatter: &Formatter) -> Result<()> {
    let profile = config.get_active_profile()?;

    println!("Active profile: {}", formatter.success(&config.active_profile));
    println!("  Database: {}", profile.database.display());

    Ok(())
}

fn switch_profile(config: &mut Config, name: String) -> Result<()> {
    config.switch_profile(name)
}

/// Create or update a profile; returns the verb for the message.
fn set_profile(config: &mut Config, name: String, database: PathBuf) -> &'static str {
    let action = if config.profiles.contains_key(&name) {
        "Updated"
    } else {
        "Created"
    };

    config.set_profile(name, Profile { database });
    action
}

/// Delete a profile; returns whether it existed.
fn delete_profile(config: &mut Config, name: &str) -> Result<bool> {
    if name == config.active_profile {
        return Err(CliError::Config(
            "Cannot delete the active profile".to_string(),
        ));
    }

    Ok(config.profiles.remove(name).is_some())
}
