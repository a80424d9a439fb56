use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::auth;
use crate::errors::AppResult;
use crate::ui::messages::{error, success, warning};
use std::fs;
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        if *print_config {
            println!("📄 Current configuration ({}):\n", path.display());
            // never echo the password hash itself
            let mut shown = cfg.clone();
            if shown.app_pass_hash.is_some() {
                shown.app_pass_hash = Some("<set>".into());
            }
            println!("{}", shown.to_yaml()?);
        }

        if *check {
            if !path.exists() {
                warning(format!(
                    "Configuration file {} not found, defaults are in use. Run `rworkhours init`.",
                    path.display()
                ));
            } else {
                let content = fs::read_to_string(&path)?;
                let missing = Config::missing_keys(&content)?;
                if missing.is_empty() {
                    success("Configuration file has every known key.");
                } else {
                    warning(format!(
                        "Missing keys (defaults apply): {}",
                        missing.join(", ")
                    ));
                }
            }

            if auth::resolve_hash(cfg).is_none() {
                warning(format!(
                    "No login password hash: set `app_pass_hash` or {}.",
                    auth::PASS_HASH_ENV
                ));
            }
        }

        if *edit_config {
            let default_editor = std::env::var("EDITOR")
                .or_else(|_| std::env::var("VISUAL"))
                .unwrap_or_else(|_| {
                    if cfg!(target_os = "windows") {
                        "notepad".to_string()
                    } else {
                        "nano".to_string()
                    }
                });

            let editor_to_use = editor.clone().unwrap_or_else(|| default_editor.clone());

            match Command::new(&editor_to_use).arg(&path).status() {
                Ok(s) if s.success() => {
                    success(format!(
                        "Configuration file edited successfully using '{}'",
                        editor_to_use
                    ));
                }
                Ok(_) | Err(_) => {
                    warning(format!(
                        "Editor '{}' not available, falling back to '{}'",
                        editor_to_use, default_editor
                    ));

                    match Command::new(&default_editor).arg(&path).status() {
                        Ok(s) if s.success() => {
                            success(format!(
                                "Configuration file edited successfully using fallback '{}'",
                                default_editor
                            ));
                        }
                        Ok(_) | Err(_) => {
                            error(format!(
                                "Failed to edit configuration file using fallback '{}'",
                                default_editor
                            ));
                        }
                    }
                }
            }
        }
    }

    Ok(())
}
