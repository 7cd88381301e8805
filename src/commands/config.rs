//! Config subcommands handler

use std::path::Path;

use anyhow::Result;

use scriptcut::theme::current_theme;
use scriptcut::Config;

/// Show current configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show(config: &Config) -> Result<()> {
    let toml_str = toml::to_string_pretty(config)?;
    let theme = current_theme();
    println!("{}", theme.primary_text(toml_str.trim_end()));
    Ok(())
}

/// Print where the configuration is read from.
#[cfg(not(tarpaulin_include))]
pub fn handle_path(explicit: Option<&Path>) -> Result<()> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => Config::config_path()?,
    };
    let theme = current_theme();
    let note = if path.exists() { "" } else { " (not created yet)" };
    println!("{}{}", path.display(), theme.secondary_text(note));
    Ok(())
}
