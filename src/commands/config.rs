//! Config subcommands handler

use anyhow::Result;

use chapterbar::theme::current_theme;
use chapterbar::Config;

use super::paint;

/// Show current configuration as TOML.
pub fn handle_show(config: &Config) -> Result<()> {
    let toml_str = toml::to_string_pretty(config)?;
    let theme = current_theme(config);
    println!("{}", paint(&toml_str, |text| theme.primary_text(text)));
    Ok(())
}

/// Print the configuration file path.
pub fn handle_path() -> Result<()> {
    println!("{}", Config::config_path()?.display());
    Ok(())
}

/// Open configuration file in the default editor.
///
/// Uses $EDITOR environment variable (defaults to 'vi').
#[cfg(not(tarpaulin_include))]
pub fn handle_edit(config: &Config) -> Result<()> {
    let config_path = Config::config_path()?;
    let theme = current_theme(config);

    // Ensure config exists
    if !config_path.exists() {
        config.save()?;
    }

    // Get editor from environment
    let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());

    println!(
        "{}",
        paint(
            &format!("Opening {} with {}", config_path.display(), editor),
            |text| theme.primary_text(text)
        )
    );

    std::process::Command::new(&editor)
        .arg(&config_path)
        .status()
        .map_err(|e| anyhow::anyhow!("Failed to open editor: {}", e))?;

    Ok(())
}
