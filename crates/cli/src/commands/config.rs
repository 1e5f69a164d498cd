//! Preference commands

use anyhow::Result;

use crate::commands::CommandContext;
use crate::config::Config;
use crate::output::colors;

/// Print the effective preferences
pub fn show(ctx: &CommandContext) -> Result<()> {
    println!("{}", ctx.render(&ctx.config)?);
    Ok(())
}

/// Print the preferences file location
pub fn path() -> Result<()> {
    let file = Config::config_file()?;
    if file.exists() {
        println!("{}", file.display());
    } else {
        println!("{} {}", file.display(), colors::dim("(not created yet)"));
    }
    Ok(())
}

/// Overwrite the preferences file with defaults
pub fn reset(ctx: &mut CommandContext) -> Result<()> {
    ctx.config.reset()?;
    println!(
        "{} {}",
        colors::success("Preferences reset to defaults:"),
        Config::config_file()?.display()
    );
    Ok(())
}
