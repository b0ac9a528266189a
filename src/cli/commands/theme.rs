use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::settings::{apply_theme, current_theme};
use crate::ui::messages::{info, success};

/// Print the current theme, or apply and save a new one.
pub fn handle(cli: &Cli) -> AppResult<()> {
    if let Commands::Theme { mode } = &cli.command {
        let Some(theme) = *mode else {
            info(format!("Current theme: {}", current_theme()));
            return Ok(());
        };

        apply_theme(theme);

        if !cli.test {
            // reload so a --file override is not written back
            let updated = Config {
                theme,
                ..Config::load()?
            };
            updated.save()?;
        }

        success(format!("Theme set to {theme}."));
    }

    Ok(())
}
