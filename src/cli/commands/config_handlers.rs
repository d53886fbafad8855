use crate::cli::commands::{CliContext, CommandDefinition, CommandError, CommandResult};
use crate::cli::{forms, output};
use crate::config::{Theme, SUGGESTED_WINDOWS};
use crate::storage::StorageBackend;

pub fn definitions() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new(
            "config",
            "Show or change settings",
            "config [window=<days>] [theme=<System|Light|Dark>]",
            run_config,
        ),
        CommandDefinition::new(
            "reset",
            "Delete all subscriptions",
            "reset [--yes]",
            run_reset,
        ),
    ]
}

fn run_config(context: &mut CliContext, args: &[String]) -> CommandResult {
    if args.is_empty() {
        output::section("Settings");
        output::info(format!(
            "Upcoming window: {} days (suggested: {:?})",
            context.config.upcoming_window_days, SUGGESTED_WINDOWS
        ));
        output::info(format!("Theme: {}", context.config.theme.display_name()));
        output::info(format!(
            "Config file: {}",
            context.config_manager.path().display()
        ));
        output::info(format!("Store file: {}", context.store.path().display()));
        return Ok(());
    }

    let pairs = forms::split_key_values(args).map_err(CommandError::Usage)?;
    for (key, value) in &pairs {
        match key.as_str() {
            "window" => {
                context.config.upcoming_window_days =
                    forms::parse_positive_days(value).map_err(CommandError::Usage)?;
            }
            "theme" => {
                context.config.theme = Theme::parse(value).ok_or_else(|| {
                    CommandError::Usage(format!(
                        "`{}` is not a theme (System, Light, Dark)",
                        value
                    ))
                })?;
            }
            other => {
                return Err(CommandError::Usage(format!("unknown setting `{}`", other)));
            }
        }
    }
    context.config_manager.save(&context.config)?;
    output::success("Settings saved");
    Ok(())
}

fn run_reset(context: &mut CliContext, args: &[String]) -> CommandResult {
    let assume_yes = args.iter().any(|arg| arg == "--yes");
    if !forms::confirm(
        "Delete all subscriptions? This cannot be undone",
        assume_yes,
    ) {
        output::info("Cancelled.");
        return Ok(());
    }
    context.store.reset()?;
    output::success("All subscriptions deleted");
    Ok(())
}
