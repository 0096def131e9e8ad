use tally_config::Theme;

use super::usage_error;
use crate::cli::errors::{CommandError, CommandResult};
use crate::cli::help;
use crate::cli::output::{self, section as output_section};
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::ShellContext;

const THEME_USAGE: &str = "theme [light|dark]";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("theme", "Toggle or set the colour theme", THEME_USAGE, cmd_theme),
        CommandEntry::new(
            "help",
            "Show available commands",
            "help [command]",
            cmd_help,
        ),
        CommandEntry::new("version", "Show build metadata", "version", cmd_version),
        CommandEntry::new("exit", "Exit the shell", "exit", cmd_exit).with_aliases(&["quit"]),
    ]
}

fn cmd_theme(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let theme = match args {
        [] => context.config.theme.toggled(),
        [value] => match value.to_ascii_lowercase().as_str() {
            "light" => Theme::Light,
            "dark" => Theme::Dark,
            _ => return Err(usage_error(THEME_USAGE)),
        },
        _ => return Err(usage_error(THEME_USAGE)),
    };

    context.config.theme = theme;
    context.persist_config()?;
    output::apply_config(&context.config);
    output::success(format!("Theme set to {theme}."));
    Ok(())
}

fn cmd_version(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output_section(format!("tally {}", env!("CARGO_PKG_VERSION")));
    output::line(format!(
        "  Build hash : {} ({})",
        env!("TALLY_BUILD_HASH"),
        env!("TALLY_BUILD_STATUS")
    ));
    output::line(format!("  Built at   : {}", env!("TALLY_BUILD_TIMESTAMP")));
    output::line(format!("  Target     : {}", env!("TALLY_BUILD_TARGET")));
    output::line(format!("  Profile    : {}", env!("TALLY_BUILD_PROFILE")));
    Ok(())
}

fn cmd_help(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if let Some(command) = args.first().map(|name| name.to_lowercase()) {
        if let Some(entry) = context.registry.get(&command) {
            help::print_command(entry);
        } else {
            context.suggest_command(args[0]);
        }
        return Ok(());
    }

    help::print_overview(&context.registry);
    Ok(())
}

fn cmd_exit(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    Err(CommandError::ExitRequested)
}
