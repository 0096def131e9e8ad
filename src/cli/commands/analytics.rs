use crate::cli::errors::CommandResult;
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::ShellContext;
use crate::cli::ui::views;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "dashboard",
            "Show totals, progress and alerts",
            "dashboard",
            cmd_dashboard,
        ),
        CommandEntry::new(
            "analytics",
            "Break expenses down by category",
            "analytics",
            cmd_analytics,
        ),
    ]
}

fn cmd_dashboard(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.show_dashboard();
    Ok(())
}

fn cmd_analytics(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    views::render_analytics(&context.store.category_breakdown(), context.currency_symbol());
    Ok(())
}
