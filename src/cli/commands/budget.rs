use tally_domain::BudgetPeriod;

use super::usage_error;
use crate::cli::errors::{CommandError, CommandResult};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::{CliMode, ShellContext};

const BUDGET_USAGE: &str = "budget <amount> [weekly|monthly|yearly]";
const RESET_USAGE: &str = "reset [--yes]";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "budget",
            "Start a new budget (clears transactions)",
            BUDGET_USAGE,
            cmd_budget,
        ),
        CommandEntry::new("reset", "Erase the budget and all transactions", RESET_USAGE, cmd_reset),
    ]
}

fn cmd_budget(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let (amount, period) = match args {
        [amount] => (super::parse_amount(amount), context.config.default_period),
        [amount, period] => {
            let period = period
                .parse::<BudgetPeriod>()
                .map_err(|err| CommandError::InvalidArguments(err.to_string()))?;
            (super::parse_amount(amount), period)
        }
        _ => return Err(usage_error(BUDGET_USAGE)),
    };

    context.store.set_budget(amount, period)?;
    context.persist();
    output::success("Budget set successfully!");
    context.show_dashboard();
    Ok(())
}

fn cmd_reset(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let confirmed = match args {
        ["--yes"] | ["-y"] => true,
        [] => match context.mode() {
            CliMode::Interactive => {
                context.confirm("Are you sure you want to reset all data?")?
            }
            CliMode::Script => {
                output::warning("Reset needs confirmation; run `reset --yes`.");
                return Ok(());
            }
        },
        _ => return Err(usage_error(RESET_USAGE)),
    };

    if !confirmed {
        output::info("Reset cancelled.");
        return Ok(());
    }

    context.store.reset();
    context.persist();
    output::success("App has been reset.");
    context.show_dashboard();
    Ok(())
}
