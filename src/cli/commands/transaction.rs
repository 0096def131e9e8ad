use tally_domain::TransactionKind;

use super::usage_error;
use crate::cli::errors::CommandResult;
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::ShellContext;
use crate::cli::ui::views;

const EXPENSE_USAGE: &str = "expense <amount> <category> <description...>";
const INCOME_USAGE: &str = "income <amount> <category> <description...>";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("expense", "Record money spent", EXPENSE_USAGE, cmd_expense),
        CommandEntry::new("income", "Record money received", INCOME_USAGE, cmd_income),
        CommandEntry::new(
            "transactions",
            "List transactions, oldest first",
            "transactions",
            cmd_transactions,
        ),
    ]
}

fn cmd_expense(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    add(context, TransactionKind::Expense, args, EXPENSE_USAGE)
}

fn cmd_income(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    add(context, TransactionKind::Income, args, INCOME_USAGE)
}

fn add(
    context: &mut ShellContext,
    kind: TransactionKind,
    args: &[&str],
    usage: &str,
) -> CommandResult {
    let [amount, category, description @ ..] = args else {
        return Err(usage_error(usage));
    };
    let amount = super::parse_amount(amount);
    let description = description.join(" ");

    context
        .store
        .add_transaction(kind, amount, *category, description)?;
    context.persist();
    output::success("Transaction added!");
    context.show_dashboard();
    Ok(())
}

fn cmd_transactions(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    views::render_transactions(context.store.transactions(), context.currency_symbol());
    Ok(())
}
