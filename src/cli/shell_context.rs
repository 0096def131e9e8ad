use std::{path::PathBuf, sync::Arc};

use dialoguer::theme::ColorfulTheme;
use strsim::levenshtein;
use tally_config::{app_home, Config, ConfigManager};
use tally_core::{Clock, LedgerStore};
use tally_storage_json::{JsonFileStore, LedgerPersistence};
use tracing::{info, warn};

use super::commands;
use super::errors::{CliError, CommandError, CommandResult};
use super::io as cli_io;
use super::output;
use super::registry::CommandRegistry;
use super::system_clock::SystemClock;
use super::ui::views;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

/// Everything a command handler may touch: the ledger store, its persistence,
/// and user preferences.
pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub store: LedgerStore,
    pub persistence: LedgerPersistence<JsonFileStore>,
    pub config_manager: ConfigManager,
    pub config: Config,
    pub theme: ColorfulTheme,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        Self::with_home(mode, app_home(), Arc::new(SystemClock))
    }

    pub fn with_home(mode: CliMode, home: PathBuf, clock: Arc<dyn Clock>) -> Result<Self, CliError> {
        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);

        let config_manager = ConfigManager::with_base_dir(home.clone())?;
        let config = config_manager.load()?;
        output::apply_config(&config);

        let data_dir = config.resolve_data_dir(&home);
        let persistence = LedgerPersistence::new(JsonFileStore::new(data_dir.clone())?);
        let report = persistence.load_with_report();
        for warning in &report.warnings {
            output::warning(warning);
        }
        info!(
            path = %data_dir.display(),
            transactions = report.ledger.transaction_count(),
            "ledger loaded"
        );

        let context = ShellContext {
            mode,
            registry,
            store: LedgerStore::from_ledger(report.ledger, clock),
            persistence,
            config_manager,
            config,
            theme: ColorfulTheme::default(),
        };

        if mode == CliMode::Interactive {
            output::info("Welcome to tally. Type `help` to list commands.");
            context.show_dashboard();
        }
        Ok(context)
    }

    pub(crate) fn mode(&self) -> CliMode {
        self.mode
    }

    pub(crate) fn currency_symbol(&self) -> &str {
        &self.config.currency_symbol
    }

    /// Writes the ledger to its slots. A failed write is reported and the
    /// in-memory ledger stays authoritative.
    pub(crate) fn persist(&self) {
        if let Err(err) = self.persistence.save(self.store.ledger()) {
            warn!(error = %err, "failed to save ledger");
            output::warning(format!("Could not save ledger: {err}"));
        }
    }

    pub(crate) fn persist_config(&self) -> CommandResult {
        self.config_manager
            .save(&self.config)
            .map_err(CommandError::from)
    }

    pub(crate) fn show_dashboard(&self) {
        views::render_dashboard(
            &self.store.dashboard_snapshot(),
            self.store.budget().period,
            self.store.threshold_alert(),
            self.currency_symbol(),
        );
    }

    /// Splits one input line into words and runs the command it names.
    pub(crate) fn run_line(&mut self, line: &str) -> Result<LoopControl, CommandError> {
        let words = match shell_words::split(line) {
            Ok(words) => words,
            Err(err) => {
                self.print_warning(&format!("Could not parse input: {err}"));
                return Ok(LoopControl::Continue);
            }
        };
        let Some((command, args)) = words.split_first() else {
            return Ok(LoopControl::Continue);
        };
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        self.dispatch(command, &args)
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        let handler = self
            .registry
            .get(&command.to_lowercase())
            .map(|entry| entry.handler);
        let Some(handler) = handler else {
            self.suggest_command(command);
            return Ok(LoopControl::Continue);
        };
        match handler(self, args) {
            Ok(()) => Ok(LoopControl::Continue),
            Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
            Err(err) => Err(err),
        }
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        output::warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));

        let closest = self
            .registry
            .vocabulary()
            .map(|word| (levenshtein(word, &input.to_lowercase()), word))
            .min_by_key(|(distance, _)| *distance);
        if let Some((distance, word)) = closest {
            if distance <= 3 {
                output::info(format!("Suggestion: `{word}`?"));
            }
        }
    }

    pub(crate) fn confirm(&self, prompt: &str) -> Result<bool, CommandError> {
        cli_io::confirm_action(&self.theme, prompt, false)
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        self.confirm("Exit tally?").map_err(CliError::from)
    }

    pub(crate) fn report_error(&self, err: CommandError) -> Result<(), CliError> {
        match err {
            CommandError::ExitRequested => Ok(()),
            CommandError::Validation(err) => {
                self.print_warning(&err.to_string());
                Ok(())
            }
            CommandError::InvalidArguments(message) => {
                self.print_error(&message);
                self.print_hint("Use `help <command>` for usage details.");
                Ok(())
            }
            other => {
                self.print_error(&other.to_string());
                Ok(())
            }
        }
    }

    pub(crate) fn print_error(&self, message: &str) {
        output::error(message);
    }

    pub(crate) fn print_warning(&self, message: &str) {
        output::warning(message);
    }

    pub(crate) fn print_hint(&self, message: &str) {
        output::hint(message);
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use tally_core::ManualClock;
    use tally_domain::{BudgetPeriod, LedgerState};
    use tempfile::TempDir;

    use super::*;

    fn script_context(home: &TempDir) -> ShellContext {
        let clock = ManualClock::new(Utc.with_ymd_and_hms(2025, 3, 14, 9, 30, 0).unwrap());
        ShellContext::with_home(CliMode::Script, home.path().to_path_buf(), Arc::new(clock))
            .expect("context")
    }

    fn run(context: &mut ShellContext, lines: &[&str]) {
        for line in lines {
            if let Err(err) = context.run_line(line) {
                context.report_error(err).expect("report");
            }
        }
    }

    #[test]
    fn commands_mutate_and_persist_the_ledger() {
        let home = TempDir::new().unwrap();
        let mut context = script_context(&home);
        run(
            &mut context,
            &[
                "budget 100 monthly",
                "expense 40 Food Lunch",
                "income 10 - Refund",
            ],
        );

        let budget = context.store.budget();
        assert_eq!(budget.spent, 30.0);
        assert_eq!(budget.period, BudgetPeriod::Monthly);
        assert_eq!(context.store.transactions().len(), 2);

        let reloaded = script_context(&home);
        assert_eq!(reloaded.store.ledger(), context.store.ledger());
    }

    #[test]
    fn invalid_amounts_are_reported_without_mutation() {
        let home = TempDir::new().unwrap();
        let mut context = script_context(&home);
        run(&mut context, &["budget 100", "expense abc Food Lunch", "expense 5 Food \"  \""]);
        assert!(context.store.transactions().is_empty());
        assert_eq!(context.store.budget().spent, 0.0);
    }

    #[test]
    fn reset_requires_explicit_flag_in_script_mode() {
        let home = TempDir::new().unwrap();
        let mut context = script_context(&home);
        run(&mut context, &["budget 50", "expense 5 Food Snack", "reset"]);
        assert_eq!(context.store.transactions().len(), 1);

        run(&mut context, &["reset --yes"]);
        assert_eq!(context.store.ledger().state(), LedgerState::Empty);
    }

    #[test]
    fn exit_stops_the_loop() {
        let home = TempDir::new().unwrap();
        let mut context = script_context(&home);
        assert_eq!(context.run_line("exit").unwrap(), LoopControl::Exit);
        assert_eq!(context.run_line("QUIT").unwrap(), LoopControl::Exit);
        assert_eq!(context.run_line("   ").unwrap(), LoopControl::Continue);
        assert_eq!(context.run_line("budget \"10").unwrap(), LoopControl::Continue);
        assert_eq!(context.run_line("dashbord").unwrap(), LoopControl::Continue);
    }
}
