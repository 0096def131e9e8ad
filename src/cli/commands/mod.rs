pub mod analytics;
pub mod budget;
pub mod system;
pub mod transaction;

use crate::cli::errors::CommandError;
use crate::cli::registry::CommandRegistry;

/// Registers every shell command, in the order `help` lists them.
pub fn register_all(registry: &mut CommandRegistry) {
    let definitions = budget::definitions()
        .into_iter()
        .chain(transaction::definitions())
        .chain(analytics::definitions())
        .chain(system::definitions());
    for entry in definitions {
        registry.register(entry);
    }
}

pub(crate) fn usage_error(usage: &str) -> CommandError {
    CommandError::InvalidArguments(format!("usage: {usage}"))
}

/// Amount text that is not a number maps to NaN, which the store rejects as
/// an invalid amount.
pub(crate) fn parse_amount(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amount_parsing_maps_garbage_to_nan() {
        assert_eq!(parse_amount(" 12.5 "), 12.5);
        assert!(parse_amount("12,5").is_nan());
        assert!(parse_amount("").is_nan());
    }

    #[test]
    fn every_command_is_registered_once() {
        let mut registry = CommandRegistry::new();
        register_all(&mut registry);
        let names: Vec<_> = registry.entries().iter().map(|entry| entry.name).collect();
        assert_eq!(
            names,
            vec![
                "budget",
                "reset",
                "expense",
                "income",
                "transactions",
                "dashboard",
                "analytics",
                "theme",
                "help",
                "version",
                "exit",
            ]
        );
        assert_eq!(registry.get("quit").map(|entry| entry.name), Some("exit"));
    }
}
