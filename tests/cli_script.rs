mod common;

use predicates::prelude::*;
use predicates::str::contains;

use common::{setup_home, tally};

#[test]
fn script_mode_runs_basic_flow() {
    let home = setup_home();
    tally(&home)
        .write_stdin("budget 100 monthly\nexpense 40 Food Lunch\nincome 10 - Refund\nexit\n")
        .assert()
        .success()
        .stdout(contains("Budget set successfully!"))
        .stdout(contains("Transaction added!"))
        .stdout(contains("Spent:     $30.00"))
        .stdout(contains("Remaining: $70.00"))
        .stdout(contains("[######..............] 30.0%"));
}

#[test]
fn transactions_are_listed_with_signed_amounts() {
    let home = setup_home();
    tally(&home)
        .write_stdin(
            "budget 100\nexpense 40 Food \"Team lunch\"\nincome 10 Gifts Refund\ntransactions\n",
        )
        .assert()
        .success()
        .stdout(contains("Team lunch"))
        .stdout(contains("Food • "))
        .stdout(contains("-$40.00"))
        .stdout(contains("+$10.00"));
}

#[test]
fn analytics_uses_net_spent_as_denominator() {
    let home = setup_home();
    tally(&home)
        .write_stdin("budget 100\nexpense 40 Food Lunch\nincome 10 - Refund\nanalytics\n")
        .assert()
        .success()
        .stdout(contains("133.3%"))
        .stdout(contains("Expenses by Category"))
        .stdout(contains("$40.00"));
}

#[test]
fn threshold_alerts_follow_spending() {
    let home = setup_home();
    tally(&home)
        .write_stdin("budget 100\nexpense 50 Food Groceries\n")
        .assert()
        .success()
        .stdout(contains("INFO: [i] You've spent 50% of your budget."));

    let home = setup_home();
    tally(&home)
        .write_stdin("budget 100\nexpense 120 Rent Deposit\n")
        .assert()
        .success()
        .stdout(contains("WARNING: [!] You have exceeded your budget!"))
        .stdout(contains("80%").not());
}

#[test]
fn invalid_input_is_reported_and_the_shell_continues() {
    let home = setup_home();
    tally(&home)
        .write_stdin("budget abc\nbudget -5\nexpense 5\nbudget 20\n")
        .assert()
        .success()
        .stdout(contains("Please enter a valid budget amount"))
        .stdout(contains("usage: expense"))
        .stdout(contains("Budget set successfully!"));
}

#[test]
fn unknown_commands_get_a_suggestion() {
    let home = setup_home();
    tally(&home)
        .write_stdin("dashbord\n")
        .assert()
        .success()
        .stdout(contains("Unknown command `dashbord`"))
        .stdout(contains("Suggestion: `dashboard`?"));
}

#[test]
fn reset_in_script_mode_needs_the_flag() {
    let home = setup_home();
    tally(&home)
        .write_stdin("budget 100\nexpense 10 Food Snack\nreset\nreset --yes\ntransactions\n")
        .assert()
        .success()
        .stdout(contains("run `reset --yes`"))
        .stdout(contains("App has been reset."))
        .stdout(contains("No transactions recorded yet."));
}

#[test]
fn theme_toggle_is_persisted() {
    let home = setup_home();
    tally(&home)
        .write_stdin("theme\n")
        .assert()
        .success()
        .stdout(contains("Theme set to dark."));

    let config = std::fs::read_to_string(home.join("config").join("config.json")).unwrap();
    assert!(config.contains("\"dark\""));
}
