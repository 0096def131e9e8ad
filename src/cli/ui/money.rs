use tally_domain::TransactionKind;

/// `$12.50`, `$-3.00`: symbol first, two decimals, sign left to the number.
pub fn format_money(symbol: &str, amount: f64) -> String {
    format!("{symbol}{amount:.2}")
}

/// Transaction list style: `-$40.00` for expenses, `+$10.00` for incomes.
pub fn format_signed_money(symbol: &str, kind: TransactionKind, amount: f64) -> String {
    let sign = match kind {
        TransactionKind::Expense => '-',
        TransactionKind::Income => '+',
    };
    format!("{sign}{}", format_money(symbol, amount))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_uses_two_decimals() {
        assert_eq!(format_money("$", 70.0), "$70.00");
        assert_eq!(format_money("€", 1.005), "€1.00");
        assert_eq!(format_money("$", -10.0), "$-10.00");
    }

    #[test]
    fn signed_money_follows_kind() {
        assert_eq!(format_signed_money("$", TransactionKind::Expense, 40.0), "-$40.00");
        assert_eq!(format_signed_money("$", TransactionKind::Income, 10.0), "+$10.00");
    }
}
