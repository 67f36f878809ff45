//! Formatting helpers for view models.

use chrono::NaiveDate;

/// `MMM dd, yyyy`, e.g. `Jan 15, 2022`.
pub const HIRE_DATE_FORMAT: &str = "%b %d, %Y";

/// Formats a calendar date with a chrono `strftime` pattern.
pub fn format_date(date: NaiveDate, pattern: &str) -> String {
    date.format(pattern).to_string()
}

pub fn format_hire_date(date: NaiveDate) -> String {
    format_date(date, HIRE_DATE_FORMAT)
}

/// Formats a dollar amount with thousands separators.
///
/// Whole amounts print without decimals (`$85,000`); fractional amounts
/// print with two (`$1,234.50`).
pub fn format_currency(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = group_thousands(cents / 100);
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    match cents % 100 {
        0 => format!("{sign}${whole}"),
        fraction => format!("{sign}${whole}.{fraction:02}"),
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::{format_currency, format_hire_date};
    use chrono::NaiveDate;

    #[test]
    fn currency_groups_thousands() {
        assert_eq!(format_currency(375_000.0), "$375,000");
        assert_eq!(format_currency(999.0), "$999");
        assert_eq!(format_currency(1_234_567.5), "$1,234,567.50");
        assert_eq!(format_currency(0.0), "$0");
    }

    #[test]
    fn hire_date_uses_short_month_name() {
        let date = NaiveDate::from_ymd_opt(2023, 6, 5).unwrap();
        assert_eq!(format_hire_date(date), "Jun 05, 2023");
    }
}
