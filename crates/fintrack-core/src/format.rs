use chrono::NaiveDate;

/// Formats currency amounts for presentation.
pub trait CurrencyFormatter: Send + Sync {
    fn format_amount(&self, amount: f64, currency: &str) -> String;
}

/// Formats dates for presentation.
pub trait DateFormatter: Send + Sync {
    fn format_date(&self, date: NaiveDate) -> String;
}

/// `$1,234.56` style output with two decimals and comma grouping.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardCurrencyFormatter;

impl StandardCurrencyFormatter {
    fn symbol(currency: &str) -> Option<&'static str> {
        match currency {
            "USD" => Some("$"),
            "EUR" => Some("€"),
            "GBP" => Some("£"),
            "JPY" => Some("¥"),
            _ => None,
        }
    }
}

impl CurrencyFormatter for StandardCurrencyFormatter {
    fn format_amount(&self, amount: f64, currency: &str) -> String {
        let sign = if amount < 0.0 { "-" } else { "" };
        let fixed = format!("{:.2}", amount.abs());
        let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
        let grouped = group_thousands(whole);
        match Self::symbol(currency) {
            Some(symbol) => format!("{sign}{symbol}{grouped}.{cents}"),
            None => format!("{sign}{currency} {grouped}.{cents}"),
        }
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `Mar 14, 2025`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShortDateFormatter;

impl DateFormatter for ShortDateFormatter {
    fn format_date(&self, date: NaiveDate) -> String {
        date.format("%b %-d, %Y").to_string()
    }
}
