//! Display Helpers

/// Currency prefix used for budgets and costs
pub const CURRENCY: &str = "₹";

/// Group an amount with thousands separators, at most two decimals
///
/// `10000.0` → `"10,000"`, `1234.5` → `"1,234.5"`.
pub fn group_thousands(amount: f64) -> String {
    let rounded = (amount * 100.0).round() / 100.0;
    let negative = rounded < 0.0;
    let abs = rounded.abs();

    let whole = abs.trunc() as u64;
    let cents = ((abs - abs.trunc()) * 100.0).round() as u64;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&grouped);
    if cents > 0 {
        let frac = format!("{:02}", cents);
        out.push('.');
        out.push_str(frac.trim_end_matches('0'));
    }
    out
}

/// `"₹10,000"`
pub fn money(amount: f64) -> String {
    format!("{}{}", CURRENCY, group_thousands(amount))
}

/// `"5 days"`, `"1 day"`
pub fn days(n: u32) -> String {
    if n == 1 {
        "1 day".to_string()
    } else {
        format!("{} days", n)
    }
}
