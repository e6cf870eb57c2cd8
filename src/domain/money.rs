//! Display helpers for money and hours.

use rust_decimal::Decimal;

/// `₱3,014.30` style: two decimals, comma thousands separator.
pub fn format_money(amount: Decimal, symbol: &str) -> String {
    let fixed = format!("{:.2}", amount.abs().round_dp(2));
    let (whole, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if amount.is_sign_negative() && !amount.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}{symbol}{}.{frac}", group_thousands(whole))
}

/// `88h`, `2.6h`.
pub fn format_hours(hours: Decimal) -> String {
    format!("{}h", hours.normalize())
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (len - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
