//! Currency formatting for amounts stored in minor units.

/// Formats an amount in cents as US dollars, e.g. `123456` becomes `"$1,234.56"`.
///
/// Negative amounts keep their sign in front of the symbol: `-500` becomes `"-$5.00"`.
#[must_use]
pub fn format_currency(minor_units: i64) -> String {
    let sign = if minor_units < 0 { "-" } else { "" };
    let abs = minor_units.unsigned_abs();
    let dollars = group_thousands(abs / 100);
    let cents = abs % 100;

    format!("{sign}${dollars}.{cents:02}")
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}
