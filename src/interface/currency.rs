/// Format an amount as `<symbol><thousands-grouped value with 2 decimals>`.
///
/// Negative amounts keep the sign after the symbol (`₹-1,234.00`).
/// Non-finite values are rendered as `nan` / `inf` / `-inf`.
pub fn format_currency(value: f64, symbol: &str) -> String {
    if value.is_nan() {
        return format!("{}nan", symbol);
    }
    if value.is_infinite() {
        let sign = if value < 0.0 { "-" } else { "" };
        return format!("{}{}inf", symbol, sign);
    }

    let fixed = format!("{:.2}", value);
    let (sign, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, "00"));

    format!("{}{}{}.{}", symbol, sign, group_thousands(int_part), frac_part)
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
