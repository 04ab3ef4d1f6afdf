/// Insert thousands separators into a whole-dollar amount
fn group_thousands(dollars: i64) -> String {
    let dollars_str = dollars.to_string();
    let mut result = String::new();
    for (i, c) in dollars_str.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Format a currency value without cents (e.g. $190,526)
pub fn format_currency(value: f64) -> String {
    let dollars = value.abs().round() as i64;
    let sign = if value < 0.0 && dollars > 0 { "-" } else { "" };
    format!("{}${}", sign, group_thousands(dollars))
}

/// Format a currency value in compact form (e.g., $2.29M, $190.5K, $50)
pub fn format_compact_currency(value: f64) -> String {
    let abs_value = value.abs();
    let sign = if value < 0.0 { "-" } else { "" };

    if abs_value >= 1_000_000.0 {
        format!("{}${:.2}M", sign, abs_value / 1_000_000.0)
    } else if abs_value >= 1_000.0 {
        format!("{}${:.1}K", sign, abs_value / 1_000.0)
    } else {
        format!("{}${:.0}", sign, abs_value)
    }
}

/// Format a value already expressed in percent
pub fn format_percent(value: f64) -> String {
    format!("{value:.0}%")
}

/// Format a month count with one decimal
pub fn format_months(value: f64) -> String {
    format!("{value:.1} mo")
}

/// Format a whole count with thousands separators
pub fn format_count(value: u32) -> String {
    group_thousands(i64::from(value))
}
