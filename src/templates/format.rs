use chrono::NaiveDate;

/// `25000000.0` -> `$25,000,000.00` (Canadian dollars, en-CA style).
pub fn format_cad(amount: f64) -> String {
    let cents = (amount.max(0.0) * 100.0).round() as u64;
    let dollars = (cents / 100).to_string();

    let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
    for (i, ch) in dollars.chars().enumerate() {
        if i > 0 && (dollars.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("${grouped}.{:02}", cents % 100)
}

/// en-CA short dates are ISO: `2024-01-15`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
