/// Inserts a `,` between every group of three digits, counting from the right.
pub fn group_thousands(number: u64) -> String {
    let digits = number.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

/// Renders an amount of money for display.
pub fn money(amount: u64) -> String {
    format!("{} (VND)", group_thousands(amount))
}
