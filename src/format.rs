//! Display formatting shared by the CLI tables and the UI

/// Group digits in threes: `4664` -> `"4,664"`
pub fn thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Whole dollars with grouping: `125000` -> `"$125,000"`
pub fn currency(value: u64) -> String {
    format!("${}", thousands(value))
}

/// Short dollar amount for stat cards: `422000` -> `"$422K"`
pub fn compact_currency(value: u64) -> String {
    let v = value as f64;
    if value >= 1_000_000 {
        format!("${:.1}M", v / 1_000_000.0)
    } else if value >= 1_000 {
        format!("${:.0}K", v / 1_000.0)
    } else {
        format!("${}", value)
    }
}

/// Menu price: whole amounts without decimals
pub fn price(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("${:.0}", value)
    } else {
        format!("${:.2}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thousands() {
        assert_eq!(thousands(0), "0");
        assert_eq!(thousands(999), "999");
        assert_eq!(thousands(4664), "4,664");
        assert_eq!(thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn test_currency() {
        assert_eq!(currency(125_000), "$125,000");
        assert_eq!(compact_currency(422_000), "$422K");
        assert_eq!(compact_currency(2_500_000), "$2.5M");
        assert_eq!(compact_currency(950), "$950");
    }

    #[test]
    fn test_price() {
        assert_eq!(price(18.0), "$18");
        assert_eq!(price(12.5), "$12.50");
    }
}
