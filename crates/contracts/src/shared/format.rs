/// Форматирует целое число с разделителями тысяч (запятыми)
///
/// # Примеры
/// ```
/// use contracts::shared::format::format_number;
/// assert_eq!(format_number(1234567), "1,234,567");
/// assert_eq!(format_number(42), "42");
/// ```
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

/// Цена в долларах: целые суммы без копеек, дробные с двумя знаками
///
/// # Примеры
/// ```
/// use contracts::shared::format::format_price;
/// assert_eq!(format_price(199.0), "$199");
/// assert_eq!(format_price(1396.0), "$1,396");
/// assert_eq!(format_price(12.5), "$12.50");
/// ```
pub fn format_price(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let abs = amount.abs();
    let cents = (abs * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;
    if frac == 0 {
        format!("{}${}", sign, format_number(whole))
    } else {
        format!("{}${}.{:02}", sign, format_number(whole), frac)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(1234567890), "1,234,567,890");
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(0.0), "$0");
        assert_eq!(format_price(597.0), "$597");
        assert_eq!(format_price(8982.0), "$8,982");
        assert_eq!(format_price(4.999), "$5");
        assert_eq!(format_price(-20.25), "-$20.25");
    }
}
