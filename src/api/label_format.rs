use chrono::{Datelike, NaiveDate};

const GROUP_SEPARATOR: char = ',';
const GROUP_SIZE: usize = 3;

/// Formats `value` with a `,` between every group of three integer digits.
///
/// Uses the shortest round-trip decimal form of `value`; any fractional part
/// is kept verbatim. Non-finite values are returned as-is.
#[must_use]
pub fn group_thousands(value: f64) -> String {
    if value == 0.0 {
        // `-0.0` prints as "-0".
        return "0".to_owned();
    }
    if !value.is_finite() {
        return value.to_string();
    }
    group_digits(&value.to_string())
}

/// Inserts grouping separators into an already formatted decimal string.
///
/// Digits are counted right to left from the decimal point (or from the last
/// integer digit), and a separator never precedes the leading digit. A
/// leading sign is kept outside the grouped digits.
#[must_use]
pub fn group_digits(numeric: &str) -> String {
    let (sign, unsigned) = match numeric.strip_prefix(['-', '+']) {
        Some(rest) => (&numeric[..1], rest),
        None => ("", numeric),
    };
    let (integer, fraction) = match unsigned.rfind('.') {
        Some(dot) => unsigned.split_at(dot),
        None => (unsigned, ""),
    };

    let digit_count = integer.chars().count();
    let mut grouped = String::with_capacity(numeric.len() + digit_count / GROUP_SIZE);
    grouped.push_str(sign);
    for (index, ch) in integer.chars().enumerate() {
        let remaining = digit_count - index;
        if index > 0 && remaining % GROUP_SIZE == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(ch);
    }
    grouped.push_str(fraction);
    grouped
}

/// Calendar quarter (1..=4) of a zero-indexed month.
#[must_use]
pub fn quarter_of_month0(month0: u32) -> u32 {
    month0 / 3 + 1
}

/// `"{year} Q{quarter}"`, e.g. `"1947 Q1"`.
#[must_use]
pub fn quarter_label(date: NaiveDate) -> String {
    format!("{} Q{}", date.year(), quarter_of_month0(date.month0()))
}

/// `"$" + grouped value + " Billion"`.
#[must_use]
pub fn amount_label(value: f64) -> String {
    format!("${} Billion", group_thousands(value))
}

#[must_use]
pub fn year_tick_label(date: NaiveDate) -> String {
    date.format("%Y").to_string()
}

#[must_use]
pub fn value_tick_label(value: f64) -> String {
    group_thousands(value)
}
