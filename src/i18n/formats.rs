use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One entry of a locale format table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FormatValue {
    Text(String),
    Number(i64),
    List(Vec<String>),
}

/// Locale-specific date and number formatting patterns.
///
/// Keys follow the usual names (`DATE_FORMAT`, `DECIMAL_SEPARATOR`, ...).
/// Lookups of unknown names fall back to the name itself, so a literal
/// pattern such as `"Y-m-d"` can be passed wherever a format name is
/// expected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormatTable {
    entries: IndexMap<String, FormatValue>,
}

impl Default for FormatTable {
    fn default() -> Self {
        Self::english()
    }
}

impl FormatTable {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// English formats.
    #[must_use]
    pub fn english() -> Self {
        let text = |value: &str| FormatValue::Text(value.to_owned());
        let list = |values: &[&str]| {
            FormatValue::List(values.iter().map(|value| (*value).to_owned()).collect())
        };
        Self::empty()
            .with("DATE_FORMAT", text("N j, Y"))
            .with("DATETIME_FORMAT", text("N j, Y, P"))
            .with(
                "DATETIME_INPUT_FORMATS",
                list(&[
                    "%Y-%m-%d %H:%M:%S",
                    "%Y-%m-%d %H:%M:%S.%f",
                    "%Y-%m-%d %H:%M",
                    "%Y-%m-%d",
                    "%m/%d/%Y %H:%M:%S",
                    "%m/%d/%Y %H:%M",
                    "%m/%d/%Y",
                ]),
            )
            .with(
                "DATE_INPUT_FORMATS",
                list(&["%Y-%m-%d", "%m/%d/%Y", "%m/%d/%y", "%b %d %Y", "%d %B %Y"]),
            )
            .with("DECIMAL_SEPARATOR", text("."))
            .with("FIRST_DAY_OF_WEEK", FormatValue::Number(0))
            .with("MONTH_DAY_FORMAT", text("F j"))
            .with("NUMBER_GROUPING", FormatValue::Number(3))
            .with("SHORT_DATETIME_FORMAT", text("m/d/Y P"))
            .with("SHORT_DATE_FORMAT", text("m/d/Y"))
            .with("THOUSAND_SEPARATOR", text(","))
            .with("TIME_FORMAT", text("P"))
            .with("TIME_INPUT_FORMATS", list(&["%H:%M:%S", "%H:%M:%S.%f", "%H:%M"]))
            .with("YEAR_MONTH_FORMAT", text("F Y"))
    }

    #[must_use]
    pub fn with(mut self, name: &str, value: FormatValue) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: &str, value: FormatValue) {
        self.entries.insert(name.to_owned(), value);
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FormatValue> {
        self.entries.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FormatValue)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Text pattern registered under `name`, or `name` itself.
    #[must_use]
    pub fn pattern(&self, name: &str) -> String {
        match self.entries.get(name) {
            Some(FormatValue::Text(pattern)) => pattern.clone(),
            Some(FormatValue::Number(number)) => number.to_string(),
            Some(FormatValue::List(_)) | None => name.to_owned(),
        }
    }

    #[must_use]
    pub fn decimal_separator(&self) -> &str {
        self.text_or("DECIMAL_SEPARATOR", ".")
    }

    #[must_use]
    pub fn thousand_separator(&self) -> &str {
        self.text_or("THOUSAND_SEPARATOR", "")
    }

    #[must_use]
    pub fn number_grouping(&self) -> usize {
        match self.entries.get("NUMBER_GROUPING") {
            Some(FormatValue::Number(size)) => usize::try_from(*size).unwrap_or(0),
            Some(FormatValue::Text(size)) => size.trim().parse().unwrap_or(0),
            _ => 0,
        }
    }

    #[must_use]
    pub fn first_day_of_week(&self) -> u8 {
        match self.entries.get("FIRST_DAY_OF_WEEK") {
            Some(FormatValue::Number(day)) => u8::try_from(day.rem_euclid(7)).unwrap_or(0),
            _ => 0,
        }
    }

    fn text_or<'a>(&'a self, name: &str, fallback: &'a str) -> &'a str {
        match self.entries.get(name) {
            Some(FormatValue::Text(text)) => text,
            _ => fallback,
        }
    }

    /// Formats `value` with this table's separators and grouping.
    ///
    /// `decimal_pos` truncates or zero-pads the fractional part.
    #[must_use]
    pub fn format_number(&self, value: Decimal, decimal_pos: Option<u32>) -> String {
        format_decimal(
            value,
            self.decimal_separator(),
            decimal_pos,
            self.number_grouping(),
            self.thousand_separator(),
        )
    }
}

pub(crate) fn format_decimal(
    value: Decimal,
    decimal_separator: &str,
    decimal_pos: Option<u32>,
    grouping: usize,
    thousand_separator: &str,
) -> String {
    let raw = value.abs().normalize().to_string();
    let (int_part, dec_part) = raw.split_once('.').unwrap_or((raw.as_str(), ""));

    let dec_part = match decimal_pos {
        Some(places) => {
            let places = places as usize;
            let mut digits: String = dec_part.chars().take(places).collect();
            while digits.len() < places {
                digits.push('0');
            }
            digits
        }
        None => dec_part.to_owned(),
    };

    let int_part = if grouping > 0 && !thousand_separator.is_empty() {
        group_digits(int_part, grouping, thousand_separator)
    } else {
        int_part.to_owned()
    };

    let is_zero = int_part.chars().all(|c| !c.is_ascii_digit() || c == '0')
        && dec_part.chars().all(|c| c == '0');
    let sign = if value.is_sign_negative() && !is_zero {
        "-"
    } else {
        ""
    };

    if dec_part.is_empty() {
        format!("{sign}{int_part}")
    } else {
        format!("{sign}{int_part}{decimal_separator}{dec_part}")
    }
}

fn group_digits(digits: &str, grouping: usize, separator: &str) -> String {
    let mut groups = Vec::new();
    let mut end = digits.len();
    while end > grouping {
        groups.push(&digits[end - grouping..end]);
        end -= grouping;
    }
    groups.push(&digits[..end]);
    groups.reverse();
    groups.join(separator)
}

#[cfg(test)]
mod tests {
    use super::{FormatTable, FormatValue, format_decimal};
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(text: &str) -> Decimal {
        Decimal::from_str(text).expect("decimal literal")
    }

    #[test]
    fn groups_integer_part_from_the_right() {
        assert_eq!(format_decimal(dec("1234567.891"), ".", None, 3, ","), "1,234,567.891");
        assert_eq!(format_decimal(dec("123"), ".", None, 3, ","), "123");
        assert_eq!(format_decimal(dec("-1000"), ",", None, 3, "."), "-1.000");
    }

    #[test]
    fn decimal_positions_truncate_and_pad() {
        assert_eq!(format_decimal(dec("3.14159"), ".", Some(2), 0, ""), "3.14");
        assert_eq!(format_decimal(dec("2"), ".", Some(3), 0, ""), "2.000");
        assert_eq!(format_decimal(dec("-0.001"), ".", Some(2), 0, ""), "0.00");
    }

    #[test]
    fn unknown_pattern_names_fall_back_to_the_name() {
        let table = FormatTable::english();
        assert_eq!(table.pattern("DATE_FORMAT"), "N j, Y");
        assert_eq!(table.pattern("Y-m-d"), "Y-m-d");
    }

    #[test]
    fn separators_come_from_table_entries() {
        let table = FormatTable::empty()
            .with("DECIMAL_SEPARATOR", FormatValue::Text(",".to_owned()))
            .with("THOUSAND_SEPARATOR", FormatValue::Text("\u{a0}".to_owned()))
            .with("NUMBER_GROUPING", FormatValue::Number(3));
        assert_eq!(table.format_number(dec("9876543.5"), Some(2)), "9\u{a0}876\u{a0}543,50");
    }
}
