//! Date pattern rendering with the common web-framework format characters
//! (`d`, `j`, `N`, `F`, `Y`, `P`, ...). Month, weekday and meridiem names
//! go through the translator so a loaded catalog localizes them.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use super::translator::Translator;

/// Value accepted by `Translator::format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateValue {
    Date(NaiveDate),
    DateTime(NaiveDateTime),
    Time(NaiveTime),
}

impl DateValue {
    fn parts(self) -> (Option<NaiveDate>, NaiveTime) {
        match self {
            Self::Date(date) => (Some(date), NaiveTime::MIN),
            Self::DateTime(datetime) => (Some(datetime.date()), datetime.time()),
            Self::Time(time) => (None, time),
        }
    }
}

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const MONTHS_3: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

const MONTHS_AP: [&str; 12] = [
    "Jan.", "Feb.", "March", "April", "May", "June", "July", "Aug.", "Sept.", "Oct.", "Nov.",
    "Dec.",
];

const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

const WEEKDAYS_ABBR: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

pub(crate) fn render_date_pattern<T: Translator + ?Sized>(
    translator: &T,
    value: &DateValue,
    pattern: &str,
) -> String {
    let (date, time) = value.parts();
    let mut out = String::with_capacity(pattern.len() * 2);
    let mut chars = pattern.chars();

    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(escaped) = chars.next() {
                out.push(escaped);
            }
            continue;
        }
        if let Some(text) = time_char(translator, c, time) {
            out.push_str(&text);
            continue;
        }
        match (date, date_char(translator, c, date)) {
            (_, Some(text)) => out.push_str(&text),
            // Date characters render as nothing for bare times.
            (None, None) if is_date_char(c) => {}
            _ => out.push(c),
        }
    }
    out
}

fn is_date_char(c: char) -> bool {
    matches!(
        c,
        'b' | 'd' | 'D' | 'E' | 'F' | 'j' | 'l' | 'L' | 'm' | 'M' | 'n' | 'N' | 'S' | 't' | 'w'
            | 'y' | 'Y' | 'z'
    )
}

fn time_char<T: Translator + ?Sized>(translator: &T, c: char, time: NaiveTime) -> Option<String> {
    let hour = time.hour();
    let hour12 = match hour % 12 {
        0 => 12,
        h => h,
    };
    let text = match c {
        'a' => translator.translate(if hour < 12 { "a.m." } else { "p.m." }),
        'A' => translator.translate(if hour < 12 { "AM" } else { "PM" }),
        'f' => twelve_hour_with_minutes(hour12, time.minute()),
        'g' => hour12.to_string(),
        'G' => hour.to_string(),
        'h' => format!("{hour12:02}"),
        'H' => format!("{hour:02}"),
        'i' => format!("{:02}", time.minute()),
        's' => format!("{:02}", time.second()),
        'P' => {
            if time.minute() == 0 && hour == 0 {
                translator.translate("midnight")
            } else if time.minute() == 0 && hour == 12 {
                translator.translate("noon")
            } else {
                let meridiem = translator.translate(if hour < 12 { "a.m." } else { "p.m." });
                format!("{} {meridiem}", twelve_hour_with_minutes(hour12, time.minute()))
            }
        }
        _ => return None,
    };
    Some(text)
}

fn twelve_hour_with_minutes(hour12: u32, minute: u32) -> String {
    if minute == 0 {
        hour12.to_string()
    } else {
        format!("{hour12}:{minute:02}")
    }
}

fn date_char<T: Translator + ?Sized>(
    translator: &T,
    c: char,
    date: Option<NaiveDate>,
) -> Option<String> {
    let date = date?;
    let month_index = date.month0() as usize;
    let weekday_index = date.weekday().num_days_from_monday() as usize;
    let text = match c {
        'b' => translator.translate(MONTHS_3[month_index]).to_lowercase(),
        'd' => format!("{:02}", date.day()),
        'D' => translator.translate(WEEKDAYS_ABBR[weekday_index]),
        'E' => translator.translate_context("alt. month", MONTHS[month_index]),
        'F' => translator.translate(MONTHS[month_index]),
        'j' => date.day().to_string(),
        'l' => translator.translate(WEEKDAYS[weekday_index]),
        'L' => (if date.leap_year() { "True" } else { "False" }).to_owned(),
        'm' => format!("{:02}", date.month()),
        'M' => translator.translate(&capitalize(MONTHS_3[month_index])),
        'n' => date.month().to_string(),
        'N' => translator.translate_context("abbrev. month", MONTHS_AP[month_index]),
        'S' => ordinal_suffix(date.day()).to_owned(),
        't' => days_in_month(date).to_string(),
        'w' => date.weekday().num_days_from_sunday().to_string(),
        'y' => format!("{:02}", date.year().rem_euclid(100)),
        'Y' => date.year().to_string(),
        'z' => date.ordinal().to_string(),
        _ => return None,
    };
    Some(text)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn ordinal_suffix(day: u32) -> &'static str {
    if (11..=13).contains(&day) {
        return "th";
    }
    match day % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

fn days_in_month(date: NaiveDate) -> u32 {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|next| next.pred_opt())
        .map_or(31, |last| last.day())
}

#[cfg(test)]
mod tests {
    use super::{DateValue, days_in_month, ordinal_suffix};
    use crate::i18n::{IdentityTranslator, Translator};
    use chrono::{NaiveDate, NaiveTime};

    fn datetime(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateValue {
        let date = NaiveDate::from_ymd_opt(y, m, d).expect("valid date");
        let time = NaiveTime::from_hms_opt(h, min, 0).expect("valid time");
        DateValue::DateTime(date.and_time(time))
    }

    #[test]
    fn english_named_formats_render() {
        let translator = IdentityTranslator::new();
        let value = datetime(2024, 9, 3, 14, 30);
        assert_eq!(translator.format(&value, "DATE_FORMAT"), "Sept. 3, 2024");
        assert_eq!(translator.format(&value, "DATETIME_FORMAT"), "Sept. 3, 2024, 2:30 p.m.");
        assert_eq!(translator.format(&value, "SHORT_DATE_FORMAT"), "09/03/2024");
        assert_eq!(translator.format(&value, "YEAR_MONTH_FORMAT"), "September 2024");
    }

    #[test]
    fn midnight_and_noon_have_names() {
        let translator = IdentityTranslator::new();
        assert_eq!(translator.format(&datetime(2024, 1, 1, 0, 0), "P"), "midnight");
        assert_eq!(translator.format(&datetime(2024, 1, 1, 12, 0), "P"), "noon");
        assert_eq!(translator.format(&datetime(2024, 1, 1, 9, 0), "P"), "9 a.m.");
    }

    #[test]
    fn backslash_escapes_format_characters() {
        let translator = IdentityTranslator::new();
        let value = datetime(2023, 2, 1, 8, 5);
        assert_eq!(translator.format(&value, "\\Y\\e\\a\\r: Y, jS"), "Year: 2023, 1st");
        assert_eq!(translator.format(&value, "D l M b"), "Wed Wednesday Feb feb");
        assert_eq!(translator.format(&value, "H:i G g A"), "08:05 8 8 AM");
    }

    #[test]
    fn bare_times_skip_date_characters() {
        let translator = IdentityTranslator::new();
        let time = NaiveTime::from_hms_opt(23, 59, 7).expect("valid time");
        assert_eq!(translator.format(&DateValue::Time(time), "Y H:i:s"), " 23:59:07");
    }

    #[test]
    fn calendar_helpers() {
        assert_eq!(ordinal_suffix(11), "th");
        assert_eq!(ordinal_suffix(22), "nd");
        let feb = NaiveDate::from_ymd_opt(2024, 2, 10).expect("valid date");
        assert_eq!(days_in_month(feb), 29);
        let dec = NaiveDate::from_ymd_opt(2023, 12, 10).expect("valid date");
        assert_eq!(days_in_month(dec), 31);
    }
}
