//! Icon paths and date/time strings derived from provider timestamps.
//!
//! Timestamps are the provider's local `YYYY-MM-DDTHH:MM` strings (or bare
//! `YYYY-MM-DD` dates for daily entries). They are never converted between
//! time zones: the hour embedded in the string is the hour shown.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

use crate::{
    catalog::{self, WeatherCode},
    locale::Lang,
};

/// Codes whose icon looks the same by day and by night.
const TIME_INDEPENDENT: [u16; 16] = [
    3, 55, 61, 63, 65, 66, 67, 71, 73, 75, 77, 80, 81, 82, 85, 86,
];

const FIRST_DAY_HOUR: u32 = 7;
const LAST_DAY_HOUR: u32 = 19;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeOfDay {
    Day,
    Night,
}

impl TimeOfDay {
    pub fn from_hour(hour: u32) -> Self {
        if (FIRST_DAY_HOUR..=LAST_DAY_HOUR).contains(&hour) {
            TimeOfDay::Day
        } else {
            TimeOfDay::Night
        }
    }

    /// Day/night for `timestamp`; day when no hour can be read.
    pub fn of(timestamp: &str) -> Self {
        hour_of_day(timestamp)
            .map_or(TimeOfDay::Day, Self::from_hour)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeOfDay::Day => "day",
            TimeOfDay::Night => "night",
        }
    }
}

/// Hour read from the leading digits at character offsets 11..13.
pub fn hour_of_day(timestamp: &str) -> Option<u32> {
    let slot = timestamp.get(11..)?;
    let digits: String = slot
        .chars()
        .take(2)
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse().ok()
}

/// Path of the SVG icon for `code` at the time given by `timestamp`.
pub fn icon_path(code: WeatherCode, timestamp: &str) -> String {
    let base = catalog::icon_base_name(code);

    if TIME_INDEPENDENT.contains(&code.0) {
        return format!("/svg/{base}.svg");
    }

    format!("/svg/{base}-{}.svg", TimeOfDay::of(timestamp).as_str())
}

/// `HH:MM` of a provider timestamp, or `--:--` when it cannot be parsed.
pub fn format_time(timestamp: &str) -> String {
    match parse_timestamp(timestamp) {
        Some(dt) => format!("{:02}:{:02}", dt.hour(), dt.minute()),
        None => "--:--".to_string(),
    }
}

/// Short weekday, day and month in the order and spelling of `lang`.
/// Unparseable input is returned unchanged.
pub fn format_date(timestamp: &str, lang: Lang) -> String {
    let Some(date) = parse_date(timestamp) else {
        return timestamp.to_string();
    };

    let weekday = date.weekday().num_days_from_monday() as usize;
    let month = date.month0() as usize;
    let day = date.day();

    match lang {
        Lang::En => format!("{}, {} {day}", EN_WEEKDAYS[weekday], EN_MONTHS[month]),
        Lang::Pt => format!("{}, {day}/{:02}", PT_WEEKDAYS[weekday], month + 1),
        Lang::Es => format!("{}, {day} {}", ES_WEEKDAYS[weekday], ES_MONTHS[month]),
    }
}

fn parse_timestamp(timestamp: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M:%S"))
        .ok()
}

fn parse_date(timestamp: &str) -> Option<NaiveDate> {
    let date_part = timestamp.get(..10)?;
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

const EN_WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
const EN_MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const PT_WEEKDAYS: [&str; 7] = [
    "segunda", "terça", "quarta", "quinta", "sexta", "sábado", "domingo",
];

const ES_WEEKDAYS: [&str; 7] = ["lun", "mar", "mié", "jue", "vie", "sáb", "dom"];
const ES_MONTHS: [&str; 12] = [
    "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sept", "oct", "nov", "dic",
];

#[cfg(test)]
mod tests {
    use super::*;

    fn at(hour: u32) -> String {
        format!("2024-10-16T{hour:02}:00")
    }

    #[test]
    fn cloudy_has_no_time_suffix() {
        for hour in [0, 7, 12, 19, 23] {
            assert_eq!(icon_path(WeatherCode(3), &at(hour)), "/svg/cloudy.svg");
        }
    }

    #[test]
    fn clear_sky_switches_between_day_and_night() {
        assert!(icon_path(WeatherCode(0), &at(12)).ends_with("-day.svg"));
        assert!(icon_path(WeatherCode(0), &at(2)).ends_with("-night.svg"));
    }

    #[test]
    fn day_window_is_inclusive() {
        assert_eq!(icon_path(WeatherCode(0), &at(7)), "/svg/clear-day.svg");
        assert_eq!(icon_path(WeatherCode(0), &at(19)), "/svg/clear-day.svg");
        assert_eq!(icon_path(WeatherCode(0), &at(6)), "/svg/clear-night.svg");
        assert_eq!(icon_path(WeatherCode(0), &at(20)), "/svg/clear-night.svg");
    }

    #[test]
    fn unparseable_timestamp_defaults_to_day() {
        let inputs = [
            "",
            "garbage",
            "2024-10-16",
            "2024-10-16Txx:00",
            "日本語の文字列です",
        ];
        for bad in inputs {
            assert_eq!(icon_path(WeatherCode(2), bad), "/svg/partly-cloudy-day.svg");
        }
    }

    #[test]
    fn unknown_code_still_yields_a_path() {
        assert_eq!(icon_path(WeatherCode(42), &at(12)), "/svg/unknown-day.svg");
        assert_eq!(icon_path(WeatherCode(42), &at(23)), "/svg/unknown-night.svg");
    }

    #[test]
    fn light_rain_is_time_independent() {
        assert_eq!(icon_path(WeatherCode(61), &at(14)), "/svg/raindrop.svg");
        assert_eq!(icon_path(WeatherCode(61), &at(2)), "/svg/raindrop.svg");
    }

    #[test]
    fn thunderstorm_at_night() {
        assert_eq!(
            icon_path(WeatherCode(95), &at(22)),
            "/svg/thunderstorms-night.svg"
        );
    }

    #[test]
    fn hour_reads_embedded_local_time() {
        assert_eq!(hour_of_day("2024-10-16T05:30"), Some(5));
        assert_eq!(hour_of_day("2024-10-16T23:00+02:00"), Some(23));
        assert_eq!(hour_of_day("2024-10-16T7"), Some(7));
        assert_eq!(hour_of_day("2024-10-16"), None);
    }

    #[test]
    fn time_formatting() {
        assert_eq!(format_time("2024-10-16T05:00"), "05:00");
        assert_eq!(format_time("2024-10-16T17:45:00"), "17:45");
        assert_eq!(format_time("nonsense"), "--:--");
    }

    #[test]
    fn date_formatting_per_language() {
        assert_eq!(format_date("2024-10-16", Lang::En), "Wed, Oct 16");
        assert_eq!(format_date("2024-10-16T14:00", Lang::Pt), "quarta, 16/10");
        assert_eq!(format_date("2024-10-16", Lang::Es), "mié, 16 oct");
        assert_eq!(format_date("tomorrow-ish", Lang::En), "tomorrow-ish");
    }

    #[test]
    fn portuguese_dates_use_numeric_month() {
        assert_eq!(format_date("2024-01-07", Lang::Pt), "domingo, 7/01");
        assert_eq!(format_date("2024-03-02", Lang::Pt), "sábado, 2/03");
        assert_eq!(format_date("2024-12-31", Lang::Pt), "terça, 31/12");
    }
}
