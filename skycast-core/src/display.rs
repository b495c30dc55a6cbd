//! Render-ready view data assembled from a forecast and a locale.
//!
//! Everything here is a pure function of its inputs. All displayed
//! temperatures are floored, never rounded to nearest.

use crate::{
    catalog::WeatherCode,
    locale::LocaleDictionary,
    model::{CurrentConditions, DailySeries, ForecastRecord, HourlySeries},
    presentation::{self, format_date, format_time, icon_path},
};

const HOURS_PER_DAY: usize = 24;

/// Spacing between hourly samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stride {
    Two,
    #[default]
    Four,
}

impl Stride {
    pub fn hours(self) -> usize {
        match self {
            Stride::Two => 2,
            Stride::Four => 4,
        }
    }

    /// Expanded view samples every two hours.
    pub fn for_show_more(show_more: bool) -> Self {
        if show_more { Stride::Two } else { Stride::Four }
    }
}

/// Where the hourly samples begin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HourlyStart {
    #[default]
    Midnight,
    /// Hour of the forecast's own `current.time`; midnight if absent.
    CurrentHour,
    Hour(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DisplayOptions {
    pub stride: Stride,
    pub start: HourlyStart,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewModel<'a> {
    pub heading: String,
    pub labels: Labels,
    pub current: Option<CurrentView>,
    pub hourly: HourlyView<'a>,
    pub daily: Vec<DailyEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    pub hourly: String,
    pub daily: String,
    pub tutorial: String,
    pub footer: String,
    /// `showless` when the hourly view is expanded, `showmore` otherwise.
    pub toggle: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentView {
    pub temperature: i64,
    pub icon: String,
    pub description: String,
    pub wind: String,
    pub gusts: String,
    pub humidity: String,
    pub today_max: Option<i64>,
    pub today_min: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HourlyEntry {
    pub time: String,
    pub icon: String,
    pub temperature: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyEntry {
    pub label: String,
    pub icon: String,
    pub max: i64,
    pub min: i64,
}

/// Lazy view over the hourly series. Each call to [`HourlyView::iter`]
/// starts a fresh pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HourlyView<'a> {
    series: &'a HourlySeries,
    stride: usize,
    start: usize,
}

impl<'a> HourlyView<'a> {
    pub fn new(series: &'a HourlySeries, stride: Stride, start: usize) -> Self {
        Self {
            series,
            stride: stride.hours(),
            start: start % HOURS_PER_DAY,
        }
    }

    pub fn iter(&self) -> HourlySamples<'a> {
        HourlySamples {
            view: *self,
            step: 0,
        }
    }

    /// Number of slots in one pass, before out-of-range indices are skipped.
    pub fn slots(&self) -> usize {
        HOURS_PER_DAY.div_ceil(self.stride)
    }
}

impl<'a> IntoIterator for &HourlyView<'a> {
    type Item = HourlyEntry;
    type IntoIter = HourlySamples<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[derive(Debug, Clone)]
pub struct HourlySamples<'a> {
    view: HourlyView<'a>,
    step: usize,
}

impl Iterator for HourlySamples<'_> {
    type Item = HourlyEntry;

    fn next(&mut self) -> Option<Self::Item> {
        let series = self.view.series;

        while self.step < self.view.slots() {
            let index = (self.view.start + self.step * self.view.stride) % HOURS_PER_DAY;
            self.step += 1;

            let (Some(time), Some(temperature)) =
                (series.time.get(index), series.temperature_2m.get(index))
            else {
                continue;
            };
            let code = series
                .weathercode
                .get(index)
                .copied()
                .unwrap_or(WeatherCode(u16::MAX));

            return Some(HourlyEntry {
                time: format_time(time),
                icon: icon_path(code, time),
                temperature: floor(*temperature),
            });
        }

        None
    }
}

/// Build the view for `forecast` at `place_name`.
pub fn assemble<'a>(
    forecast: &'a ForecastRecord,
    locale: &LocaleDictionary,
    place_name: &str,
    options: DisplayOptions,
) -> ViewModel<'a> {
    let heading = match &forecast.current {
        Some(current) => format!(
            "{place_name}, {}",
            format_date(&current.time, locale.lang())
        ),
        None => place_name.to_string(),
    };

    let start = match options.start {
        HourlyStart::Midnight => 0,
        HourlyStart::CurrentHour => forecast
            .current
            .as_ref()
            .and_then(|c| presentation::hour_of_day(&c.time))
            .map_or(0, |h| h as usize),
        HourlyStart::Hour(hour) => hour,
    };

    ViewModel {
        heading,
        labels: labels(locale, options.stride),
        current: forecast
            .current
            .as_ref()
            .map(|c| current_view(c, &forecast.daily, locale)),
        hourly: HourlyView::new(&forecast.hourly, options.stride, start),
        daily: daily_entries(&forecast.daily, locale),
    }
}

fn labels(locale: &LocaleDictionary, stride: Stride) -> Labels {
    let toggle = match stride {
        Stride::Two => "showless",
        Stride::Four => "showmore",
    };

    Labels {
        hourly: locale.label("hourly").to_string(),
        daily: locale.label("daily").to_string(),
        tutorial: locale.label("tutorial").to_string(),
        footer: locale.label("footer").to_string(),
        toggle: locale.label(toggle).to_string(),
    }
}

fn current_view(
    current: &CurrentConditions,
    daily: &DailySeries,
    locale: &LocaleDictionary,
) -> CurrentView {
    CurrentView {
        temperature: floor(current.temperature_2m),
        icon: icon_path(current.weathercode, &current.time),
        description: locale.weather(current.weathercode).to_string(),
        wind: format!("{} km/h", current.wind_speed_10m),
        gusts: format!("{} km/h", floor(current.wind_gusts_10m)),
        humidity: format!("{}%", current.relative_humidity_2m),
        today_max: daily.temperature_2m_max.first().copied().map(floor),
        today_min: daily.temperature_2m_min.first().copied().map(floor),
    }
}

fn daily_entries(daily: &DailySeries, locale: &LocaleDictionary) -> Vec<DailyEntry> {
    daily
        .time
        .iter()
        .enumerate()
        .skip(1)
        .filter_map(|(index, time)| {
            let max = *daily.temperature_2m_max.get(index)?;
            let min = *daily.temperature_2m_min.get(index)?;
            let code = daily
                .weathercode
                .get(index)
                .copied()
                .unwrap_or(WeatherCode(u16::MAX));

            let label = if index == 1 {
                locale.label("tomorrow").to_string()
            } else {
                format_date(time, locale.lang())
            };

            Some(DailyEntry {
                label,
                icon: icon_path(code, time),
                max: floor(max),
                min: floor(min),
            })
        })
        .collect()
}

fn floor(value: f64) -> i64 {
    value.floor() as i64
}
