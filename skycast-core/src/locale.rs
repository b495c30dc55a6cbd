//! UI language tags and the localized string dictionaries behind them.

use std::{collections::HashMap, convert::TryFrom, fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    catalog::{self, WeatherCode},
    error::WeatherError,
};

/// Label keys every dictionary must provide, besides one entry per
/// catalogued weather code.
pub const REQUIRED_KEYS: &[&str] = &[
    "hourly", "daily", "tomorrow", "tutorial", "footer", "showmore", "showless", "loading",
];

const BUNDLED_EN: &str = include_str!("../locales/en.json");
const BUNDLED_PT: &str = include_str!("../locales/pt.json");
const BUNDLED_ES: &str = include_str!("../locales/es.json");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    En,
    Pt,
    Es,
}

impl Lang {
    pub fn as_str(&self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Pt => "pt",
            Lang::Es => "es",
        }
    }

    pub const fn all() -> &'static [Lang] {
        &[Lang::En, Lang::Pt, Lang::Es]
    }

    /// Language named by the first segment of a path such as `/pt/lisbon`.
    pub fn from_path(path: &str) -> Option<Lang> {
        let segment = path.trim_start_matches('/').split('/').next()?;
        Lang::try_from(segment).ok()
    }

    fn bundled(&self) -> &'static str {
        match self {
            Lang::En => BUNDLED_EN,
            Lang::Pt => BUNDLED_PT,
            Lang::Es => BUNDLED_ES,
        }
    }
}

impl std::fmt::Display for Lang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Lang {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let lower = value.trim().to_lowercase();

        match lower.as_str() {
            "en" => Ok(Lang::En),
            "pt" => Ok(Lang::Pt),
            "es" => Ok(Lang::Es),
            _ => Err(anyhow::anyhow!(
                "Unknown language '{value}'. Supported languages: en, pt, es."
            )),
        }
    }
}

/// Localized UI strings for one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleDictionary {
    lang: Lang,
    entries: HashMap<String, String>,
}

impl LocaleDictionary {
    /// Load the dictionary for `tag`, from `dir/{tag}.json` when a directory
    /// is given, otherwise from the bundled copy.
    pub fn load(tag: &str, dir: Option<&Path>) -> Result<Self, WeatherError> {
        let lang = Lang::try_from(tag).map_err(|e| locale_error(tag, e))?;

        match dir {
            Some(dir) => {
                let path = dir.join(format!("{}.json", lang.as_str()));
                let raw = fs::read_to_string(&path)
                    .map_err(|e| locale_error(tag, format!("{}: {e}", path.display())))?;
                Self::from_json(lang, &raw)
            }
            None => Self::bundled(lang),
        }
    }

    pub fn bundled(lang: Lang) -> Result<Self, WeatherError> {
        Self::from_json(lang, lang.bundled())
    }

    /// Parse and validate a JSON object of string values.
    pub fn from_json(lang: Lang, raw: &str) -> Result<Self, WeatherError> {
        let entries: HashMap<String, String> =
            serde_json::from_str(raw).map_err(|e| locale_error(lang.as_str(), e))?;

        let dictionary = Self { lang, entries };
        let missing = dictionary.missing_keys();
        if !missing.is_empty() {
            return Err(locale_error(
                lang.as_str(),
                format!("missing keys: {}", missing.join(", ")),
            ));
        }

        Ok(dictionary)
    }

    pub fn lang(&self) -> Lang {
        self.lang
    }

    pub fn text(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Label for `key`, or the key itself when the entry is absent.
    pub fn label<'a>(&'a self, key: &'a str) -> &'a str {
        self.text(key).unwrap_or(key)
    }

    /// Localized description of `code`; uncatalogued codes use the
    /// catalogue fallback.
    pub fn weather(&self, code: WeatherCode) -> &str {
        self.entries
            .get(&code.0.to_string())
            .map(String::as_str)
            .unwrap_or_else(|| catalog::describe(code))
    }

    fn missing_keys(&self) -> Vec<String> {
        let labels = REQUIRED_KEYS.iter().map(|k| k.to_string());
        let codes = WeatherCode::ALL.iter().map(|c| c.0.to_string());

        labels
            .chain(codes)
            .filter(|k| !self.entries.contains_key(k))
            .collect()
    }
}

fn locale_error(tag: &str, reason: impl std::fmt::Display) -> WeatherError {
    WeatherError::LocaleLoad {
        tag: tag.to_string(),
        reason: reason.to_string(),
    }
}
